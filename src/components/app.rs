use super::grid_view::GridView;
use crate::config::GridConfig;
use crate::state::AppState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    #[prop_or_default]
    pub config: GridConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // Built once; the grid view owns the state from here on.
    let initial = use_memo(props.config.clone(), |config| {
        config
            .validate()
            .map_err(|e| e.to_string())
            .and_then(|_| AppState::new(config).map_err(|e| e.to_string()))
    });

    match &*initial {
        Ok(state) => html! {
            <div id="root" style="display:flex; align-items:center; justify-content:center; width:100vw; height:100vh; background:#202020;">
                <GridView initial={state.clone()} />
            </div>
        },
        Err(msg) => {
            log::error!("invalid grid config: {msg}");
            html! {
                <div id="root" style="padding:12px; color:#f85149; font-family:sans-serif;">
                    { format!("Cannot start: {msg}") }
                </div>
            }
        }
    }
}
