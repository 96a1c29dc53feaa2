mod components;
mod config;
mod model;
mod render;
mod state;
mod util;

use components::App;
use config::GridConfig;

fn main() {
    let config = GridConfig::default();
    util::init_logging(config.log_level);
    match serde_json::to_string(&config) {
        Ok(json) => log::info!("starting counter grid with {json}"),
        Err(e) => log::warn!("config not serialisable: {e}"),
    }
    yew::Renderer::<App>::with_props(components::app::AppProps { config }).render();
}
