use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};
use yew::prelude::*;

use crate::render::{CanvasSurface, SurfaceError, draw_frame};
use crate::state::{AppState, Point, RenderLoop, handle_click, handle_key};

#[derive(Properties, PartialEq, Clone)]
pub struct GridViewProps {
    pub initial: AppState,
}

type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Listeners and the frame loop attached while the canvas is mounted.
struct Mounted {
    window: Window,
    document: Document,
    click_cb: Closure<dyn FnMut(MouseEvent)>,
    key_cb: Closure<dyn FnMut(KeyboardEvent)>,
    resize_cb: Closure<dyn FnMut(web_sys::Event)>,
    frame_cell: FrameCell,
    render_loop: Rc<RefCell<RenderLoop>>,
}

impl Mounted {
    fn teardown(self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.click_cb.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.key_cb.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
        let pending = self.render_loop.borrow_mut().stop();
        if let Some(id) = pending {
            let _ = self.window.cancel_animation_frame(id);
        }
        log::debug!("render loop stopped after {} frames", self.render_loop.borrow().frames());
        // Breaks the frame closure's reference to its own cell.
        self.frame_cell.borrow_mut().take();
    }
}

fn apply_canvas_size(window: &Window, canvas: &HtmlCanvasElement, state: &RefCell<AppState>) {
    let vw = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let vh = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let layout = state.borrow_mut().resize(vw, vh);
    let (w, h) = layout.pixel_size();
    canvas.set_width(w);
    canvas.set_height(h);
    log::debug!("viewport {vw}x{vh} -> surface {w}x{h}, cell {:.2}px", layout.cell_size);
}

fn request_frame(window: &Window, frame_cell: &FrameCell, render_loop: &RefCell<RenderLoop>) {
    let cell = frame_cell.borrow();
    let Some(cb) = cell.as_ref() else { return };
    let f: &js_sys::Function = cb.as_ref().unchecked_ref();
    match window.request_animation_frame(f) {
        Ok(id) => render_loop.borrow_mut().set_pending(id),
        Err(e) => log::warn!("requestAnimationFrame failed: {e:?}"),
    }
}

fn mount(canvas: HtmlCanvasElement, state: Rc<RefCell<AppState>>) -> Result<Mounted, SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let document = window.document().ok_or(SurfaceError::NoDocument)?;
    // Fail early rather than every frame.
    CanvasSurface::from_canvas(&canvas)?;

    apply_canvas_size(&window, &canvas, &state);

    // Clicks are taken document-wide; the handler ignores anything off the grid.
    let click_cb = {
        let canvas = canvas.clone();
        let state = state.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            let pointer = Point::new(e.client_x() as f64, e.client_y() as f64);
            let origin = Point::new(rect.left(), rect.top());
            match handle_click(&mut state.borrow_mut(), pointer, origin) {
                Ok(out) => log::debug!(
                    "cell ({}, {}) #{} -> {}",
                    out.coord.x,
                    out.coord.y,
                    out.index,
                    out.counter
                ),
                Err(err) => log::debug!("click ignored: {err}"),
            }
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;

    let key_cb = {
        let state = state.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            handle_key(&mut state.borrow_mut(), &e.code());
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())?;

    let resize_cb = {
        let window = window.clone();
        let canvas = canvas.clone();
        let state = state.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            apply_canvas_size(&window, &canvas, &state);
        }) as Box<dyn FnMut(_)>)
    };
    window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

    let render_loop = Rc::new(RefCell::new(RenderLoop::new()));
    let frame_cell: FrameCell = Rc::new(RefCell::new(None));
    {
        let window_loop = window.clone();
        let frame_cell_loop = frame_cell.clone();
        let render_loop_frame = render_loop.clone();
        *frame_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let again = render_loop_frame.borrow_mut().frame(|| {
                if !canvas.is_connected() {
                    return;
                }
                match CanvasSurface::from_canvas(&canvas) {
                    Ok(mut surface) => draw_frame(&mut surface, &state.borrow()),
                    Err(err) => log::warn!("skipping frame: {err}"),
                }
            });
            if again {
                request_frame(&window_loop, &frame_cell_loop, &render_loop_frame);
            }
        }) as Box<dyn FnMut()>));
    }
    let start = render_loop.borrow_mut().start();
    if start {
        request_frame(&window, &frame_cell, &render_loop);
    }

    Ok(Mounted {
        window,
        document,
        click_cb,
        key_cb,
        resize_cb,
        frame_cell,
        render_loop,
    })
}

#[function_component(GridView)]
pub fn grid_view(props: &GridViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let app_state = {
        let initial = props.initial.clone();
        use_mut_ref(move || initial)
    };

    {
        let canvas_ref = canvas_ref.clone();
        let app_state = app_state.clone();
        use_effect_with((), move |_| {
            let mounted = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => mount(canvas, app_state),
                None => Err(SurfaceError::NoCanvas),
            };
            let mounted = match mounted {
                Ok(m) => Some(m),
                Err(err) => {
                    log::error!("grid view failed to mount: {err}");
                    None
                }
            };
            move || {
                if let Some(m) = mounted {
                    m.teardown();
                }
            }
        });
    }

    html! { <canvas id="canvas" ref={canvas_ref} /> }
}
