//! Frame drawing for the counter grid.
//!
//! `draw_frame` describes one full redraw against the [`Surface`] trait.
//! [`CanvasSurface`] backs it with a 2D canvas context; tests use a recording surface.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::AppState;
use crate::util::power_of_two_label;

/// A straight line segment in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Drawing primitives a frame needs.
pub trait Surface {
    fn fill_rect(&mut self, color: &str, x: f64, y: f64, w: f64, h: f64);
    /// Strokes all segments as a single path.
    fn stroke_lines(&mut self, color: &str, segments: &[Segment]);
    /// Draws `text` centered on (`cx`, `cy`) both ways.
    fn fill_text_centered(&mut self, color: &str, text: &str, cx: f64, cy: f64, font_px: u32);
}

pub fn grid_lines(state: &AppState) -> Vec<Segment> {
    let l = &state.layout;
    let (w, h) = (l.surface_width, l.surface_height);
    let cols = (0..state.grid.width()).map(|x| {
        let px = x as f64 * l.cell_size;
        Segment { from: (px, 0.0), to: (px, h) }
    });
    let rows = (0..state.grid.height()).map(|y| {
        let py = y as f64 * l.cell_size;
        Segment { from: (0.0, py), to: (w, py) }
    });
    cols.chain(rows).collect()
}

pub fn draw_frame<S: Surface>(surface: &mut S, state: &AppState) {
    let l = &state.layout;
    let p = &state.palette;
    surface.fill_rect(&p.background, 0.0, 0.0, l.surface_width, l.surface_height);
    surface.stroke_lines(&p.grid, &grid_lines(state));

    let font_px = (l.cell_size * state.font_scale).floor().max(0.0) as u32;
    for (i, counter) in state.grid.cells().filter(|&(_, c)| c > 0) {
        let Ok(cell) = state.grid.index_to_coords(i) else { continue };
        let (x, y) = l.cell_origin(cell.x, cell.y);
        surface.fill_rect(&p.foreground, x, y, l.cell_size, l.cell_size);
        let half = l.cell_size / 2.0;
        surface.fill_text_centered(&p.text, &power_of_two_label(counter), x + half, y + half, font_px);
    }
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("canvas element is not mounted")]
    NoCanvas,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for SurfaceError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        SurfaceError::Js(format!("{v:?}"))
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_lines(&mut self, color: &str, segments: &[Segment]) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        for s in segments {
            self.ctx.move_to(s.from.0, s.from.1);
            self.ctx.line_to(s.to.0, s.to.1);
        }
        self.ctx.stroke();
    }

    fn fill_text_centered(&mut self, color: &str, text: &str, cx: f64, cy: f64, font_px: u32) {
        self.ctx.set_font(&format!("{font_px}px Sans"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, cx, cy) {
            log::warn!("fill_text failed: {e:?}");
        }
    }
}
