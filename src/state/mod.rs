pub mod input;
pub mod layout;
pub mod render_loop;

pub use input::{Point, handle_click, handle_key};
pub use layout::Layout;
pub use render_loop::RenderLoop;

use crate::config::{GridConfig, Palette};
use crate::model::{Grid, GridError};

/// Everything the input and render routines need, owned by the canvas component.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub grid: Grid,
    pub layout: Layout,
    pub palette: Palette,
    pub viewport_fill: f64,
    pub font_scale: f64,
}

impl AppState {
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(config.size)?,
            layout: Layout::default(),
            palette: config.palette.clone(),
            viewport_fill: config.viewport_fill,
            font_scale: config.font_scale,
        })
    }

    /// Recomputes the layout for a new viewport and returns it.
    pub fn resize(&mut self, viewport_w: f64, viewport_h: f64) -> Layout {
        self.layout = Layout::fit(self.grid.size(), viewport_w, viewport_h, self.viewport_fill);
        self.layout
    }
}
