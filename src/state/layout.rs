// Surface sizing: fit the grid into a share of the viewport, keeping its aspect ratio.
use crate::model::GridSize;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    pub cell_size: f64,
    pub surface_width: f64,
    pub surface_height: f64,
}

impl Layout {
    /// Largest layout whose surface fits within `fill` of the viewport on both axes.
    pub fn fit(size: GridSize, viewport_w: f64, viewport_h: f64, fill: f64) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(viewport_w) || !usable(viewport_h) || size.width == 0 || size.height == 0 {
            return Self::default();
        }
        let cols = size.width as f64;
        let rows = size.height as f64;
        let (surface_width, surface_height) = if viewport_w / cols < viewport_h / rows {
            let w = viewport_w * fill;
            (w, w / cols * rows)
        } else {
            let h = viewport_h * fill;
            (h / rows * cols, h)
        };
        Self {
            cell_size: surface_width / cols,
            surface_width,
            surface_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.cell_size > 0.0)
    }

    /// Canvas backing-store size in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.surface_width.max(0.0).floor() as u32,
            self.surface_height.max(0.0).floor() as u32,
        )
    }

    /// Top-left corner of a cell in surface pixels.
    pub fn cell_origin(&self, x: u32, y: u32) -> (f64, f64) {
        (x as f64 * self.cell_size, y as f64 * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;
    const GRID: GridSize = GridSize::new(30, 20);

    #[test]
    fn narrow_viewport_binds_on_width() {
        let layout = Layout::fit(GRID, 600.0, 1000.0, 0.8);

        assert!((layout.surface_width - 480.0).abs() < EPS);
        assert!((layout.cell_size - 16.0).abs() < EPS);
        assert!((layout.surface_height - 320.0).abs() < EPS);
        assert!(layout.surface_height <= 0.8 * 1000.0);
    }

    #[test]
    fn wide_viewport_binds_on_height() {
        let layout = Layout::fit(GRID, 1920.0, 500.0, 0.8);

        assert!((layout.surface_height - 400.0).abs() < EPS);
        assert!((layout.cell_size - 20.0).abs() < EPS);
        assert!((layout.surface_width - 600.0).abs() < EPS);
    }

    #[test]
    fn fit_never_overflows_either_axis() {
        for (w, h) in [(800.0, 600.0), (1024.0, 768.0), (333.0, 1777.0), (3000.0, 200.0), (150.0, 100.0)] {
            let layout = Layout::fit(GRID, w, h, 0.8);
            let gw = GRID.width as f64 * layout.cell_size;
            let gh = GRID.height as f64 * layout.cell_size;
            assert!(gw <= 0.8 * w + EPS, "width overflow at {w}x{h}");
            assert!(gh <= 0.8 * h + EPS, "height overflow at {w}x{h}");
            // One axis is binding.
            assert!((gw - 0.8 * w).abs() < EPS || (gh - 0.8 * h).abs() < EPS);
        }
    }

    #[test]
    fn degenerate_viewport_gives_empty_layout() {
        assert!(Layout::fit(GRID, 0.0, 600.0, 0.8).is_empty());
        assert!(Layout::fit(GRID, 800.0, -1.0, 0.8).is_empty());
        assert!(Layout::fit(GRID, f64::NAN, 600.0, 0.8).is_empty());
        assert_eq!(Layout::default().pixel_size(), (0, 0));
    }

    #[test]
    fn pixel_size_rounds_down() {
        let layout = Layout::fit(GRID, 801.0, 2000.0, 0.8);

        assert_eq!(layout.pixel_size(), (640, 427));
    }
}
