// Pointer and keyboard handling: maps clicks onto cells and bumps their counters.
use thiserror::Error;

use super::{AppState, Layout};
use crate::model::{CellCoord, GridError, GridSize};

/// A point in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("click at ({x:.1}, {y:.1}) is outside the grid")]
    OutsideGrid { x: f64, y: f64 },
    #[error("surface has no layout yet")]
    NoLayout,
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub index: usize,
    pub coord: CellCoord,
    pub counter: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Unbound,
}

/// Converts a client-space pointer into the cell under it.
/// `origin` is the surface's top-left corner in the same client space.
pub fn pointer_to_cell(
    pointer: Point,
    origin: Point,
    layout: &Layout,
    size: GridSize,
) -> Result<CellCoord, InputError> {
    if layout.is_empty() {
        return Err(InputError::NoLayout);
    }
    let rel_x = pointer.x - origin.x;
    let rel_y = pointer.y - origin.y;
    let cx = (rel_x / layout.cell_size).floor();
    let cy = (rel_y / layout.cell_size).floor();
    // NaN fails both comparisons and is rejected with the rest.
    if !(cx >= 0.0 && cy >= 0.0 && cx < size.width as f64 && cy < size.height as f64) {
        return Err(InputError::OutsideGrid { x: rel_x, y: rel_y });
    }
    Ok(CellCoord {
        x: cx as u32,
        y: cy as u32,
    })
}

pub fn handle_click(
    state: &mut AppState,
    pointer: Point,
    origin: Point,
) -> Result<ClickOutcome, InputError> {
    let coord = pointer_to_cell(pointer, origin, &state.layout, state.grid.size())?;
    let index = state.grid.coords_to_index(coord.x, coord.y)?;
    let counter = state.grid.increment(index)?;
    Ok(ClickOutcome {
        index,
        coord,
        counter,
    })
}

/// Key-down hook. No key is bound yet.
pub fn handle_key(_state: &mut AppState, code: &str) -> KeyOutcome {
    log::trace!("keydown {code}: unbound");
    KeyOutcome::Unbound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::util::power_of_two_label;

    /// 30x20 grid laid out with 20px cells, surface at (100, 50).
    fn state() -> (AppState, Point) {
        let mut state = AppState::new(&GridConfig::default()).expect("default config");
        state.resize(1920.0, 500.0);
        assert_eq!(state.layout.cell_size, 20.0);
        (state, Point::new(100.0, 50.0))
    }

    #[test]
    fn click_at_surface_origin_hits_first_cell() {
        let (mut state, origin) = state();

        let out = handle_click(&mut state, origin, origin).expect("inside grid");

        assert_eq!(out.index, 0);
        assert_eq!(out.counter, 1);
        assert_eq!(power_of_two_label(out.counter), "2");
    }

    #[test]
    fn pointer_floors_into_cell() {
        let (state, origin) = state();
        let p = Point::new(origin.x + 59.9, origin.y + 20.0);

        let c = pointer_to_cell(p, origin, &state.layout, state.grid.size()).expect("inside");

        assert_eq!(c, CellCoord { x: 2, y: 1 });
    }

    #[test]
    fn three_clicks_on_cell_five_render_eight() {
        let (mut state, origin) = state();
        let p = Point::new(origin.x + 5.0 * 20.0 + 10.0, origin.y + 10.0);

        for _ in 0..3 {
            handle_click(&mut state, p, origin).expect("inside grid");
        }

        assert_eq!(state.grid.counter(5), Some(3));
        assert_eq!(power_of_two_label(3), "8");
    }

    #[test]
    fn clicks_outside_the_grid_are_ignored() {
        let (mut state, origin) = state();
        let before = state.grid.clone();

        let negative = Point::new(origin.x - 1.0, origin.y + 5.0);
        let past_right = Point::new(origin.x + 600.0, origin.y + 5.0);
        let past_bottom = Point::new(origin.x + 5.0, origin.y + 400.0);
        for p in [negative, past_right, past_bottom] {
            assert!(matches!(
                handle_click(&mut state, p, origin),
                Err(InputError::OutsideGrid { .. })
            ));
        }

        assert_eq!(state.grid, before);
    }

    #[test]
    fn click_before_layout_is_rejected() {
        let mut state = AppState::new(&GridConfig::default()).expect("default config");

        let err = handle_click(&mut state, Point::new(5.0, 5.0), Point::default())
            .expect_err("no layout yet");

        assert_eq!(err, InputError::NoLayout);
    }

    #[test]
    fn keys_are_unbound_and_leave_state_alone() {
        let (mut state, _) = state();
        let before = state.grid.clone();

        assert_eq!(handle_key(&mut state, "KeyA"), KeyOutcome::Unbound);
        assert_eq!(state.grid, before);
    }
}
