//! Core data model for the counter grid.
//! A row-major array of per-cell click counters plus the index arithmetic around it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells, or `None` if it does not fit in `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(30, 20)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell index {index} out of range for grid of {len} cells")]
    OutOfRange { index: usize, len: usize },
    #[error("cell ({x}, {y}) outside {width}x{height} grid")]
    CoordOutOfRange { x: u32, y: u32, width: u32, height: u32 },
    #[error("grid dimensions must be positive (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },
    #[error("grid of {width}x{height} cells is too large to allocate")]
    TooLarge { width: u32, height: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: GridSize,
    /// Row-major counters; length = width * height.
    data: Vec<u32>,
}

impl Grid {
    pub fn new(size: GridSize) -> Result<Self, GridError> {
        if size.width == 0 || size.height == 0 {
            return Err(GridError::EmptyGrid {
                width: size.width,
                height: size.height,
            });
        }
        let len = size.cell_count().ok_or(GridError::TooLarge {
            width: size.width,
            height: size.height,
        })?;
        Ok(Self {
            size,
            data: vec![0; len],
        })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn coords_to_index(&self, x: u32, y: u32) -> Result<usize, GridError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(GridError::CoordOutOfRange {
                x,
                y,
                width: self.size.width,
                height: self.size.height,
            });
        }
        Ok(y as usize * self.size.width as usize + x as usize)
    }

    pub fn index_to_coords(&self, index: usize) -> Result<CellCoord, GridError> {
        self.check_index(index)?;
        let w = self.size.width as usize;
        Ok(CellCoord {
            x: (index % w) as u32,
            y: (index / w) as u32,
        })
    }

    /// Bumps the counter at `index` and returns the new value. Saturates at `u32::MAX`.
    pub fn increment(&mut self, index: usize) -> Result<u32, GridError> {
        self.check_index(index)?;
        let cell = &mut self.data[index];
        *cell = cell.saturating_add(1);
        Ok(*cell)
    }

    pub fn counter(&self, index: usize) -> Option<u32> {
        self.data.get(index).copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.data.iter().copied().enumerate()
    }

    fn check_index(&self, index: usize) -> Result<(), GridError> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                index,
                len: self.data.len(),
            })
        }
    }
}
