//! Tests whether a cell of a binary grid lies inside a closed fence drawn on it.
//!
//! ```
//! use fence::{is_contained, Grid};
//!
//! let grid = Grid::from_rows(&[
//!     [0u8, 1, 1, 1, 0],
//!     [0, 1, 0, 1, 0],
//!     [0, 1, 1, 1, 0],
//! ]).unwrap();
//! assert_eq!(is_contained(&grid, 1, 2), Ok(true));
//! assert_eq!(is_contained(&grid, 1, 0), Ok(false));
//! ```

pub mod contain;
pub mod error;
pub mod grid;

#[cfg(test)]
mod testing;

pub use crate::contain::{
    containment_mask, count_crossings, is_contained, is_contained_with, CrossingMode, ScanOptions,
};
pub use crate::error::Error;
pub use crate::grid::{Cell, Grid};
