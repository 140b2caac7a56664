//! Decides whether a cell lies inside the fence drawn on a [`Grid`].
//!
//! The test casts a ray from the query cell to the right edge of the grid and
//! counts how many times it crosses the fence. An odd count means the cell is
//! inside.
//!
//! The hard part is a ray that runs *along* a wall instead of across it. A run
//! of wall cells only counts as a crossing if, somewhere during the run, there
//! was wall directly above it and wall directly below it:
//!
//! ```text
//!     1
//! ->  1        straight across: wall above and below, one crossing
//!     1
//!
//! ->  11111    along a "C": wall only ever below, so the ray just
//!     1   1    grazes the fence and stays on the same side
//!     1   1
//!
//!         1
//!         1
//! ->  11111    along a "Z": wall below at the start, wall above at the
//!     1        end, so the ray ends up on the other side
//!     1
//! ```
//!
//! The wall cells must form a single closed fence, one cell wide, with no
//! hanging edges. This is not checked; on any other input the answer is
//! meaningless (but the call still returns without panicking).

use crate::error::Error;
use crate::grid::Grid;
use bit_vec::BitVec;
use log::{debug, trace};

/// Controls how a run of wall cells contributes to the crossing count.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CrossingMode {
    /// Every wall column for which both "seen above" and "seen below" are set
    /// counts as a crossing. A thick run can therefore count more than once.
    PerColumn,

    /// A contiguous run of wall cells counts at most once, on the column where
    /// both flags first become set.
    PerRun,
}

impl Default for CrossingMode {
    fn default() -> Self {
        CrossingMode::PerColumn
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ScanOptions {
    pub mode: CrossingMode,
}

impl ScanOptions {
    pub fn with_mode(mode: CrossingMode) -> Self {
        Self { mode }
    }
}

/// State carried along the ray. `seen_above` and `seen_below` describe the
/// current run of wall cells only, and are cleared by the next open cell.
#[derive(Default)]
struct ScanState {
    seen_above: bool,
    seen_below: bool,
    num_crossings: usize,
    // true once the current run has been counted (PerRun only)
    counted_run: bool,
}

impl ScanState {
    fn open(&mut self) {
        self.seen_above = false;
        self.seen_below = false;
        self.counted_run = false;
    }

    fn wall(&mut self, grid: &Grid, row: usize, col: usize, mode: CrossingMode) {
        // There is no row above the top row, nor below the bottom row.
        if row == 0 {
            self.seen_above = false;
        } else if grid.is_wall(row - 1, col) {
            self.seen_above = true;
        }

        if row == grid.num_rows() - 1 {
            self.seen_below = false;
        } else if grid.is_wall(row + 1, col) {
            self.seen_below = true;
        }

        if self.seen_above && self.seen_below {
            match mode {
                CrossingMode::PerColumn => self.num_crossings += 1,
                CrossingMode::PerRun => {
                    if !self.counted_run {
                        self.num_crossings += 1;
                        self.counted_run = true;
                    }
                }
            }
        }
    }
}

fn check_bounds(grid: &Grid, row: usize, col: usize) -> Result<(), Error> {
    if grid.in_bounds(row, col) {
        Ok(())
    } else {
        Err(Error::OutOfBounds {
            row,
            col,
            num_rows: grid.num_rows(),
            num_cols: grid.num_cols(),
        })
    }
}

/// Casts the ray from `(row, col)` to the right edge of the grid and returns
/// the number of fence crossings. The starting cell is included in the scan.
pub fn count_crossings(
    grid: &Grid,
    row: usize,
    col: usize,
    options: ScanOptions,
) -> Result<usize, Error> {
    check_bounds(grid, row, col)?;
    Ok(scan(grid, row, col, options.mode))
}

fn scan(grid: &Grid, row: usize, col: usize, mode: CrossingMode) -> usize {
    let mut state = ScanState::default();
    for (i, wall) in grid.row_walls(row).enumerate().skip(col) {
        if wall {
            state.wall(grid, row, i, mode);
        } else {
            state.open();
        }
        trace!(
            "({}, {}) wall={} above={} below={} crossings={}",
            row,
            i,
            wall,
            state.seen_above,
            state.seen_below,
            state.num_crossings
        );
    }
    state.num_crossings
}

/// Returns true if `(row, col)` is contained by the fence.
///
/// Cells that are part of the fence itself are always contained. Crossings are
/// counted with the default [`CrossingMode`].
pub fn is_contained(grid: &Grid, row: usize, col: usize) -> Result<bool, Error> {
    is_contained_with(grid, row, col, ScanOptions::default())
}

pub fn is_contained_with(
    grid: &Grid,
    row: usize,
    col: usize,
    options: ScanOptions,
) -> Result<bool, Error> {
    check_bounds(grid, row, col)?;

    // We define a point on the fence to be contained in the fence.
    if grid.is_wall(row, col) {
        debug!("({}, {}) is on the fence", row, col);
        return Ok(true);
    }

    let num_crossings = scan(grid, row, col, options.mode);
    let contained = num_crossings % 2 == 1;
    debug!(
        "({}, {}): {} crossings ({:?}), contained = {}",
        row, col, num_crossings, options.mode, contained
    );
    Ok(contained)
}

/// Computes containment for every cell of the grid. The result is row-major,
/// with bit `row * num_cols + col` set if that cell is contained.
pub fn containment_mask(grid: &Grid, options: ScanOptions) -> BitVec {
    let mut mask = BitVec::from_elem(grid.num_cells(), false);
    for row in 0..grid.num_rows() {
        for col in 0..grid.num_cols() {
            let contained = grid.is_wall(row, col) || scan(grid, row, col, options.mode) % 2 == 1;
            mask.set(row * grid.num_cols() + col, contained);
        }
    }
    mask
}
