use crate::error::Error;
use bit_vec::BitVec;
use core::convert::TryFrom;
use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The contents of one grid cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Cell {
    Open = 0,
    Wall = 1,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// Number of cells in a `num_rows x num_cols` grid, if it fits in a `usize`.
fn cell_count(num_rows: usize, num_cols: usize) -> Result<usize, Error> {
    num_rows
        .checked_mul(num_cols)
        .ok_or(Error::TooLarge { num_rows, num_cols })
}

/// A rectangular grid of open and wall cells.
///
/// Cells are stored row-major in a bit vector; a set bit is a wall. A grid always
/// has at least one row and one column, and it cannot be modified once built.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    num_rows: usize,
    num_cols: usize,
    walls: BitVec,
}

impl Grid {
    /// Builds a grid from rows of 0 (open) and 1 (wall) values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        let num_rows = rows.len();
        let num_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if num_rows == 0 || num_cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut walls = BitVec::from_elem(cell_count(num_rows, num_cols)?, false);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != num_cols {
                return Err(Error::NotRectangular {
                    row,
                    expected: num_cols,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::try_from(value).map_err(|e| Error::InvalidCell {
                    row,
                    col,
                    value: e.number,
                })?;
                walls.set(row * num_cols + col, cell.is_wall());
            }
        }

        Ok(Self {
            num_rows,
            num_cols,
            walls,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_cells(&self) -> usize {
        self.walls.len()
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.num_rows && col < self.num_cols
    }

    fn assert_in_bounds(&self, row: usize, col: usize) {
        assert!(
            self.in_bounds(row, col),
            "cell ({}, {}) is outside a {}x{} grid",
            row,
            col,
            self.num_rows,
            self.num_cols
        );
    }

    /// Panics if `(row, col)` is out of range.
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.assert_in_bounds(row, col);
        self.walls[row * self.num_cols + col]
    }

    /// Iterates the wall bits of one row, left to right.
    pub fn row_walls(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        self.assert_in_bounds(row, 0);
        let start = row * self.num_cols;
        (start..start + self.num_cols).map(move |i| self.walls[i])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows {
            for wall in self.row_walls(row) {
                fmt.write_str(if wall { "1" } else { "0" })?;
            }
            fmt.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "Grid {}x{}:\n{}", self.num_rows, self.num_cols, self)
    }
}
