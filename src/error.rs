use core::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The grid has no rows, or its rows have no columns.
    EmptyGrid,

    /// The grid has more cells than fit in a `usize`.
    TooLarge { num_rows: usize, num_cols: usize },

    /// A row's length does not match the length of the first row.
    NotRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell value was something other than 0 (open) or 1 (wall).
    InvalidCell { row: usize, col: usize, value: u8 },

    /// A query named a cell that is not in the grid.
    OutOfBounds {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(fmt, "grid must have at least one row and one column"),
            Error::TooLarge { num_rows, num_cols } => write!(
                fmt,
                "a {}x{} grid has too many cells",
                num_rows, num_cols
            ),
            Error::NotRectangular {
                row,
                expected,
                actual,
            } => write!(
                fmt,
                "row {} has {} cells, expected {}",
                row, actual, expected
            ),
            Error::InvalidCell { row, col, value } => write!(
                fmt,
                "cell ({}, {}) has value {}, expected 0 or 1",
                row, col, value
            ),
            Error::OutOfBounds {
                row,
                col,
                num_rows,
                num_cols,
            } => write!(
                fmt,
                "cell ({}, {}) is outside a {}x{} grid",
                row, col, num_rows, num_cols
            ),
        }
    }
}

impl std::error::Error for Error {}
