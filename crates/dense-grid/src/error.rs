use std::error::Error;
use std::fmt;

/// Errors reported by the fallible `Grid` constructors and accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cell or row index fell outside the grid's shape.
    OutOfBounds {
        y: usize,
        x: usize,
        rows: usize,
        cols: usize,
    },
    /// A row index at or past the grid's row count.
    RowOutOfBounds { y: usize, rows: usize },
    /// A buffer whose length does not match `rows * cols`.
    Shape { rows: usize, cols: usize, len: usize },
    /// `rows * cols` does not fit in a `usize`.
    CapacityOverflow { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { y, x, rows, cols } => write!(
                f,
                "index ({}, {}) out of bounds for grid of shape ({}, {})",
                y, x, rows, cols
            ),
            GridError::RowOutOfBounds { y, rows } => {
                write!(f, "row {} out of bounds for grid with {} rows", y, rows)
            }
            GridError::Shape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            GridError::CapacityOverflow { rows, cols } => write!(
                f,
                "grid of shape ({}, {}) overflows the addressable element count",
                rows, cols
            ),
        }
    }
}

impl Error for GridError {}
