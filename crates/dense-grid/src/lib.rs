//! dense-grid: a generic two-dimensional dense array.
//!
//! [`Grid`] owns `rows * cols` elements in one row-major buffer. It deep-copies through
//! `Clone`, moves in constant time (`take`/`move_from` leave the source as an empty 0x0
//! grid), and offers two equivalent ways to reach a cell: `grid[(y, x)]` and
//! `grid[y][x]`.
//!
//! Every accessor checks its indices. The panicking forms (`Index`, `at`, `row`) and
//! the fallible forms (`try_at`, `try_row`) reject the same indices, so both access
//! styles stay interchangeable.
pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::{Grid, RowView, RowViewMut};
