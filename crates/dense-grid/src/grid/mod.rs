//! The dense grid container and its borrowed row views.
//!
//! `Grid` owns a contiguous row-major buffer; `RowView` and `RowViewMut` are
//! short-lived borrows of a single row used for `grid.row(y)[x]` style access.
pub mod dense;
pub mod row;

pub use dense::Grid;
pub use row::{RowView, RowViewMut};
