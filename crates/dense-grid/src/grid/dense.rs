use std::fmt;
use std::ops::{Index, IndexMut, Range};
use std::slice::{Iter, IterMut};

use num_traits::{One, Zero};

use super::row::{RowView, RowViewMut};
use crate::error::GridError;

/// Dense two-dimensional grid owning `rows * cols` elements in row-major order.
///
/// Cell `(y, x)` lives at offset `y * cols + x` of the buffer. The buffer length always
/// equals `rows * cols`; a grid with zero rows or zero columns owns an empty buffer.
///
/// Cells can be reached two ways, which always address the same element:
///
/// ```
/// use dense_grid::Grid;
///
/// let mut grid = Grid::from_elem(3, 2, 0.0f32);
/// grid[1][0] = 1.0;
/// assert_eq!(grid[(1, 0)], 1.0);
/// ```
///
/// Out-of-range indices panic on both paths, including a column index that would
/// still land inside the buffer (`grid[(0, cols)]`).
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

// A `Vec<T>` may not span more than `isize::MAX` bytes.
fn cell_count<T>(rows: usize, cols: usize) -> Result<usize, GridError> {
    let max_len = isize::MAX as usize / std::mem::size_of::<T>().max(1);
    match rows.checked_mul(cols) {
        Some(len) if len <= max_len => Ok(len),
        _ => Err(GridError::CapacityOverflow { rows, cols }),
    }
}

impl<T> Grid<T> {
    /// Build a 1x1 grid holding `value`.
    pub fn single(value: T) -> Self {
        Self {
            data: vec![value],
            rows: 1,
            cols: 1,
        }
    }

    /// Build a `rows x cols` grid with every cell set to `T::default()`.
    ///
    /// Cells are always initialised; for numeric types this means zero.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` cells would exceed `isize::MAX` bytes. See [`Grid::try_new`].
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default,
    {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError>
    where
        T: Default,
    {
        let len = cell_count::<T>(rows, cols)?;
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, T::default);
        log::trace!("allocated default grid ({}, {})", rows, cols);
        Ok(Self { data, rows, cols })
    }

    /// Build a `rows x cols` grid with every cell set to a clone of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` cells would exceed `isize::MAX` bytes. See [`Grid::try_from_elem`].
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        match Self::try_from_elem(rows, cols, value) {
            Ok(grid) => grid,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_from_elem(rows: usize, cols: usize, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let len = cell_count::<T>(rows, cols)?;
        log::trace!("allocated filled grid ({}, {})", rows, cols);
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    /// Adopt `data` as the row-major buffer of a `shape.0 x shape.1` grid.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, GridError> {
        let (rows, cols) = shape;
        if cell_count::<T>(rows, cols)? != data.len() {
            return Err(GridError::Shape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move the buffer and shape out, leaving `self` as an empty 0x0 grid.
    pub fn take(&mut self) -> Self {
        log::trace!("moving grid ({}, {}) out", self.rows, self.cols);
        std::mem::take(self)
    }

    /// Replace `self` with the contents of `source`, leaving `source` empty.
    ///
    /// The previous buffer of `self` is released before the transfer.
    pub fn move_from(&mut self, source: &mut Self) {
        log::trace!(
            "releasing grid ({}, {}) to take ({}, {})",
            self.rows,
            self.cols,
            source.rows,
            source.cols
        );
        drop(std::mem::take(self));
        *self = source.take();
    }

    /// Overwrite every cell with a clone of `value`. The shape is unchanged.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    #[inline]
    fn checked_offset(&self, y: usize, x: usize) -> Result<usize, GridError> {
        if y >= self.rows || x >= self.cols {
            return Err(GridError::OutOfBounds {
                y,
                x,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(y * self.cols + x)
    }

    #[inline]
    fn offset(&self, y: usize, x: usize) -> usize {
        match self.checked_offset(y, x) {
            Ok(offset) => offset,
            Err(err) => panic!("{}", err),
        }
    }

    #[inline]
    fn checked_row_range(&self, y: usize) -> Result<Range<usize>, GridError> {
        if y >= self.rows {
            return Err(GridError::RowOutOfBounds { y, rows: self.rows });
        }
        let start = y * self.cols;
        Ok(start..start + self.cols)
    }

    #[inline]
    fn row_range(&self, y: usize) -> Range<usize> {
        match self.checked_row_range(y) {
            Ok(range) => range,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn at(&self, y: usize, x: usize) -> &T {
        &self.data[self.offset(y, x)]
    }

    pub fn at_mut(&mut self, y: usize, x: usize) -> &mut T {
        let offset = self.offset(y, x);
        &mut self.data[offset]
    }

    /// Copy of the cell at `(y, x)`.
    pub fn get(&self, y: usize, x: usize) -> T
    where
        T: Copy,
    {
        *self.at(y, x)
    }

    pub fn try_at(&self, y: usize, x: usize) -> Result<&T, GridError> {
        let offset = self.checked_offset(y, x)?;
        Ok(&self.data[offset])
    }

    pub fn try_at_mut(&mut self, y: usize, x: usize) -> Result<&mut T, GridError> {
        let offset = self.checked_offset(y, x)?;
        Ok(&mut self.data[offset])
    }

    pub fn row(&self, y: usize) -> RowView<'_, T> {
        RowView::new(&self.data[self.row_range(y)])
    }

    pub fn row_mut(&mut self, y: usize) -> RowViewMut<'_, T> {
        let range = self.row_range(y);
        RowViewMut::new(&mut self.data[range])
    }

    pub fn try_row(&self, y: usize) -> Result<RowView<'_, T>, GridError> {
        let range = self.checked_row_range(y)?;
        Ok(RowView::new(&self.data[range]))
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_, T>> + '_ {
        (0..self.rows).map(move |y| self.row(y))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T> Grid<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }
}

impl<T> Grid<T>
where
    T: Clone + One,
{
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::one())
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        log::trace!("copying grid ({}, {})", self.rows, self.cols);
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        log::trace!(
            "copying grid ({}, {}) over ({}, {})",
            source.rows,
            source.cols,
            self.rows,
            self.cols
        );
        self.data.clone_from(&source.data);
        self.rows = source.rows;
        self.cols = source.cols;
    }
}

impl<T> From<T> for Grid<T> {
    fn from(value: T) -> Self {
        Grid::single(value)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.at(index.0, index.1)
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        self.at_mut(index.0, index.1)
    }
}

// `grid[y]` is the row; the second `[x]` indexes the slice.
impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    fn index(&self, y: usize) -> &Self::Output {
        &self.data[self.row_range(y)]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, y: usize) -> &mut Self::Output {
        let range = self.row_range(y);
        &mut self.data[range]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (x, value) in row.iter().enumerate() {
                write!(f, "{}", value)?;
                if x + 1 != row.len() {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
