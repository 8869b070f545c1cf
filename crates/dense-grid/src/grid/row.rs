use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

/// Read-only view of a single grid row, produced by [`Grid::row`](super::Grid::row).
///
/// The view borrows the parent grid's buffer and cannot outlive it. Indexing by column
/// reaches the same cell as `grid[(y, x)]`.
pub struct RowView<'a, T> {
    row: &'a [T],
}

impl<'a, T> RowView<'a, T> {
    pub(crate) fn new(row: &'a [T]) -> Self {
        Self { row }
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn get(&self, x: usize) -> Option<&'a T> {
        self.row.get(x)
    }

    pub fn iter(&self) -> Iter<'a, T> {
        self.row.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.row
    }
}

impl<'a, T> Clone for RowView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for RowView<'a, T> {}

impl<'a, T> Index<usize> for RowView<'a, T> {
    type Output = T;

    fn index(&self, x: usize) -> &Self::Output {
        &self.row[x]
    }
}

impl<'a, T> IntoIterator for RowView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.row.iter()
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for RowView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.row.iter()).finish()
    }
}

/// Write-through view of a single grid row, produced by
/// [`Grid::row_mut`](super::Grid::row_mut).
pub struct RowViewMut<'a, T> {
    row: &'a mut [T],
}

impl<'a, T> RowViewMut<'a, T> {
    pub(crate) fn new(row: &'a mut [T]) -> Self {
        Self { row }
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn get(&self, x: usize) -> Option<&T> {
        self.row.get(x)
    }

    pub fn get_mut(&mut self, x: usize) -> Option<&mut T> {
        self.row.get_mut(x)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.row.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.row.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        self.row
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.row
    }

    /// Overwrite every cell of this row.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.row.fill(value);
    }
}

impl<'a, T> Index<usize> for RowViewMut<'a, T> {
    type Output = T;

    fn index(&self, x: usize) -> &Self::Output {
        &self.row[x]
    }
}

impl<'a, T> IndexMut<usize> for RowViewMut<'a, T> {
    fn index_mut(&mut self, x: usize) -> &mut Self::Output {
        &mut self.row[x]
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for RowViewMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.row.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_view_indexes_its_slice() {
        let data = [1, 2, 3];
        let view = RowView::new(&data);
        assert_eq!(view.len(), 3);
        assert_eq!(view[2], 3);
        assert_eq!(view.get(3), None);
        assert_eq!(view.into_iter().copied().sum::<i32>(), 6);
    }

    #[test]
    fn row_view_mut_writes_through() {
        let mut data = [0u8; 4];
        {
            let mut view = RowViewMut::new(&mut data);
            view[1] = 7;
            *view.get_mut(3).unwrap() = 9;
        }
        assert_eq!(data, [0, 7, 0, 9]);
    }

    #[test]
    fn row_view_mut_fill() {
        let mut data = vec![String::new(); 3];
        RowViewMut::new(&mut data).fill("x".to_string());
        assert!(data.iter().all(|s| s == "x"));
    }

    #[test]
    #[should_panic]
    fn row_view_rejects_column_past_end() {
        let data = [1, 2];
        let view = RowView::new(&data);
        let _value = view[2];
    }
}
