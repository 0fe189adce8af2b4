//! `Matrix`: a two-dimensional sampled grid.
//!
//! A thin newtype around `nalgebra::DMatrix<T>`.  Construction from data is
//! row-major, matching image layout; element access is by `(row, column)`.

use crate::vector::Vector;
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut};
use svi_core::{Error, Result, Sample};

/// A dynamically-sized 2D grid of samples addressed as `(row, column)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Sample>(DMatrix<T>);

impl<T: Sample> Matrix<T> {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create a matrix filled with `value`.
    pub fn from_element(rows: usize, cols: usize, value: T) -> Self {
        Self(DMatrix::from_element(rows, cols, value))
    }

    /// Create from a row-major data slice.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[T]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Create a matrix whose element `(r, c)` is `f(r, c)`.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, f: F) -> Self {
        Self(DMatrix::from_fn(rows, cols, f))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.0.ncols()
    }

    /// Index of the last row (`-1` when there are no rows).
    pub fn last_row(&self) -> isize {
        self.0.nrows() as isize - 1
    }

    /// Index of the last column (`-1` when there are no columns).
    pub fn last_column(&self) -> isize {
        self.0.ncols() as isize - 1
    }

    /// Return `true` if the matrix holds no element.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.0[(row, col)]
    }

    /// Element at `(row, col)`. An out-of-range position reports the first
    /// offending coordinate and the extent along that axis.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows() {
            return Err(Error::IndexOutOfRange {
                index: row,
                size: self.rows(),
            });
        }
        if col >= self.columns() {
            return Err(Error::IndexOutOfRange {
                index: col,
                size: self.columns(),
            });
        }
        Ok(self.0[(row, col)])
    }

    /// Extract a row as a `Vector`.
    pub fn row(&self, i: usize) -> Vector<T> {
        Vector::from_vec(self.0.row(i).iter().copied().collect())
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<T> {
        &self.0
    }
}

impl<T: Sample> From<DMatrix<T>> for Matrix<T> {
    fn from(m: DMatrix<T>) -> Self {
        Self(m)
    }
}

impl<T: Sample> From<Matrix<T>> for DMatrix<T> {
    fn from(m: Matrix<T>) -> Self {
        m.0
    }
}

impl<T: Sample> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.0[(i, j)]
    }
}

impl<T: Sample> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.0[(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_access_names_the_axis() {
        let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.get(1, 2), Ok(6.0));
        assert_eq!(m.get(2, 0), Err(Error::IndexOutOfRange { index: 2, size: 2 }));
        assert_eq!(m.get(0, 3), Err(Error::IndexOutOfRange { index: 3, size: 3 }));
    }

    #[test]
    fn row_major_construction() {
        let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.last_row(), 1);
        assert_eq!(m.last_column(), 2);
        assert_eq!(m.at(0, 2), 3.0);
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    fn row_extraction() {
        let m = Matrix::from_fn(3, 4, |r, c| (10 * r + c) as i32);
        let r = m.row(2);
        assert_eq!(r.as_slice(), &[20, 21, 22, 23]);
    }
}
