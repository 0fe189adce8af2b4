//! `Vector`: a one-dimensional sampled signal.
//!
//! This is a thin newtype around `nalgebra::DVector<T>` exposing the accessors
//! the interpolators need: size, last valid index, element access, and a
//! contiguous slice.

use nalgebra::DVector;
use std::ops::{Index, IndexMut};
use svi_core::{Error, Result, Sample};

/// A dynamically-sized 1D sequence of samples with zero-based indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Sample>(DVector<T>);

impl<T: Sample> Vector<T> {
    /// Create a zero-filled vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create a vector filled with `value`.
    pub fn from_element(n: usize, value: T) -> Self {
        Self(DVector::from_element(n, value))
    }

    /// Create a vector from a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create a vector from a `Vec`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Create a vector of length `n` whose element `i` is `f(i)`.
    pub fn from_fn<F: FnMut(usize) -> T>(n: usize, mut f: F) -> Self {
        Self(DVector::from_fn(n, |i, _| f(i)))
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Index of the last element as a signed integer (`-1` when empty).
    pub fn last_idx(&self) -> isize {
        self.0.len() as isize - 1
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at `i`.
    ///
    /// # Panics
    /// Panics if `i >= size()`.
    #[inline]
    pub fn at(&self, i: usize) -> T {
        self.0[i]
    }

    /// Element `i`, or `Error::IndexOutOfRange` past the end.
    pub fn get(&self, i: usize) -> Result<T> {
        self.0.get(i).copied().ok_or(Error::IndexOutOfRange {
            index: i,
            size: self.size(),
        })
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Return the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_mut_slice()
    }

    /// Borrow the inner `DVector`.
    pub fn inner(&self) -> &DVector<T> {
        &self.0
    }

    /// Iterator over elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Sample> From<DVector<T>> for Vector<T> {
    fn from(v: DVector<T>) -> Self {
        Self(v)
    }
}

impl<T: Sample> From<Vector<T>> for DVector<T> {
    fn from(v: Vector<T>) -> Self {
        v.0
    }
}

impl<T: Sample> From<Vec<T>> for Vector<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_vec(v)
    }
}

impl<T: Sample> From<&[T]> for Vector<T> {
    fn from(s: &[T]) -> Self {
        Self::from_slice(s)
    }
}

impl<T: Sample> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T: Sample> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_access() {
        let v = Vector::from_slice(&[3u8, 5, 7]);
        assert_eq!(v.get(2), Ok(7));
        let err = v.get(3).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 3, size: 3 });
        assert_eq!(err.to_string(), "index (3) out of range [0, 3)");
        assert!(Vector::<f64>::zeros(0).get(0).is_err());
    }

    #[test]
    fn zeros() {
        let v = Vector::<f32>::zeros(5);
        assert_eq!(v.size(), 5);
        assert_eq!(v.last_idx(), 4);
        assert_eq!(v[0], 0.0);
    }

    #[test]
    fn from_slice_and_fn() {
        let a = Vector::from_slice(&[1u8, 2, 3]);
        assert_eq!(a.at(1), 2);
        let b = Vector::from_fn(3, |i| i as f64 * 0.5);
        assert_eq!(b.as_slice(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn empty_has_negative_last_index() {
        let v = Vector::<f64>::from_vec(Vec::new());
        assert!(v.is_empty());
        assert_eq!(v.last_idx(), -1);
    }
}
