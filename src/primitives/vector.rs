//! Vector type for 1D numeric data, plus the free inner/outer helpers.

use super::Matrix;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A 1D vector of numeric values.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector taking ownership of the data.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a copy of the underlying data.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl Vector<f32> {
    /// Dot product with another vector.
    ///
    /// Pairs are zipped, so the product runs over the shorter of the
    /// two lengths. Use [`inner`] for a length-checked entry point.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Arithmetic mean. NaN for an empty vector.
    #[must_use]
    pub fn mean(&self) -> f32 {
        self.sum() / self.data.len() as f32
    }

    /// Euclidean (L2) norm.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// Computes the inner product of two vectors.
///
/// # Errors
///
/// Returns an error if the vectors have different lengths.
///
/// # Examples
///
/// ```
/// use matriz::primitives::{inner, Vector};
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let w = Vector::from_slice(&[4.0, 5.0, 6.0]);
/// assert_eq!(inner(&v, &w).unwrap(), 32.0);
/// ```
pub fn inner(v: &Vector<f32>, w: &Vector<f32>) -> Result<f32> {
    if v.len() != w.len() {
        return Err(MatrizError::LengthMismatch {
            expected: v.len(),
            actual: w.len(),
        });
    }
    Ok(v.dot(w))
}

/// Computes the outer product of two vectors.
///
/// The result has `v.len()` rows and `w.len()` columns, with cell
/// (i, j) equal to `v[i] * w[j]`.
#[must_use]
pub fn outer(v: &Vector<f32>, w: &Vector<f32>) -> Matrix<f32> {
    let mut result = Matrix::zeros(v.len(), w.len());
    for i in 0..v.len() {
        for j in 0..w.len() {
            result.set(i, j, v[i] * w[j]);
        }
    }
    result
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
