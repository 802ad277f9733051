//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A 2D matrix of numeric values (row-major storage).
///
/// Dimensions are fixed at construction; no operation resizes a matrix.
/// The element at 0-based (row, col) lives at buffer offset
/// `row * cols + col`. Arithmetic operations and [`transpose`] always
/// return a new owned matrix and never mutate their operands.
///
/// Two accessor families coexist on the same storage: [`get`]/[`set`]
/// and the row/column methods are 0-based, while the `[]` operator and
/// [`linear_index`] are 1-based. See the [module docs](crate::primitives)
/// for the rationale.
///
/// [`transpose`]: Matrix::transpose
/// [`get`]: Matrix::get
/// [`set`]: Matrix::set
/// [`linear_index`]: Matrix::linear_index
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6.0);
/// assert_eq!(m[(1, 3)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::LengthMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at 0-based (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Sets element at 0-based (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = value;
    }

    /// Returns a copy of the 0-based row as a Vector.
    ///
    /// A row is the contiguous buffer slice
    /// `[row_idx * cols, row_idx * cols + cols)`.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a copy of the 0-based column as a Vector.
    ///
    /// A column is the strided buffer slice starting at `col_idx` with
    /// stride `cols` and `rows` elements.
    ///
    /// # Panics
    ///
    /// Panics if the column index is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Overwrites the 0-based row with the given values.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` doesn't contain exactly `cols`
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    pub fn set_row(&mut self, row_idx: usize, values: &[T]) -> Result<()> {
        if values.len() != self.cols {
            return Err(MatrizError::LengthMismatch {
                expected: self.cols,
                actual: values.len(),
            });
        }
        let start = row_idx * self.cols;
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Overwrites the 0-based column with the given values.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` doesn't contain exactly `rows`
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if the column index is out of bounds.
    pub fn set_column(&mut self, col_idx: usize, values: &[T]) -> Result<()> {
        if values.len() != self.rows {
            return Err(MatrizError::LengthMismatch {
                expected: self.rows,
                actual: values.len(),
            });
        }
        for (row, &value) in values.iter().enumerate() {
            self.data[row * self.cols + col_idx] = value;
        }
        Ok(())
    }

    /// Returns the underlying row-major buffer as a slice.
    ///
    /// The view is read-only; all mutation goes through `set`,
    /// `set_row`, `set_column` or the `[]` operator so the buffer can
    /// never change length out from under the dimensions.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Matrix<T> {
    /// Returns the 1-based linear position of the element at 1-based
    /// (r, c): `cols * (r - 1) + c`.
    ///
    /// Part of the 1-based accessor family together with the `[]`
    /// operator; a pure function of the dimensions with no buffer
    /// access. The 0-based accessors never route through this.
    #[must_use]
    pub fn linear_index(&self, r: usize, c: usize) -> usize {
        self.cols * (r - 1) + c
    }
}

impl Matrix<f32> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Transposes the matrix.
    ///
    /// Row i of the result equals column i of the source.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// For an n×m `self` and m×q `other` the result is n×q, with cell
    /// (i, j) the dot product of row i of `self` and column j of
    /// `other`, both extracted through the 0-based accessors.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.cols` doesn't match `other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{} rows", self.cols),
                actual: format!("{} rows", other.rows),
            });
        }

        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let cell = self.row(i).dot(&other.column(j));
                result.set(i, j, cell);
            }
        }
        Ok(result)
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn matvec(&self, vec: &Vector<f32>) -> Result<Vector<f32>> {
        if self.cols != vec.len() {
            return Err(MatrizError::LengthMismatch {
                expected: self.cols,
                actual: vec.len(),
            });
        }

        let result: Vec<f32> = (0..self.rows).map(|i| self.row(i).dot(vec)).collect();
        Ok(Vector::from_vec(result))
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }

        let data: Vec<f32> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }

        let data: Vec<f32> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// 1-based element access: `m[(r, c)]` with the top-left element at
/// (1, 1). Reads buffer position `linear_index(r, c) - 1`.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if (r, c) is outside the 1-based coordinate range.
    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(
            (1..=self.rows).contains(&r) && (1..=self.cols).contains(&c),
            "1-based index ({r}, {c}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[self.linear_index(r, c) - 1]
    }
}

/// 1-based element assignment: `m[(r, c)] = v`.
impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if (r, c) is outside the 1-based coordinate range.
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(
            (1..=self.rows).contains(&r) && (1..=self.cols).contains(&c),
            "1-based index ({r}, {c}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        let idx = self.linear_index(r, c) - 1;
        &mut self.data[idx]
    }
}

/// Element-wise addition.
impl Add for &Matrix<f32> {
    type Output = Matrix<f32>;

    /// # Panics
    ///
    /// Panics if the dimensions don't match; use [`Matrix::add`] for a
    /// checked entry point.
    #[track_caller]
    fn add(self, rhs: Self) -> Matrix<f32> {
        match Matrix::add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Element-wise subtraction.
impl Sub for &Matrix<f32> {
    type Output = Matrix<f32>;

    /// # Panics
    ///
    /// Panics if the dimensions don't match; use [`Matrix::sub`] for a
    /// checked entry point.
    #[track_caller]
    fn sub(self, rhs: Self) -> Matrix<f32> {
        match Matrix::sub(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Matrix product.
impl Mul for &Matrix<f32> {
    type Output = Matrix<f32>;

    /// # Panics
    ///
    /// Panics if the inner dimensions don't match; use
    /// [`Matrix::matmul`] for a checked entry point.
    #[track_caller]
    fn mul(self, rhs: Self) -> Matrix<f32> {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
