//! Core compute primitives (Vector, Matrix).
//!
//! These types are plain owned values: fixed-size row-major storage,
//! copy-on-read row/column extraction, and algebraic operations that
//! always allocate a fresh result.
//!
//! # Two indexing families
//!
//! `Matrix` deliberately carries two independent accessor families on
//! the same storage:
//!
//! 1. **1-based coordinate indexing** through the `[]` operator and
//!    [`Matrix::linear_index`], following the mathematical convention
//!    where the top-left element is (1, 1).
//! 2. **0-based row/column indexing** through [`Matrix::get`],
//!    [`Matrix::set`] and the row/column accessors.
//!
//! The two families are implemented separately and are not meant to
//! interoperate; mixing them without shifting coordinates by one is
//! a caller bug. This split is a long-standing quirk of the API that
//! existing callers rely on, so it is kept rather than unified.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::{inner, outer, Vector};

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod matrix_contract;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod vector_contract;
