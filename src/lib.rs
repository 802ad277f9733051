//! Matriz: dense row-major matrix and vector primitives in pure Rust.
//!
//! Matriz provides a small, owned value type for 2D numeric data plus a
//! companion vector type and the free-standing inner/outer product
//! helpers. Matrices have fixed dimensions, store their elements in a
//! flat row-major buffer, and every algebraic operation returns a new
//! owned instance.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//!
//! let c = a.matmul(&b).unwrap();
//! assert_eq!(c.shape(), (3, 2));
//! assert_eq!(c.as_slice(), &[7.0, 10.0, 15.0, 22.0, 23.0, 34.0]);
//! ```
//!
//! # Indexing conventions
//!
//! `Matrix` exposes two deliberately independent accessor families:
//! the `get`/`set` and row/column methods are 0-based, while the `[]`
//! operator and [`Matrix::linear_index`](primitives::Matrix::linear_index)
//! follow the 1-based mathematical convention. See the [`primitives`]
//! module documentation for details.
//!
//! # Modules
//!
//! - [`primitives`]: Core `Vector` and `Matrix` types plus `inner`/`outer`
//! - [`error`]: Crate error type and `Result` alias
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
