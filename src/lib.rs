//! # mtrx
//!
//! Dense, runtime-sized matrix value type with determinant and rank.
//! no-std compatible (heap storage via `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use mtrx::Matrix;
//!
//! let mut m = Matrix::new(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(m[1][1], 4.0);
//! assert_eq!(m.det(), -2.0);
//! assert_eq!(m.rank(), 2);
//!
//! // Writes are visible to the next det / rank call.
//! m[1].copy_from_slice(&[2.0, 4.0]);
//! assert_eq!(m.det(), 0.0);
//! assert_eq!(m.rank(), 1);
//!
//! // Non-square matrices have no determinant.
//! assert!(Matrix::<f64>::zeros(2, 3).unwrap().det().is_nan());
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T>` with row-major `Vec<T>` storage. Constructors
//!   (`new`, `fill`, `zeros`, `ones`, `eye`, `diag`, `scalar`, `random`)
//!   validate dimensions and return [`ShapeError`]. `m[i]` borrows row `i` as
//!   a slice, so `m[i][j]` reads and assigns in place; `get` / `set` report
//!   [`IndexError`] instead of panicking. Also arithmetic, transpose,
//!   iteration and `Display`.
//!
//! - [`linalg`]: In-place elimination kernels over [`MatrixMut`]:
//!   determinant with partial pivoting and row echelon reduction (rank).
//!   `Matrix::det` and `Matrix::rank` run them on a scratch copy, so neither
//!   value is ever cached.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats, required by `det` and `rank`
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | System libm, thread-local RNG (`random`, `Default`), `std::error::Error` |
//! | `libm`  | no      | Pure-Rust float math; required when building without `std` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use error::{Axis, IndexError, ShapeError};
pub use matrix::aliases::{Matrixf32, Matrixf64};
pub use matrix::Matrix;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
