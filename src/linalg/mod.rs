//! In-place elimination kernels.
//!
//! Free functions over `&mut impl MatrixMut<T>`, so they run on any dense
//! storage implementing the access traits. [`Matrix::det`](crate::Matrix::det)
//! and [`Matrix::rank`](crate::Matrix::rank) call these on a scratch copy.

pub(crate) mod echelon;

pub use echelon::{default_rank_tolerance, det_in_place, row_echelon_in_place};
