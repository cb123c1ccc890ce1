use core::cmp::Ordering;

use num_traits::NumCast;

use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Find the row in `row_start..nrows` with the largest modulus in column `col`.
///
/// Returns `(row, modulus)`. NaN entries never win the comparison.
fn find_pivot<T: FloatScalar>(a: &impl MatrixRef<T>, row_start: usize, col: usize) -> (usize, T) {
    let mut max_row = row_start;
    let mut max_val = a.get(row_start, col).abs();
    for row in (row_start + 1)..a.nrows() {
        let val = a.get(row, col).abs();
        if val > max_val || max_val.is_nan() {
            max_val = val;
            max_row = row;
        }
    }
    (max_row, max_val)
}

/// Swap rows `r0` and `r1` from column `col_start` onward.
fn swap_rows<T: FloatScalar>(a: &mut impl MatrixMut<T>, r0: usize, r1: usize, col_start: usize) {
    for j in col_start..a.ncols() {
        let tmp = *a.get(r0, j);
        *a.get_mut(r0, j) = *a.get(r1, j);
        *a.get_mut(r1, j) = tmp;
    }
}

/// Subtract multiples of `pivot_row` from every row below it so that
/// column `col` becomes zero beneath the pivot.
fn eliminate_below<T: FloatScalar>(a: &mut impl MatrixMut<T>, pivot_row: usize, col: usize) {
    let pivot = *a.get(pivot_row, col);
    for row in (pivot_row + 1)..a.nrows() {
        let factor = *a.get(row, col) / pivot;
        if factor == T::zero() {
            continue;
        }
        for j in (col + 1)..a.ncols() {
            let val = *a.get(pivot_row, j);
            let cur = a.get_mut(row, j);
            *cur = *cur - factor * val;
        }
        *a.get_mut(row, col) = T::zero();
    }
}

/// Determinant by Gaussian elimination with partial pivoting, in place.
///
/// On return `a` holds the upper-triangular factor U of `PA = LU` (the
/// multipliers are not kept). Each row swap negates the result. A column
/// with no nonzero candidate pivot yields exactly zero.
///
/// Panics if `a` is not square.
///
/// ```
/// use mtrx::Matrix;
/// use mtrx::linalg::det_in_place;
///
/// let mut a = Matrix::new(&[[0.0_f64, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]]).unwrap();
/// let d = det_in_place(&mut a);
/// assert!((d - (-5.0)).abs() < 1e-12);
/// ```
pub fn det_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>) -> T {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "determinant requires a square matrix");

    let mut det = T::one();
    for col in 0..n {
        let (max_row, max_val) = find_pivot(a, col, col);
        if max_val == T::zero() {
            return T::zero();
        }

        if max_row != col {
            swap_rows(a, col, max_row, col);
            det = -det;
        }

        det = det * *a.get(col, col);
        eliminate_below(a, col, col);
    }
    det
}

/// Reduce `a` to row echelon form in place and return its rank.
///
/// Gaussian elimination with partial pivoting, column by column. A column
/// whose largest remaining candidate has modulus `<= tol` is treated as zero
/// and skipped; every accepted pivot contributes one to the rank. Works for
/// any shape, and the result never exceeds `min(nrows, ncols)`.
///
/// ```
/// use mtrx::Matrix;
/// use mtrx::linalg::row_echelon_in_place;
///
/// let mut a = Matrix::new(&[[1.0_f64, 2.0, 3.0], [2.0, 4.0, 6.0]]).unwrap();
/// assert_eq!(row_echelon_in_place(&mut a, 1e-12), 1);
/// assert_eq!(a[1], [0.0, 0.0, 0.0]);
/// ```
pub fn row_echelon_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>, tol: T) -> usize {
    let m = a.nrows();
    let n = a.ncols();

    let mut rank = 0;
    for col in 0..n {
        if rank == m {
            break;
        }

        let (max_row, max_val) = find_pivot(a, rank, col);
        // A NaN pivot compares as unordered and is treated as zero.
        if max_val.partial_cmp(&tol) != Some(Ordering::Greater) {
            // Flush the negligible remainder so the echelon shape is exact.
            for row in rank..m {
                *a.get_mut(row, col) = T::zero();
            }
            continue;
        }

        if max_row != rank {
            swap_rows(a, rank, max_row, col);
        }
        eliminate_below(a, rank, col);
        rank += 1;
    }
    rank
}

/// Default zero-pivot threshold for rank: `max(nrows, ncols) · ε · max|a_ij|`.
///
/// Scales with the magnitude of the entries, so uniformly scaling a matrix
/// does not change its computed rank. Zero for an all-zero matrix.
/// Infinite and NaN entries are left out of `max|a_ij|`, so one non-finite
/// entry does not swallow every other pivot.
pub fn default_rank_tolerance<T: FloatScalar>(a: &impl MatrixRef<T>) -> T {
    let mut max_abs = T::zero();
    for i in 0..a.nrows() {
        for &x in a.row_as_slice(i, 0) {
            let v = x.abs();
            if v.is_finite() && v > max_abs {
                max_abs = v;
            }
        }
    }
    let dim = a.nrows().max(a.ncols());
    let dim: T = <T as NumCast>::from(dim).unwrap_or_else(T::one);
    dim * T::epsilon() * max_abs
}
