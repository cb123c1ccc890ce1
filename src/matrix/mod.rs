pub mod aliases;
mod ops;
mod random;
mod rank;
mod slice;
mod square;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::any::Any;
use core::ops::{Index, IndexMut};

use crate::error::{Axis, IndexError, ShapeError};
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dense, heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage with at least one row and one column.
/// Each row is a contiguous slice, so `m[i]` borrows row `i` straight out of
/// the buffer and `m[i][j]` reads or assigns a single element in place.
///
/// Determinant and rank are never cached: [`det`](Matrix::det) and
/// [`rank`](Matrix::rank) recompute from the current contents on every call.
///
/// # Examples
///
/// ```
/// use mtrx::Matrix;
///
/// let mut m = Matrix::new(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m[1][1], 4.0);
/// assert!((m.det() - (-2.0)).abs() < 1e-12);
///
/// m[0][1] = 5.0;
/// assert_eq!(m[0][1], 5.0);
/// assert_eq!(m.rank(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

/// Validates a shape and returns its element count.
#[inline]
fn check_dims(nrows: usize, ncols: usize) -> Result<usize, ShapeError> {
    if nrows == 0 || ncols == 0 {
        return Err(ShapeError::ZeroDimension { nrows, ncols });
    }
    nrows
        .checked_mul(ncols)
        .ok_or(ShapeError::TooLarge { nrows, ncols })
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a matrix from a grid of rows.
    ///
    /// Accepts anything that slices into rows: `&[[T; N]]`, `&[Vec<T>]`,
    /// `&[&[T]]`. Every row must have the same, nonzero length.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[1][0], 4.0);
    /// ```
    pub fn new<R: AsRef<[T]>>(grid: &[R]) -> Result<Self, ShapeError> {
        let nrows = grid.len();
        let ncols = grid.first().map_or(0, |r| r.as_ref().len());
        let len = check_dims(nrows, ncols)?;

        let mut data = Vec::with_capacity(len);
        for (i, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(ShapeError::RaggedRow {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        let len = check_dims(nrows, ncols)?;
        if data.len() != len {
            return Err(ShapeError::LengthMismatch {
                expected: len,
                got: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create an `nrows x ncols` matrix with every element set to `value`.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64).unwrap();
    /// assert_eq!(m[0][0], 7.0);
    /// assert_eq!(m[1][2], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Result<Self, ShapeError> {
        let len = check_dims(nrows, ncols)?;
        Ok(Self {
            data: vec![value; len],
            nrows,
            ncols,
        })
    }

    /// All-zero matrix.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::<f64>::zeros(3, 4).unwrap();
    /// assert_eq!(m.shape(), (3, 4));
    /// assert_eq!(m[0][0], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        Self::fill(nrows, ncols, T::zero())
    }

    /// All-one matrix.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::<f64>::ones(2, 3).unwrap();
    /// assert_eq!(m[0][0], 1.0);
    /// ```
    pub fn ones(nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        Self::fill(nrows, ncols, T::one())
    }

    /// `nrows x ncols` matrix with `value` on the main diagonal and zero elsewhere.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::scalar(2, 2, 4.0_f64).unwrap();
    /// assert_eq!(m[0][0], 4.0);
    /// assert_eq!(m[0][1], 0.0);
    /// assert_eq!(m.det(), 16.0);
    /// ```
    pub fn scalar(nrows: usize, ncols: usize, value: T) -> Result<Self, ShapeError> {
        let mut m = Self::zeros(nrows, ncols)?;
        for i in 0..nrows.min(ncols) {
            m.data[i * ncols + i] = value;
        }
        Ok(m)
    }

    /// `n x n` identity matrix.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let id = Matrix::<f64>::eye(3).unwrap();
    /// assert_eq!(id[0][0], 1.0);
    /// assert_eq!(id[0][1], 0.0);
    /// assert_eq!(id[2][2], 1.0);
    /// ```
    pub fn eye(n: usize) -> Result<Self, ShapeError> {
        Self::scalar(n, n, T::one())
    }

    /// Square diagonal matrix with `values[i]` at `(i, i)`.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::diag(&[2.0, 4.0, 6.0]).unwrap();
    /// assert_eq!(m.shape(), (3, 3));
    /// assert_eq!(m[0][0], 2.0);
    /// assert_eq!(m[2][2], 6.0);
    /// assert_eq!(m[1][0], 0.0);
    /// ```
    pub fn diag(values: &[T]) -> Result<Self, ShapeError> {
        if values.is_empty() {
            return Err(ShapeError::EmptyDiagonal);
        }
        let n = values.len();
        let mut m = Self::zeros(n, n)?;
        for (i, &v) in values.iter().enumerate() {
            m.data[i * n + i] = v;
        }
        Ok(m)
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element, row by row.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 }).unwrap();
    /// assert_eq!(m[0][0], 1.0);
    /// assert_eq!(m[0][1], 0.0);
    /// ```
    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, ShapeError> {
        let len = check_dims(nrows, ncols)?;
        let mut data = Vec::with_capacity(len);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    #[inline]
    fn check_row(&self, i: usize) -> Result<(), IndexError> {
        if i >= self.nrows {
            return Err(IndexError {
                axis: Axis::Row,
                index: i,
                bound: self.nrows,
            });
        }
        Ok(())
    }

    #[inline]
    fn check_col(&self, j: usize) -> Result<(), IndexError> {
        if j >= self.ncols {
            return Err(IndexError {
                axis: Axis::Col,
                index: j,
                bound: self.ncols,
            });
        }
        Ok(())
    }

    /// Borrow row `i` as a slice.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.row(1).unwrap(), &[4, 5, 6]);
    /// assert!(m.row(2).is_err());
    /// ```
    #[inline]
    pub fn row(&self, i: usize) -> Result<&[T], IndexError> {
        self.check_row(i)?;
        let start = i * self.ncols;
        Ok(&self.data[start..start + self.ncols])
    }

    /// Mutably borrow row `i`. Writes go straight to the matrix.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [T], IndexError> {
        self.check_row(i)?;
        let start = i * self.ncols;
        Ok(&mut self.data[start..start + self.ncols])
    }

    /// Element at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<&T, IndexError> {
        self.check_row(i)?;
        self.check_col(j)?;
        Ok(&self.data[i * self.ncols + j])
    }

    /// Mutable element at `(i, j)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, IndexError> {
        self.check_row(i)?;
        self.check_col(j)?;
        Ok(&mut self.data[i * self.ncols + j])
    }

    /// Overwrite the element at `(i, j)`.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let mut m = Matrix::<f64>::zeros(2, 2).unwrap();
    /// m.set(1, 0, 3.0).unwrap();
    /// assert_eq!(m[1][0], 3.0);
    /// assert!(m.set(0, 2, 1.0).is_err());
    /// ```
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), IndexError> {
        *self.get_mut(i, j)? = value;
        Ok(())
    }
}

impl<T: 'static> Matrix<T> {
    /// Whether `value` is a `Matrix<T>`.
    ///
    /// Decided by concrete type identity, never by shape: a nested `Vec` or
    /// array grid is not a matrix, however rectangular it is.
    ///
    /// Only the element type `T` named at the call site is recognised, so
    /// `Matrix::<f64>::is_matrix` is `false` for a `Matrix<f32>`. Ask with the
    /// matching `T` for each element type of interest.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1.0, 0.0], [0.0, 1.0]]).unwrap();
    /// let grid = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    /// assert!(Matrix::<f64>::is_matrix(&m));
    /// assert!(!Matrix::<f64>::is_matrix(&grid));
    ///
    /// let single = Matrix::new(&[[1.0_f32]]).unwrap();
    /// assert!(!Matrix::<f64>::is_matrix(&single));
    /// assert!(Matrix::<f32>::is_matrix(&single));
    /// ```
    pub fn is_matrix(value: &dyn Any) -> bool {
        value.is::<Matrix<T>>()
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_slice(&self, row: usize, col_start: usize) -> &[T] {
        let start = row * self.ncols;
        &self.data[start + col_start..start + self.ncols]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    /// Row `i`. Panics with the [`IndexError`] message when out of range.
    #[inline]
    fn index(&self, i: usize) -> &[T] {
        match self.row(i) {
            Ok(row) => row,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        match self.row_mut(i) {
            Ok(row) => row,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        match Matrix::get(self, i, j) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        match Matrix::get_mut(self, i, j) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

// ── Conversions: grid ↔ Matrix ──────────────────────────────────────

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ShapeError;

    /// ```
    /// use mtrx::Matrix;
    /// let m: Matrix<f64> = vec![vec![1.0, 2.0], vec![3.0, 4.0]].try_into().unwrap();
    /// assert_eq!(m[1][1], 4.0);
    /// ```
    fn try_from(grid: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::new(&grid)
    }
}

impl<T: Scalar> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.to_grid()
    }
}
