use alloc::vec::Vec;

use crate::linalg::det_in_place;
use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Sum of the main-diagonal elements (`min(nrows, ncols)` of them).
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self.data[i * self.ncols + i];
        }
        sum
    }

    /// Copy out the main diagonal.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.diagonal(), vec![1.0, 5.0]);
    /// ```
    pub fn diagonal(&self) -> Vec<T> {
        let n = self.nrows.min(self.ncols);
        (0..n).map(|i| self.data[i * self.ncols + i]).collect()
    }

    /// Check if the matrix is symmetric (`A == A^T`).
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let sym = Matrix::new(&[[1.0, 2.0], [2.0, 3.0]]).unwrap();
    /// assert!(sym.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.data[i * n + j] != self.data[j * n + i] {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Determinant, recomputed from the current contents on every call.
    ///
    /// Returns NaN when the matrix is not square; never panics. 1×1 and 2×2
    /// use the closed forms, larger matrices Gaussian elimination with
    /// partial pivoting on a scratch copy (O(n³) per call).
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.det(), -2.0);
    ///
    /// let rect = Matrix::<f64>::ones(2, 3).unwrap();
    /// assert!(rect.det().is_nan());
    /// ```
    pub fn det(&self) -> T {
        if !self.is_square() {
            return T::nan();
        }
        match self.nrows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => {
                let mut a = self.clone();
                det_in_place(&mut a)
            }
        }
    }
}
