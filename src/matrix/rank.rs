use crate::linalg::{default_rank_tolerance, row_echelon_in_place};
use crate::traits::FloatScalar;

use super::Matrix;

impl<T: FloatScalar> Matrix<T> {
    /// Numerical rank, recomputed from the current contents on every call.
    ///
    /// Row-reduces a scratch copy to echelon form and counts the pivots whose
    /// modulus exceeds `max(nrows, ncols) · ε · max|a_ij|`, where the maximum
    /// runs over the finite entries only. Defined for every shape; the result
    /// lies in `0..=min(nrows, ncols)`. O(n³) per call.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// assert_eq!(Matrix::<f64>::zeros(2, 2).unwrap().rank(), 0);
    /// assert_eq!(Matrix::<f64>::eye(3).unwrap().rank(), 3);
    ///
    /// let mut m = Matrix::<f64>::ones(2, 2).unwrap();
    /// assert_eq!(m.rank(), 1);
    /// m[0][0] = 0.0;
    /// assert_eq!(m.rank(), 2);
    /// ```
    pub fn rank(&self) -> usize {
        self.rank_with_tol(default_rank_tolerance(self))
    }

    /// Rank with an explicit zero-pivot threshold.
    ///
    /// Pivots with modulus `<= tol` count as zero. A negative `tol` behaves
    /// like zero.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1.0_f64, 0.0], [0.0, 1e-9]]).unwrap();
    /// assert_eq!(m.rank_with_tol(1e-6), 1);
    /// assert_eq!(m.rank_with_tol(1e-12), 2);
    /// ```
    pub fn rank_with_tol(&self, tol: T) -> usize {
        let mut a = self.clone();
        row_echelon_in_place(&mut a, tol.max(T::zero()))
    }
}
