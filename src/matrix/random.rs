use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::error::ShapeError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T>
where
    Standard: Distribution<T>,
{
    /// `nrows x ncols` matrix with every element drawn from `rng`.
    ///
    /// Floats are uniform on `[0, 1)` (the `Standard` distribution).
    ///
    /// ```
    /// use mtrx::Matrix;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let m: Matrix<f64> = Matrix::random_with(2, 3, &mut rng).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random_with<R: Rng + ?Sized>(
        nrows: usize,
        ncols: usize,
        rng: &mut R,
    ) -> Result<Self, ShapeError> {
        Self::from_fn(nrows, ncols, |_, _| Standard.sample(&mut *rng))
    }

    /// `nrows x ncols` matrix filled from the thread-local generator.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::<f64>::random(2, 3).unwrap();
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert!(Matrix::<f64>::random(0, 3).is_err());
    /// ```
    #[cfg(feature = "std")]
    pub fn random(nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        Self::random_with(nrows, ncols, &mut rand::thread_rng())
    }

    /// 1×1 matrix holding a single random element. Also what `Default` builds.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::<f64>::random_default();
    /// assert_eq!(m.shape(), (1, 1));
    ///
    /// let d: Matrix<f64> = Default::default();
    /// assert_eq!(d.shape(), (1, 1));
    /// ```
    #[cfg(feature = "std")]
    pub fn random_default() -> Self {
        Self {
            data: alloc::vec![rand::thread_rng().gen()],
            nrows: 1,
            ncols: 1,
        }
    }
}

#[cfg(feature = "std")]
impl<T: Scalar> Default for Matrix<T>
where
    Standard: Distribution<T>,
{
    fn default() -> Self {
        Self::random_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_is_reproducible() {
        let a: Matrix<f64> = Matrix::random_with(3, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b: Matrix<f64> = Matrix::random_with(3, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn random_rejects_zero_dims() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Matrix::<f64>::random_with(0, 2, &mut rng).unwrap_err(),
            ShapeError::ZeroDimension { nrows: 0, ncols: 2 }
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn default_is_1x1() {
        let m = Matrix::<f64>::default();
        assert_eq!(m.nrows(), 1);
        assert_eq!(m.ncols(), 1);
        // 1×1 determinant is the element itself.
        assert_eq!(m.det(), m[0][0]);
    }

    #[test]
    #[cfg(feature = "std")]
    fn random_shape() {
        let m = Matrix::<f32>::random(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(m.det().is_nan());
        assert!(m.rank() <= 2);
    }
}
