use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    fn zip_with(&self, rhs: &Self, op: &str, f: impl Fn(T, T) -> T) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} {} {}x{}",
            self.nrows,
            self.ncols,
            op,
            rhs.nrows,
            rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, "+", |a, b| a + b)
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Self;

    fn add(self, rhs: &Matrix<T>) -> Self {
        &self + rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, "-", |a, b| a - b)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Self;

    fn sub(self, rhs: &Matrix<T>) -> Self {
        &self - rhs
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for x in self.data.iter_mut() {
            *x = -*x;
        }
        self
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -self.clone()
    }
}

// ── Matrix product ──────────────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// `(M×K) * (K×N) = M×N`. Panics if the inner dimensions differ.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let (m, k, n) = (self.nrows, self.ncols, rhs.ncols);
        let mut data = Vec::with_capacity(m * n);
        for i in 0..m {
            let a_row = &self.data[i * k..(i + 1) * k];
            for j in 0..n {
                let mut sum = T::zero();
                for (p, &a) in a_row.iter().enumerate() {
                    sum = sum + a * rhs.data[p * n + j];
                }
                data.push(sum);
            }
        }
        Matrix {
            data,
            nrows: m,
            ncols: n,
        }
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: &Matrix<T>) -> Self {
        &self * rhs
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.clone() * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m2(a: f64, b: f64, c: f64, d: f64) -> Matrix<f64> {
        Matrix::new(&[[a, b], [c, d]]).unwrap()
    }

    #[test]
    fn add_sub() {
        let a = m2(1.0, 2.0, 3.0, 4.0);
        let b = m2(5.0, 6.0, 7.0, 8.0);
        assert_eq!(&a + &b, m2(6.0, 8.0, 10.0, 12.0));
        assert_eq!(&b - &a, m2(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a.clone() + b.clone(), m2(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b.clone() - &a, m2(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn add_sub_assign() {
        let mut a = m2(1.0, 2.0, 3.0, 4.0);
        a += &m2(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a, m2(2.0, 3.0, 4.0, 5.0));
        a -= &m2(2.0, 3.0, 4.0, 5.0);
        assert_eq!(a.rank(), 0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_mismatch() {
        let a = Matrix::<f64>::zeros(2, 2).unwrap();
        let b = Matrix::<f64>::zeros(2, 3).unwrap();
        let _ = &a + &b;
    }

    #[test]
    fn neg() {
        let a = m2(1.0, -2.0, 0.0, 4.0);
        assert_eq!(-&a, m2(-1.0, 2.0, 0.0, -4.0));
        assert_eq!(-a, m2(-1.0, 2.0, 0.0, -4.0));
    }

    #[test]
    fn matmul() {
        let a = Matrix::new(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::new(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();
        let c = &a * &b;
        assert_eq!(c, m2(58.0, 64.0, 139.0, 154.0));

        let id = Matrix::<f64>::eye(3).unwrap();
        assert_eq!(&a * &id, a);
    }

    #[test]
    fn det_is_multiplicative() {
        let a = Matrix::new(&[[2.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]]).unwrap();
        let b = Matrix::new(&[[1.0_f64, 2.0, 0.0], [0.0, 1.0, 5.0], [3.0, 0.0, 1.0]]).unwrap();
        let ab = &a * &b;
        assert!((ab.det() - a.det() * b.det()).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch: 2x3 * 2x3")]
    fn matmul_mismatch() {
        let a = Matrix::<f64>::ones(2, 3).unwrap();
        let _ = &a * &a;
    }

    #[test]
    fn scalar_mul() {
        let a = m2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(&a * 2.0, m2(2.0, 4.0, 6.0, 8.0));
        let mut b = a * 0.5;
        assert_eq!(b, m2(0.5, 1.0, 1.5, 2.0));
        b *= 4.0;
        assert_eq!(b[1][1], 8.0);
    }

    #[test]
    fn integer_elements() {
        let a = Matrix::new(&[[1, 2], [3, 4]]).unwrap();
        let b = &a * &a;
        assert_eq!(b[0], [7, 10]);
        assert_eq!(b[1], [15, 22]);
    }
}
