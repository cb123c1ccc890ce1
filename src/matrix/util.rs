use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::traits::Scalar;

use super::Matrix;

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of all elements.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for &x in &self.data {
            s = s + x;
        }
        s
    }

    /// Copy the contents out as a grid of rows.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::<f64>::eye(2).unwrap();
    /// assert_eq!(m.to_grid(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    /// ```
    pub fn to_grid(&self) -> Vec<Vec<T>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

// ── Map / Transpose ─────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1.0_f64, 4.0], [9.0, 16.0]]).unwrap();
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[0][0], 1.0);
    /// assert_eq!(r[1][1], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Transpose: `(M×N) -> (N×M)`.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[2], [3, 6]);
    /// ```
    pub fn transpose(&self) -> Self {
        let (m, n) = (self.nrows, self.ncols);
        let mut data = Vec::with_capacity(m * n);
        for j in 0..n {
            for i in 0..m {
                data.push(self.data[i * n + j]);
            }
        }
        Matrix {
            data,
            nrows: n,
            ncols: m,
        }
    }

    /// Swap two columns in place.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let mut m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// m.swap_cols(0, 1);
    /// assert_eq!(m[0], [2.0, 1.0]);
    /// ```
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a != b {
            for row in self.data.chunks_exact_mut(self.ncols) {
                row.swap(a, b);
            }
        }
    }
}

impl<T> Matrix<T> {
    /// Swap two rows in place.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let mut m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// m.swap_rows(0, 1);
    /// assert_eq!(m[0], [3.0, 4.0]);
    /// assert_eq!(m[1], [1.0, 2.0]);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        // Measure column widths
        let mut widths: Vec<usize> = alloc::vec![0; n];
        for i in 0..m {
            for (j, x) in self.data[i * n..(i + 1) * n].iter().enumerate() {
                let w = WriteCounting::count(|wc| write!(wc, "{}", x));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for (j, x) in self.data[i * n..(i + 1) * n].iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "│")?;
            if i < m - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum() {
        let m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.sum(), 10.0);
    }

    #[test]
    fn map_type_change() {
        let m = Matrix::new(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
        let rounded = m.map(|x| x as i32);
        assert_eq!(rounded[0][0], 1);
        assert_eq!(rounded[1][1], 4);
    }

    #[test]
    fn transpose_preserves_rank_and_det() {
        let m = Matrix::new(&[[2.0_f64, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t[0], [2.0, 1.0, 1.0]);
        assert!((t.det() - m.det()).abs() < 1e-12);
        assert_eq!(t.rank(), m.rank());

        let wide = Matrix::new(&[[1.0_f64, 2.0, 3.0]]).unwrap();
        assert_eq!(wide.transpose().shape(), (3, 1));
    }

    #[test]
    fn swap_rows_negates_det() {
        let mut m = Matrix::new(&[[2.0_f64, 1.0, 0.0], [0.0, 1.0, 4.0], [1.0, 0.0, 3.0]]).unwrap();
        let d = m.det();
        m.swap_rows(0, 2);
        assert!((m.det() + d).abs() < 1e-12);
        m.swap_rows(1, 1);
        assert!((m.det() + d).abs() < 1e-12);
    }

    #[test]
    fn swap_cols() {
        let mut m = Matrix::new(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        m.swap_cols(0, 2);
        assert_eq!(m[0], [3.0, 2.0, 1.0]);
        assert_eq!(m[1], [6.0, 5.0, 4.0]);
    }

    #[test]
    fn display() {
        let m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let s = format!("{}", m);
        assert!(s.contains('1'));
        assert!(s.contains('4'));
        assert_eq!(s.lines().count(), 2);
    }

    #[test]
    fn display_alignment() {
        let m = Matrix::new(&[[1.0, 100.0], [1000.0, 2.0]]).unwrap();
        let s = format!("{}", m);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0].len(), lines[1].len());
    }
}
