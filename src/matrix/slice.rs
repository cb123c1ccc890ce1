use core::slice::{ChunksExact, ChunksExactMut};

use super::Matrix;

impl<T> Matrix<T> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the rows as slices.
    ///
    /// ```
    /// use mtrx::Matrix;
    /// let m = Matrix::new(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let sums: Vec<i32> = m.rows().map(|r| r.iter().sum()).collect();
    /// assert_eq!(sums, vec![6, 15]);
    /// ```
    #[inline]
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.ncols)
    }

    /// Iterate mutably over the rows as slices.
    #[inline]
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(self.ncols)
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_mut_slice() {
        let mut m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        m.as_mut_slice()[2] = 99.0;
        assert_eq!(m[1][0], 99.0);
    }

    #[test]
    fn rows() {
        let m = Matrix::new(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let rows: Vec<&[f64]> = m.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[1.0, 2.0, 3.0]);
        assert_eq!(rows[1], &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn rows_mut() {
        let mut m = Matrix::<f64>::zeros(3, 2).unwrap();
        for (i, row) in m.rows_mut().enumerate() {
            row[0] = i as f64;
        }
        assert_eq!(m[2], [2.0, 0.0]);
    }

    #[test]
    fn iter_mut() {
        let mut m = Matrix::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        for x in m.iter_mut() {
            *x *= 2.0;
        }
        assert_eq!(m[0][0], 2.0);
        assert_eq!(m[1][1], 8.0);
    }

    #[test]
    fn into_iter_for_loop() {
        let m = Matrix::new(&[[1, 2], [3, 4]]).unwrap();
        let mut sum = 0;
        for &x in &m {
            sum += x;
        }
        assert_eq!(sum, 10);
    }
}
