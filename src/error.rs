//! Error types for matrix construction and element access.

use core::fmt;

/// Invalid or inconsistent dimensions passed to a constructor or factory.
///
/// ```
/// use mtrx::{Matrix, ShapeError};
///
/// let err = Matrix::<f64>::zeros(0, 3).unwrap_err();
/// assert_eq!(err, ShapeError::ZeroDimension { nrows: 0, ncols: 3 });
///
/// let ragged = Matrix::new(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
/// assert_eq!(ragged, ShapeError::RaggedRow { row: 1, expected: 2, got: 1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A row or column count of zero (including an empty grid or empty first row).
    ZeroDimension { nrows: usize, ncols: usize },
    /// Row `row` of a grid has `got` elements where `expected` were required.
    RaggedRow { row: usize, expected: usize, got: usize },
    /// `diag` was given no values.
    EmptyDiagonal,
    /// Flat buffer length does not match `nrows * ncols`.
    LengthMismatch { expected: usize, got: usize },
    /// `nrows * ncols` does not fit in `usize`.
    TooLarge { nrows: usize, ncols: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::ZeroDimension { nrows, ncols } => {
                write!(f, "matrix dimensions must be positive, got {}x{}", nrows, ncols)
            }
            ShapeError::RaggedRow { row, expected, got } => write!(
                f,
                "row {} has {} elements, expected {}",
                row, got, expected
            ),
            ShapeError::EmptyDiagonal => write!(f, "diagonal values must not be empty"),
            ShapeError::LengthMismatch { expected, got } => {
                write!(f, "buffer length {} does not match {} elements", got, expected)
            }
            ShapeError::TooLarge { nrows, ncols } => {
                write!(f, "matrix dimensions {}x{} overflow the element count", nrows, ncols)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

/// Which index of a `(row, col)` pair was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

/// Out-of-bounds element or row access.
///
/// ```
/// use mtrx::{Axis, IndexError, Matrix};
///
/// let m = Matrix::<f64>::zeros(2, 3).unwrap();
/// assert_eq!(
///     m.get(0, 3).unwrap_err(),
///     IndexError { axis: Axis::Col, index: 3, bound: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub axis: Axis,
    /// The offending index.
    pub index: usize,
    /// Number of rows or columns along `axis`.
    pub bound: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.axis {
            Axis::Row => "row",
            Axis::Col => "column",
        };
        write!(
            f,
            "{} index {} out of bounds for matrix with {} {}s",
            name, self.index, self.bound, name
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndexError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn shape_error_display() {
        let e = ShapeError::ZeroDimension { nrows: 0, ncols: 2 };
        assert_eq!(format!("{}", e), "matrix dimensions must be positive, got 0x2");

        let e = ShapeError::RaggedRow { row: 2, expected: 3, got: 1 };
        assert_eq!(format!("{}", e), "row 2 has 1 elements, expected 3");

        assert_eq!(
            format!("{}", ShapeError::EmptyDiagonal),
            "diagonal values must not be empty"
        );

        let e = ShapeError::TooLarge { nrows: usize::MAX, ncols: 2 };
        assert_eq!(
            format!("{}", e),
            format!("matrix dimensions {}x2 overflow the element count", usize::MAX)
        );
    }

    #[test]
    fn index_error_display() {
        let e = IndexError { axis: Axis::Row, index: 5, bound: 2 };
        assert_eq!(format!("{}", e), "row index 5 out of bounds for matrix with 2 rows");

        let e = IndexError { axis: Axis::Col, index: 3, bound: 3 };
        assert_eq!(
            format!("{}", e),
            "column index 3 out of bounds for matrix with 3 columns"
        );
    }
}
