use crate::error::MatrixError;
use crate::matrix::Matrix;

/// The two diagonal sums of a square matrix.
///
/// Sums are accumulated in `i64`, matching the element type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiagonalSums {
    /// Sum over elements where the row index equals the column index.
    pub main: i64,
    /// Sum over elements where the row and column indices add up
    /// to `n - 1`.
    pub secondary: i64,
}

/// Elementwise sum of two matrices of identical shape.
///
/// # Errors
///
/// [`MatrixError::ShapeError`] if the shapes differ or the
/// matrices are empty.
///
/// # Examples
///
/// ```
/// let a = densemat::Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = densemat::Matrix::identity(2);
/// let c = densemat::add(&a, &b).unwrap();
/// assert_eq!(c[(0, 0)], 2);
/// assert_eq!(c[(0, 1)], 2);
/// ```
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.is_empty() || a.shape() != b.shape() {
        return Err(MatrixError::ShapeError(format!(
            "matrix shapes must match for addition, got {:?} and {:?}",
            a.shape(),
            b.shape()
        )));
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x + y)
        .collect();
    Matrix::from_shape_vec(a.shape(), data)
}

/// Matrix product of an `n` by `p` matrix and a `p` by `m` matrix.
///
/// The product is computed with the textbook triple loop in
/// O(n*m*p) time and O(n*m) additional space. Accumulation is
/// in `i64`: inputs with element magnitudes up to 10^6 and inner
/// dimensions up to 10^6 cannot overflow.
///
/// # Errors
///
/// [`MatrixError::ShapeError`] if the column count of `a` does
/// not equal the row count of `b`, or `a` is empty.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.is_empty() || a.cols() != b.rows() {
        return Err(MatrixError::ShapeError(format!(
            "matrix shapes incompatible for multiplication, {:?} by {:?}",
            a.shape(),
            b.shape()
        )));
    }
    let (n, p, m) = (a.rows(), a.cols(), b.cols());
    let mut data = vec![0_i64; n * m];
    for i in 0..n {
        for j in 0..m {
            let mut acc = 0_i64;
            for k in 0..p {
                acc += a[(i, k)] * b[(k, j)];
            }
            data[i * m + j] = acc;
        }
    }
    Matrix::from_shape_vec((n, m), data)
}

/// Sum both diagonals of a square matrix.
///
/// For a 1 by 1 matrix the diagonals coincide and both sums
/// equal the single element.
///
/// # Errors
///
/// [`MatrixError::ShapeError`] if the matrix is empty or not
/// square. Callers that can proceed without the sums may treat
/// this as a recoverable condition.
pub fn sum_diagonals(matrix: &Matrix) -> Result<DiagonalSums, MatrixError> {
    if matrix.is_empty() || !matrix.is_square() {
        return Err(MatrixError::ShapeError(format!(
            "matrix must be square to sum diagonals, got {:?}",
            matrix.shape()
        )));
    }
    let n = matrix.rows();
    let mut main = 0_i64;
    let mut secondary = 0_i64;
    for i in 0..n {
        main += matrix[(i, i)];
        secondary += matrix[(i, n - 1 - i)];
    }
    Ok(DiagonalSums { main, secondary })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> Matrix {
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    fn reversed_three_by_three() -> Matrix {
        Matrix::from_rows(vec![vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]]).unwrap()
    }

    #[test]
    fn add_sums_elementwise() {
        let c = add(&three_by_three(), &reversed_three_by_three()).unwrap();
        assert_eq!(c.as_slice(), &[10; 9]);
    }

    #[test]
    fn add_rejects_mismatched_shapes() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(3, 3);
        assert!(matches!(add(&a, &b), Err(MatrixError::ShapeError(_))));
    }

    #[test]
    fn add_rejects_empty_matrices() {
        let a = Matrix::zeros(0, 0);
        let b = Matrix::zeros(0, 0);
        assert!(matches!(add(&a, &b), Err(MatrixError::ShapeError(_))));
    }

    #[test]
    fn multiply_known_product() {
        let c = multiply(&three_by_three(), &reversed_three_by_three()).unwrap();
        assert_eq!(c.row_slice(0), &[30, 24, 18]);
        assert_eq!(c.row_slice(1), &[84, 69, 54]);
        assert_eq!(c.row_slice(2), &[138, 114, 90]);
    }

    #[test]
    fn multiply_non_square_shapes() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.row_slice(0), &[58, 64]);
        assert_eq!(c.row_slice(1), &[139, 154]);
    }

    #[test]
    fn multiply_by_identity_is_a_noop() {
        let a = three_by_three();
        let c = multiply(&a, &Matrix::identity(3)).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn multiply_rejects_incompatible_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        assert!(matches!(multiply(&a, &b), Err(MatrixError::ShapeError(_))));
    }

    #[test]
    fn diagonal_sums_of_the_standard_example() {
        let sums = sum_diagonals(&three_by_three()).unwrap();
        assert_eq!(sums.main, 15);
        assert_eq!(sums.secondary, 15);
    }

    #[test]
    fn diagonal_sums_of_a_single_element() {
        let m = Matrix::from_rows(vec![vec![42]]).unwrap();
        let sums = sum_diagonals(&m).unwrap();
        assert_eq!(sums.main, 42);
        assert_eq!(sums.secondary, 42);
    }

    #[test]
    fn diagonal_sums_reject_a_non_square_matrix() {
        let m = Matrix::zeros(2, 3);
        assert!(matches!(
            sum_diagonals(&m),
            Err(MatrixError::ShapeError(_))
        ));
    }

    #[test]
    fn diagonal_sums_reject_an_empty_matrix() {
        let m = Matrix::zeros(0, 0);
        assert!(matches!(
            sum_diagonals(&m),
            Err(MatrixError::ShapeError(_))
        ));
    }
}
