use crate::matrix::Matrix;
use std::fmt;

// Width of one printed element. Values that need more
// characters widen their own field instead of truncating.
const FIELD_WIDTH: usize = 6;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "[empty matrix]");
        }
        for row in 0..self.rows() {
            for value in self.row_slice(row) {
                write!(f, "{value:>width$}", width = FIELD_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render a matrix as labeled, aligned text.
///
/// The label appears on its own line, followed by one line per
/// row with each element right-aligned in a 6-character field,
/// followed by a blank line. A matrix with zero rows or zero
/// columns renders an `[empty matrix]` placeholder instead of a
/// grid.
///
/// # Examples
///
/// ```
/// let m = densemat::Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let text = densemat::render(&m, "Matrix A:");
/// assert_eq!(text, "Matrix A:\n     1     2\n     3     4\n\n");
/// ```
pub fn render(matrix: &Matrix, label: &str) -> String {
    format!("{label}\n{matrix}\n")
}
