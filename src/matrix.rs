use crate::error::MatrixError;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A dense matrix of [`i64`] values.
///
/// Storage is a single contiguous block in row-major order,
/// indexed by zero-based `(row, column)` pairs.
/// The shape is fixed at construction; every constructor
/// validates it, so all rows always have equal length.
///
/// # Examples
///
/// ```
/// let m = densemat::Matrix::from_rows(vec![
///     vec![1, 2],
///     vec![3, 4],
/// ]).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m[(1, 0)], 3);
/// ```
///
/// Mutating operations work in place; clone first when the
/// original must be preserved:
///
/// ```
/// let original = densemat::Matrix::identity(3);
/// let mut swapped = original.clone();
/// swapped.swap_rows(0, 2).unwrap();
/// assert_eq!(original[(0, 0)], 1);
/// assert_eq!(swapped[(0, 0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeError`] if the buffer length is not
    /// `rows * cols`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<i64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeError(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeError`] if the rows do not all have
    /// the same length.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::ShapeError(format!(
                    "row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    ncols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// An all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// The `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut rv = Self::zeros(n, n);
        for i in 0..n {
            rv.data[i * n + i] = 1;
        }
        rv
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// `true` if the matrix has zero rows or zero columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// `true` if the row and column counts are equal.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The value at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// The entire buffer in row-major order.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// If `row` is out of bounds.
    pub fn row_slice(&self, row: usize) -> &[i64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// One column, copied out.
    ///
    /// # Panics
    ///
    /// If `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vec<i64> {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows)
            .map(|row| self.data[self.offset(row, col)])
            .collect()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row_pair(&self, r1: usize, r2: usize) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::IndexError(
                "cannot swap rows in an empty matrix".to_string(),
            ));
        }
        if r1 >= self.rows || r2 >= self.rows {
            return Err(MatrixError::IndexError(format!(
                "row index out of bounds ({}, {}), valid range is 0 to {}",
                r1,
                r2,
                self.rows - 1
            )));
        }
        Ok(())
    }

    /// Exchange two rows in place.
    ///
    /// Equal indices are a no-op. The operation is its own
    /// inverse: swapping the same pair twice restores the
    /// original matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexError`] if the matrix is empty or
    /// either index is out of bounds; the matrix is unchanged.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<(), MatrixError> {
        self.check_row_pair(r1, r2)?;
        if r1 == r2 {
            return Ok(());
        }
        let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
        let (head, tail) = self.data.split_at_mut(hi * self.cols);
        head[lo * self.cols..(lo + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
        Ok(())
    }

    /// Exchange two columns in place.
    ///
    /// Same contract as [`swap_rows`](Matrix::swap_rows), over
    /// columns.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexError`] if the matrix is empty or
    /// either index is out of bounds; the matrix is unchanged.
    pub fn swap_cols(&mut self, c1: usize, c2: usize) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::IndexError(
                "cannot swap columns in an empty matrix".to_string(),
            ));
        }
        if c1 >= self.cols || c2 >= self.cols {
            return Err(MatrixError::IndexError(format!(
                "column index out of bounds ({}, {}), valid range is 0 to {}",
                c1,
                c2,
                self.cols - 1
            )));
        }
        if c1 == c2 {
            return Ok(());
        }
        for row in 0..self.rows {
            let base = row * self.cols;
            self.data.swap(base + c1, base + c2);
        }
        Ok(())
    }

    /// Overwrite the single cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexError`] if the matrix is empty or the
    /// position is out of bounds; the matrix is unchanged.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::IndexError(
                "cannot update an element of an empty matrix".to_string(),
            ));
        }
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexError(format!(
                "index ({}, {}) out of bounds, valid row range 0 to {}, valid column range 0 to {}",
                row,
                col,
                self.rows - 1,
                self.cols - 1
            )));
        }
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds"
        );
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds"
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

// Serialized form is a sequence of rows, so external
// representations never see the flat buffer.
impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in 0..self.rows {
            seq.serialize_element(self.row_slice(row))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<i64>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
