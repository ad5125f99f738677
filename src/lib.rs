//! Dense square-matrix arithmetic over 64-bit signed integers.
//!
//! The crate loads two equally-sized square matrices from a
//! whitespace-delimited text document, renders them as aligned
//! text, and provides elementwise addition, textbook
//! multiplication, diagonal sums, and in-place row/column swaps
//! and single-cell updates.
//!
//! # Example
//!
//! ```
//! let text = "2
//! 1 2
//! 3 4
//! 5 6
//! 7 8";
//! let pair = densemat::loads(text).unwrap();
//! let sum = densemat::add(pair.a(), pair.b()).unwrap();
//! assert_eq!(sum.row_slice(0), &[6, 8]);
//! let product = densemat::multiply(pair.a(), pair.b()).unwrap();
//! assert_eq!(product.row_slice(0), &[19, 22]);
//! ```
//!
//! Operations that combine two matrices fail with
//! [`MatrixError::ShapeError`] when the shapes are
//! incompatible; in-place mutations fail with
//! [`MatrixError::IndexError`] and leave the matrix untouched.

#![warn(missing_docs)]

mod error;
mod load;
mod matrix;
mod ops;
#[cfg(feature = "json")]
mod process_json;
mod render;

pub use error::MatrixError;
pub use load::MatrixPair;
pub use matrix::Matrix;
pub use ops::{add, multiply, sum_diagonals, DiagonalSums};
pub use render::render;

/// Load a [`MatrixPair`] from a string.
///
/// # Errors
///
/// [`MatrixError::ParseError`] if the size token or any element
/// token is missing or malformed; no partial data is returned.
///
/// # Examples
///
/// ```
/// let pair = densemat::loads("1  10  20").unwrap();
/// assert_eq!(pair.a()[(0, 0)], 10);
/// assert_eq!(pair.b()[(0, 0)], 20);
/// ```
pub fn loads(input: &str) -> Result<MatrixPair, MatrixError> {
    MatrixPair::new_from_str(input)
}

/// Load a [`MatrixPair`] from a reader.
///
/// # Errors
///
/// [`MatrixError::IoError`] if reading fails, otherwise as
/// [`loads`].
///
/// # Examples
///
/// ```
/// let file = std::fs::File::open("input.txt");
/// if let Ok(file) = file {
///     let pair = densemat::load(file).unwrap();
///     println!("loaded two {n} by {n} matrices", n = pair.order());
/// }
/// ```
pub fn load<T: std::io::Read>(reader: T) -> Result<MatrixPair, MatrixError> {
    MatrixPair::new_from_reader(reader)
}

/// Parse a [`Matrix`] from a JSON array of rows.
///
/// # Errors
///
/// [`MatrixError::JsonError`] if the input is not valid JSON or
/// the rows are ragged.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> Result<Matrix, MatrixError> {
    process_json::matrix_from_json(json)
}

/// Write a [`Matrix`] as a JSON array of rows.
///
/// # Errors
///
/// [`MatrixError::JsonError`] if serialization fails.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn dumps_json(matrix: &Matrix) -> Result<String, MatrixError> {
    process_json::matrix_to_json(matrix)
}
