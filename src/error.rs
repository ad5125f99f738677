use thiserror::Error;

/// Error type for this crate.
///
/// The enum fields correspond to the different parts of the
/// system that can fail: constructing or combining matrices
/// ([`ShapeError`](MatrixError::ShapeError)), addressing cells
/// ([`IndexError`](MatrixError::IndexError)), and reading the
/// text input format ([`ParseError`](MatrixError::ParseError)).
///
/// # Example
///
/// This input is incorrect because the size token is not a number.
///
/// ```
/// let text = "two 1 2 3 4 5 6 7 8";
/// assert!(matches!(
///     densemat::loads(text),
///     Err(densemat::MatrixError::ParseError(_))
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// Incompatible or invalid matrix dimensions.
    #[error("{0}")]
    ShapeError(String),
    /// A row or column index outside the matrix.
    #[error("{0}")]
    IndexError(String),
    /// Malformed input text.
    #[error("{0}")]
    ParseError(String),
    /// Errors coming from reading the input source.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}
