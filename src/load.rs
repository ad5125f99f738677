use crate::error::MatrixError;
use crate::matrix::Matrix;
use std::io::Read;

/// The parsed form of the two-matrix input document.
///
/// The document is one positive integer `N` followed by
/// `2 * N * N` whitespace-delimited signed integers: matrix `A`
/// in row-major order, then matrix `B`. Line breaks carry no
/// meaning; tokens may be split or combined across lines.
///
/// Instances are created by [`load`](crate::load) and
/// [`loads`](crate::loads); a parse failure never yields a
/// partially-filled pair.
///
/// # Examples
///
/// ```
/// let text = "2
/// 1 2
/// 3 4
/// 5 6
/// 7 8";
/// let pair = densemat::loads(text).unwrap();
/// assert_eq!(pair.order(), 2);
/// assert_eq!(pair.a()[(0, 1)], 2);
/// assert_eq!(pair.b()[(1, 1)], 8);
/// ```
#[derive(Clone, Debug)]
pub struct MatrixPair {
    order: usize,
    a: Matrix,
    b: Matrix,
}

impl MatrixPair {
    pub(crate) fn new_from_str(input: &str) -> Result<Self, MatrixError> {
        let mut tokens = input.split_whitespace();
        let order = match tokens.next() {
            None => {
                return Err(MatrixError::ParseError(
                    "missing matrix size".to_string(),
                ))
            }
            Some(token) => token.parse::<i64>().map_err(|_| {
                MatrixError::ParseError(format!("invalid matrix size {token:?}"))
            })?,
        };
        if order <= 0 {
            return Err(MatrixError::ParseError(format!(
                "matrix size must be positive, got {order}"
            )));
        }
        let order = order as usize;
        let a = read_square_matrix(&mut tokens, order, "A")?;
        let b = read_square_matrix(&mut tokens, order, "B")?;
        Ok(Self { order, a, b })
    }

    pub(crate) fn new_from_reader<T: Read>(mut reader: T) -> Result<Self, MatrixError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::new_from_str(&buf)
    }

    /// The size `N` of both matrices.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The first matrix.
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    /// The second matrix.
    pub fn b(&self) -> &Matrix {
        &self.b
    }
}

fn read_square_matrix<'input, I>(
    tokens: &mut I,
    order: usize,
    which: &str,
) -> Result<Matrix, MatrixError>
where
    I: Iterator<Item = &'input str>,
{
    let mut data = Vec::with_capacity(order * order);
    for i in 0..order {
        for j in 0..order {
            let token = tokens.next().ok_or_else(|| {
                MatrixError::ParseError(format!(
                    "missing element for matrix {which} at [{i}][{j}]"
                ))
            })?;
            let value = token.parse::<i64>().map_err(|_| {
                MatrixError::ParseError(format!(
                    "invalid element {token:?} for matrix {which} at [{i}][{j}]"
                ))
            })?;
            data.push(value);
        }
    }
    Matrix::from_shape_vec((order, order), data)
}
