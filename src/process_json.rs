use crate::error::MatrixError;
use crate::matrix::Matrix;

pub(crate) fn matrix_from_json(json: &str) -> Result<Matrix, MatrixError> {
    let matrix = serde_json::from_str(json)?;
    Ok(matrix)
}

pub(crate) fn matrix_to_json(matrix: &Matrix) -> Result<String, MatrixError> {
    let json = serde_json::to_string(matrix)?;
    Ok(json)
}

#[test]
fn test_json_round_trip() {
    let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let json = matrix_to_json(&m).unwrap();
    assert_eq!(json, "[[1,2,3],[4,5,6]]");
    let back = matrix_from_json(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_ragged_json_is_rejected() {
    assert!(matrix_from_json("[[1,2],[3]]").is_err());
}
