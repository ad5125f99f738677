use densemat::{Matrix, MatrixError};

#[test]
fn load_the_documented_example() {
    let pair = densemat::loads("2 1 2 3 4 5 6 7 8").unwrap();
    assert_eq!(pair.order(), 2);
    assert_eq!(
        pair.a(),
        &Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()
    );
    assert_eq!(
        pair.b(),
        &Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap()
    );
}

#[test]
fn load_from_a_reader() -> anyhow::Result<()> {
    let text = "2\n1 2\n3 4\n5 6\n7 8\n";
    let pair = densemat::load(text.as_bytes())?;
    assert_eq!(pair.a().row_slice(1), &[3, 4]);
    assert_eq!(pair.b().row_slice(0), &[5, 6]);
    Ok(())
}

#[test]
fn layout_of_the_input_does_not_matter() {
    let one_line = densemat::loads("2 1 2 3 4 5 6 7 8").unwrap();
    let many_lines = densemat::loads("2\n1\n2\n3\n4\n5\n6\n7\n8\n").unwrap();
    assert_eq!(one_line.a(), many_lines.a());
    assert_eq!(one_line.b(), many_lines.b());
}

#[test]
fn negative_elements_are_allowed() {
    let pair = densemat::loads("1 -5 -6").unwrap();
    assert_eq!(pair.a()[(0, 0)], -5);
    assert_eq!(pair.b()[(0, 0)], -6);
}

#[test]
fn truncated_input_is_a_parse_error() {
    for text in ["", "2", "2 1 2 3", "2 1 2 3 4 5 6 7"] {
        assert!(
            matches!(densemat::loads(text), Err(MatrixError::ParseError(_))),
            "expected a parse error for {text:?}"
        );
    }
}

#[test]
fn bad_size_tokens_are_parse_errors() {
    for text in ["x 1 2", "0 1 2", "-1 1 2", "2.5 1 2"] {
        assert!(
            matches!(densemat::loads(text), Err(MatrixError::ParseError(_))),
            "expected a parse error for {text:?}"
        );
    }
}

#[test]
fn bad_element_tokens_are_parse_errors() {
    assert!(matches!(
        densemat::loads("2 1 2 3 4 5 six 7 8"),
        Err(MatrixError::ParseError(_))
    ));
}
