use super::*;

fn input(rows: Vec<Vec<f64>>) -> ArrayInput {
    ArrayInput::from(rows)
}

#[test]
fn coerces_rectangular_rows() {
    let array = NdArray::from_input(&input(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])).unwrap();
    assert_eq!(array.shape(), &[2, 3]);
    assert_eq!(array.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(array.get(&[1, 0]), Some(4.0));
    assert_eq!(array.get(&[2, 0]), None);
}

#[test]
fn scalar_has_rank_zero() {
    let array = NdArray::from_input(&ArrayInput::Scalar(7.0)).unwrap();
    assert_eq!(array.ndim(), 0);
    assert_eq!(array.len(), 1);
    assert_eq!(array.get(&[]), Some(7.0));
}

#[test]
fn empty_list_has_zero_extent() {
    let array = NdArray::from_input(&ArrayInput::List(Vec::new())).unwrap();
    assert_eq!(array.shape(), &[0]);
    assert!(array.is_empty());
}

#[test]
fn ragged_rows_are_rejected() {
    let err = NdArray::from_input(&input(vec![vec![1.0, 2.0], vec![3.0]])).unwrap_err();
    assert_eq!(err.error_type(), "Shape");
    assert!(err.to_string().contains("element 1"));
}

#[test]
fn mixed_nesting_depth_is_rejected() {
    let mixed = ArrayInput::List(vec![
        ArrayInput::Scalar(1.0),
        ArrayInput::List(vec![ArrayInput::Scalar(2.0)]),
    ]);
    assert!(matches!(
        NdArray::from_input(&mixed),
        Err(PaperPlotError::Shape(_))
    ));
}

#[test]
fn ragged_error_reports_nested_location() {
    let nested = ArrayInput::from(vec![
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        vec![vec![5.0, 6.0], vec![7.0]],
    ]);
    let err = NdArray::from_input(&nested).unwrap_err();
    assert!(err.to_string().contains("[1]"), "{err}");
}

#[test]
fn new_checks_value_count() {
    assert!(NdArray::new(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).is_ok());
    let err = NdArray::new(vec![2, 2], vec![1.0]).unwrap_err();
    assert_eq!(err.error_type(), "Shape");
}

#[test]
fn unravel_inverts_flat_index() {
    let array = NdArray::new(vec![3, 2, 4], (0..24).map(f64::from).collect()).unwrap();
    for flat in 0..24 {
        let index = array.unravel(flat);
        assert_eq!(array.flat_index(&index), flat);
    }
    assert_eq!(array.strides(), vec![8, 4, 1]);
}

#[test]
fn deserializes_nested_json() {
    let parsed: ArrayInput = serde_json::from_str("[[1, 2.5], [3, 4]]").unwrap();
    let array = NdArray::from_input(&parsed).unwrap();
    assert_eq!(array.shape(), &[2, 2]);
    assert_eq!(array.as_slice(), &[1.0, 2.5, 3.0, 4.0]);
}
