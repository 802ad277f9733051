//! End-to-end exercises of the public API through the prelude.

use matriz::prelude::*;

#[test]
fn matrix_pipeline_through_prelude() {
    let a = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("data length matches 3*2");
    let b = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("data length matches 2*2");

    let product = &a * &b;
    assert_eq!(product.shape(), (3, 2));
    assert_eq!(
        product.as_slice(),
        &[7.0, 10.0, 15.0, 22.0, 23.0, 34.0]
    );

    let back = product.transpose().transpose();
    assert_eq!(back, product);
}

#[test]
fn both_indexing_families_reach_the_same_elements() {
    let mut m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("data length matches 2*3");

    // 0-based write, 1-based read.
    m.set(0, 2, 30.0);
    assert_eq!(m[(1, 3)], 30.0);

    // 1-based write, 0-based read.
    m[(2, 1)] = 40.0;
    assert_eq!(m.get(1, 0), 40.0);

    assert_eq!(m.linear_index(2, 3), 6);
}

#[test]
fn rows_and_columns_round_trip() {
    let mut m = Matrix::<f32>::zeros(3, 3);
    m.set_row(1, &[1.0, 2.0, 3.0]).expect("3 values for 3 cols");
    m.set_column(0, &[7.0, 8.0, 9.0])
        .expect("3 values for 3 rows");

    assert_eq!(m.row(1).as_slice(), &[8.0, 2.0, 3.0]);
    assert_eq!(m.column(2).as_slice(), &[0.0, 3.0, 0.0]);
}

#[test]
fn vector_helpers_compose_with_matrix() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let w = Vector::from_slice(&[4.0, 5.0, 6.0]);

    let ip = inner(&v, &w).expect("equal lengths");
    assert!((ip - 32.0).abs() < 1e-6);

    let op = outer(&v, &w);
    assert_eq!(op.shape(), (3, 3));
    // Row i of the outer product is w scaled by v[i].
    assert_eq!(op.row(1).as_slice(), &[8.0, 10.0, 12.0]);

    // trace(outer(v, w)) = inner(v, w) for equal lengths.
    let trace: f32 = (0..3).map(|i| op.get(i, i)).sum();
    assert!((trace - ip).abs() < 1e-5);
}

#[test]
fn shape_errors_surface_as_matriz_errors() {
    let a = Matrix::<f32>::zeros(2, 2);
    let b = Matrix::<f32>::zeros(3, 2);

    let err = a.add(&b).unwrap_err();
    assert!(matches!(err, MatrizError::DimensionMismatch { .. }));
    assert!(err.to_string().contains("2x2"));
    assert!(err.to_string().contains("3x2"));

    let err = a.matmul(&b).unwrap_err();
    assert!(matches!(err, MatrizError::DimensionMismatch { .. }));

    let v = Vector::from_slice(&[1.0, 2.0]);
    let w = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let err = inner(&v, &w).unwrap_err();
    assert!(matches!(
        err,
        MatrizError::LengthMismatch {
            expected: 2,
            actual: 3
        }
    ));
}
