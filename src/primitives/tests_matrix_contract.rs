// =========================================================================
// Matrix primitives contract
//
// Algebraic properties every Matrix implementation must uphold,
// checked on fixed cases and on randomized shapes via proptest.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn seeded_data(rows: usize, cols: usize, seed: u32) -> Vec<f32> {
    (0..rows * cols)
        .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
        .collect()
}

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape(), "shape mismatch");
    for i in 0..2 {
        for j in 0..3 {
            assert!(
                (att.get(i, j) - a.get(i, j)).abs() < 1e-6,
                "(A^T)^T[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn contract_transpose_swaps_shape() {
    let a = Matrix::from_vec(3, 5, vec![0.0; 15]).expect("valid");
    let at = a.transpose();

    assert_eq!(at.shape(), (5, 3));
}

/// Transpose exchanges rows and columns: A^T row i = A column i
#[test]
fn contract_transpose_exchanges_rows_cols() {
    let a = Matrix::from_vec(3, 4, seeded_data(3, 4, 7)).expect("valid");
    let at = a.transpose();

    for i in 0..4 {
        assert_eq!(at.row(i).as_slice(), a.column(i).as_slice());
    }
    for i in 0..3 {
        assert_eq!(at.column(i).as_slice(), a.row(i).as_slice());
    }
}

/// Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(c.shape(), (2, 4));
}

/// Matmul cells: C[i,j] equals the inner product of A row i and B column j
#[test]
fn contract_matmul_cell_is_inner_product() {
    let a = Matrix::from_vec(3, 2, seeded_data(3, 2, 11)).expect("valid");
    let b = Matrix::from_vec(2, 4, seeded_data(2, 4, 13)).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    for i in 0..3 {
        for j in 0..4 {
            let expected = inner(&a.row(i), &b.column(j)).expect("row and column share length 2");
            assert!(
                (c.get(i, j) - expected).abs() < 1e-4,
                "C[{i},{j}]={} != inner(row, col)={expected}",
                c.get(i, j)
            );
        }
    }
}

/// Identity matmul: A * I = A
#[test]
fn contract_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let eye = Matrix::eye(3);
    let result = a.matmul(&eye).expect("compatible dims");

    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (result.get(i, j) - a.get(i, j)).abs() < 1e-5,
                "(A*I)[{i},{j}]={} != A[{i},{j}]={}",
                result.get(i, j),
                a.get(i, j)
            );
        }
    }
}

/// Cross-convention consistency: m[(r, c)] = m.get(r-1, c-1)
///
/// The 1-based operator family and the 0-based accessor family are
/// implemented independently; this pins them to the same physical
/// offsets.
#[test]
fn contract_one_based_matches_zero_based() {
    let m = Matrix::from_vec(4, 3, seeded_data(4, 3, 3)).expect("valid");
    for r in 1..=4 {
        for c in 1..=3 {
            assert!(
                (m[(r, c)] - m.get(r - 1, c - 1)).abs() < 1e-6,
                "m[({r},{c})] != m.get({},{})",
                r - 1,
                c - 1
            );
        }
    }
}

/// Linear index formula: linear_index(r, c) = cols*(r-1)+c for 1-based r, c
#[test]
fn contract_linear_index_formula() {
    let m = Matrix::<f32>::zeros(5, 7);
    for r in 1..=5 {
        for c in 1..=7 {
            assert_eq!(m.linear_index(r, c), 7 * (r - 1) + c);
        }
    }
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// Transpose involution for random matrices
        #[test]
        fn prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, seeded_data(rows, cols, seed)).expect("valid");
            let att = a.transpose().transpose();

            prop_assert_eq!(att.shape(), a.shape());
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (att.get(i, j) - a.get(i, j)).abs() < 1e-5,
                        "(A^T)^T[{},{}] != A[{},{}]", i, j, i, j
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// A + B - B = A for random same-shape matrices
        #[test]
        fn prop_add_sub_roundtrip(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, seeded_data(rows, cols, seed)).expect("valid");
            let b = Matrix::from_vec(rows, cols, seeded_data(rows, cols, seed.wrapping_add(97)))
                .expect("valid");
            let roundtrip = a
                .add(&b)
                .and_then(|sum| sum.sub(&b))
                .expect("shapes match throughout");

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (roundtrip.get(i, j) - a.get(i, j)).abs() < 1e-3,
                        "(A+B-B)[{},{}]={} != A[{},{}]={}",
                        i, j, roundtrip.get(i, j), i, j, a.get(i, j)
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// Addition agrees with per-row element sums for random matrices
        #[test]
        fn prop_add_rowwise(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, seeded_data(rows, cols, seed)).expect("valid");
            let b = Matrix::from_vec(rows, cols, seeded_data(rows, cols, seed.wrapping_add(41)))
                .expect("valid");
            let sum = a.add(&b).expect("same shape");

            for i in 0..rows {
                let row = sum.row(i);
                for j in 0..cols {
                    prop_assert!(
                        (row[j] - (a.get(i, j) + b.get(i, j))).abs() < 1e-5,
                        "(A+B) row {} col {} diverges from element sums", i, j
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        /// Identity matmul for random square matrices
        #[test]
        fn prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(n, n, seeded_data(n, n, seed)).expect("valid");
            let eye = Matrix::eye(n);
            let result = a.matmul(&eye).expect("compatible");

            for i in 0..n {
                for j in 0..n {
                    prop_assert!(
                        (result.get(i, j) - a.get(i, j)).abs() < 1e-3,
                        "(A*I)[{},{}] != A[{},{}]", i, j, i, j
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// 1-based and 0-based accessors agree for random shapes
        #[test]
        fn prop_one_based_matches_zero_based(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let m = Matrix::from_vec(rows, cols, seeded_data(rows, cols, seed)).expect("valid");
            for r in 1..=rows {
                for c in 1..=cols {
                    prop_assert!(
                        (m[(r, c)] - m.get(r - 1, c - 1)).abs() < 1e-6,
                        "m[({},{})] != m.get({},{})", r, c, r - 1, c - 1
                    );
                }
            }
        }
    }
}
