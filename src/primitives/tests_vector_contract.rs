// =========================================================================
// Vector primitives contract
//
// Properties of the vector reductions and the free inner/outer product
// helpers, checked on fixed cases and randomized lengths via proptest.
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
// =========================================================================

use super::*;

fn seeded_data(len: usize, seed: u32) -> Vec<f32> {
    (0..len)
        .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
        .collect()
}

/// Dot product is commutative: dot(u,v) = dot(v,u)
#[test]
fn contract_dot_commutative() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]);

    let uv = u.dot(&v);
    let vu = v.dot(&u);

    assert!((uv - vu).abs() < 1e-6, "dot(u,v)={uv} != dot(v,u)={vu}");
}

/// Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn contract_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).abs();
    let bound = u.norm() * v.norm();

    assert!(dot <= bound + 1e-5, "|dot|={dot} > norm(u)*norm(v)={bound}");
}

/// Mean equals sum / length
#[test]
fn contract_mean_equals_sum_over_len() {
    let v = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);

    let mean = v.mean();
    let expected = v.sum() / v.len() as f32;

    assert!((mean - expected).abs() < 1e-6);
    assert!((mean - 6.0).abs() < 1e-6);
}

/// inner(v, w) equals the sum of pairwise products for equal lengths
#[test]
fn contract_inner_is_pairwise_product_sum() {
    let v = Vector::from_vec(seeded_data(9, 5));
    let w = Vector::from_vec(seeded_data(9, 19));

    let result = inner(&v, &w).expect("equal lengths");
    let expected: f32 = v.iter().zip(w.iter()).map(|(a, b)| a * b).sum();

    assert!((result - expected).abs() < 1e-4);
}

/// outer(v, w) has shape len(v) × len(w) with cell (i,j) = v[i]*w[j]
#[test]
fn contract_outer_shape_and_cells() {
    let v = Vector::from_vec(seeded_data(4, 23));
    let w = Vector::from_vec(seeded_data(3, 29));

    let m = outer(&v, &w);
    assert_eq!(m.shape(), (4, 3));
    for i in 0..4 {
        for j in 0..3 {
            assert!(
                (m.get(i, j) - v[i] * w[j]).abs() < 1e-5,
                "outer[{i},{j}]={} != v[{i}]*w[{j}]={}",
                m.get(i, j),
                v[i] * w[j]
            );
        }
    }
}

mod vector_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// inner is commutative and matches dot for random equal lengths
        #[test]
        fn prop_inner_commutative(
            len in 1..=16usize,
            seed in 0..500u32,
        ) {
            let v = Vector::from_vec(seeded_data(len, seed));
            let w = Vector::from_vec(seeded_data(len, seed.wrapping_add(71)));

            let vw = inner(&v, &w).expect("equal lengths");
            let wv = inner(&w, &v).expect("equal lengths");

            prop_assert!((vw - wv).abs() < 1e-3, "inner(v,w)={} != inner(w,v)={}", vw, wv);
            prop_assert!((vw - v.dot(&w)).abs() < 1e-6);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// outer transposes by swapping arguments: outer(v,w)^T = outer(w,v)
        #[test]
        fn prop_outer_transpose_swaps_args(
            n in 1..=8usize,
            m in 1..=8usize,
            seed in 0..500u32,
        ) {
            let v = Vector::from_vec(seeded_data(n, seed));
            let w = Vector::from_vec(seeded_data(m, seed.wrapping_add(113)));

            let vw = outer(&v, &w).transpose();
            let wv = outer(&w, &v);

            prop_assert_eq!(vw.shape(), wv.shape());
            for i in 0..m {
                for j in 0..n {
                    prop_assert!(
                        (vw.get(i, j) - wv.get(i, j)).abs() < 1e-5,
                        "outer(v,w)^T[{},{}] != outer(w,v)[{},{}]", i, j, i, j
                    );
                }
            }
        }
    }
}
