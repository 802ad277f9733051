pub(crate) use super::*;

#[test]
fn test_from_slice() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_from_vec() {
    let v = Vector::from_vec(vec![4.0_f32, 5.0]);
    assert_eq!(v.len(), 2);
    assert_eq!(v.to_vec(), vec![4.0, 5.0]);
}

#[test]
fn test_empty() {
    let v = Vector::<f32>::from_vec(vec![]);
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn test_index() {
    let mut v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    assert!((v[1] - 2.0).abs() < 1e-6);
    v[1] = 7.0;
    assert!((v[1] - 7.0).abs() < 1e-6);
}

#[test]
fn test_iter() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    let doubled: Vec<f32> = v.iter().map(|x| x * 2.0).collect();
    assert_eq!(doubled, vec![2.0, 4.0, 6.0]);
}

#[test]
fn test_dot() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    let w = Vector::from_slice(&[4.0_f32, 5.0, 6.0]);
    assert!((v.dot(&w) - 32.0).abs() < 1e-6);
}

#[test]
fn test_sum_mean() {
    let v = Vector::from_slice(&[2.0_f32, 4.0, 6.0, 8.0]);
    assert!((v.sum() - 20.0).abs() < 1e-6);
    assert!((v.mean() - 5.0).abs() < 1e-6);
}

#[test]
fn test_norm() {
    let v = Vector::from_slice(&[-3.0_f32, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-6);
}

#[test]
fn test_inner() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    let w = Vector::from_slice(&[4.0_f32, 5.0, 6.0]);
    let result = inner(&v, &w).expect("vectors have equal length: 3");
    assert!((result - 32.0).abs() < 1e-6);
}

#[test]
fn test_inner_length_mismatch() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    let w = Vector::from_slice(&[4.0_f32, 5.0]);
    assert!(inner(&v, &w).is_err());
}

#[test]
fn test_outer() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    let w = Vector::from_slice(&[4.0_f32, 5.0]);
    let m = outer(&v, &w);
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.as_slice(), &[4.0, 5.0, 8.0, 10.0, 12.0, 15.0]);
}

#[test]
fn test_outer_empty() {
    let v = Vector::from_slice(&[1.0_f32, 2.0]);
    let w = Vector::<f32>::from_vec(vec![]);
    let m = outer(&v, &w);
    assert_eq!(m.shape(), (2, 0));
    assert!(m.as_slice().is_empty());
}
