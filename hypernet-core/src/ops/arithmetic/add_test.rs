use super::*;
use crate::autograd::check_function_grad;
use crate::utils::testing::{check_matrix_near, random_matrix};
use ndarray::array;

#[test]
fn test_sum_forward() -> Result<(), HypernetError> {
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![[10.0, 20.0], [30.0, 40.0]];
    let c = array![[0.5, 0.5], [0.5, 0.5]];
    let res = Sum.forward(&[&a, &b, &c])?;
    check_matrix_near(&res, &array![[11.5, 22.5], [33.5, 44.5]], 1e-12);
    Ok(())
}

#[test]
fn test_sum_dim_forward_rejects_mismatch() {
    let res = Sum.dim_forward(&[Dim::new(2, 2), Dim::new(2, 1)]);
    assert!(matches!(res, Err(HypernetError::ShapeMismatch { .. })));
    assert_eq!(Sum.dim_forward(&[Dim::new(2, 2); 3]), Ok(Dim::new(2, 2)));
}

#[test]
fn test_sum_backward_every_argument_gets_adjoint() -> Result<(), HypernetError> {
    let a = array![[1.0]];
    let b = array![[2.0]];
    let fx = Sum.forward(&[&a, &b])?;
    let dedf = array![[0.25]];
    assert_eq!(Sum.backward(&[&a, &b], &fx, &dedf, 0)?, dedf);
    assert_eq!(Sum.backward(&[&a, &b], &fx, &dedf, 1)?, dedf);
    assert!(Sum.backward(&[&a, &b], &fx, &dedf, 2).is_err());
    Ok(())
}

#[test]
fn test_sum_grad_check() {
    let d = Dim::new(3, 2);
    let inputs = vec![random_matrix(d, -1.0, 1.0, 1), random_matrix(d, -1.0, 1.0, 2)];
    let dedf = random_matrix(d, -1.0, 1.0, 3);
    check_function_grad(&Sum, &inputs, &dedf, 1e-6, 1e-6).unwrap();
}

#[test]
fn test_sum_as_string() {
    let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(Sum.as_string(&names), "a + b + c");
}
