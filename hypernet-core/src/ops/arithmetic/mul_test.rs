use super::*;
use crate::autograd::check_function_grad;
use crate::utils::testing::{check_matrix_near, random_matrix};
use ndarray::array;

#[test]
fn test_cwise_multiply_ok() -> Result<(), HypernetError> {
    let a = array![[1.0, 2.0]];
    let b = array![[3.0, 4.0]];
    let res = CwiseMultiply.forward(&[&a, &b])?;
    check_matrix_near(&res, &array![[3.0, 8.0]], 1e-12);
    Ok(())
}

#[test]
fn test_cwise_multiply_scalar_gradients() -> Result<(), HypernetError> {
    let x = array![[4.0]];
    let y = array![[-3.0]];
    let fx = CwiseMultiply.forward(&[&x, &y])?;
    assert_eq!(fx, array![[-12.0]]);
    let one = array![[1.0]];
    assert_eq!(CwiseMultiply.backward(&[&x, &y], &fx, &one, 0)?, array![[-3.0]]);
    assert_eq!(CwiseMultiply.backward(&[&x, &y], &fx, &one, 1)?, array![[4.0]]);
    Ok(())
}

#[test]
fn test_cwise_multiply_shape_mismatch() {
    let res = CwiseMultiply.dim_forward(&[Dim::new(2, 1), Dim::new(1, 2)]);
    assert!(matches!(res, Err(HypernetError::ShapeMismatch { .. })));
    let res = CwiseMultiply.dim_forward(&[Dim::new(2, 1)]);
    assert!(matches!(res, Err(HypernetError::ArityMismatch { expected: 2, actual: 1, .. })));
}

#[test]
fn test_cwise_multiply_grad_check() {
    let d = Dim::new(3, 3);
    let inputs = vec![random_matrix(d, -1.0, 1.0, 21), random_matrix(d, -1.0, 1.0, 22)];
    let dedf = random_matrix(d, -1.0, 1.0, 23);
    check_function_grad(&CwiseMultiply, &inputs, &dedf, 1e-6, 1e-6).unwrap();
}

#[test]
fn test_cwise_multiply_adjoint_linearity() -> Result<(), HypernetError> {
    let d = Dim::new(2, 3);
    let a = random_matrix(d, -1.0, 1.0, 31);
    let b = random_matrix(d, -1.0, 1.0, 32);
    let d1 = random_matrix(d, -1.0, 1.0, 33);
    let d2 = random_matrix(d, -1.0, 1.0, 34);
    let alpha = 2.5;
    let xs = [&a, &b];
    let fx = CwiseMultiply.forward(&xs)?;
    let combined = &d1 * alpha + &d2;
    for i in 0..2 {
        let lhs = CwiseMultiply.backward(&xs, &fx, &combined, i)?;
        let rhs = CwiseMultiply.backward(&xs, &fx, &d1, i)? * alpha + CwiseMultiply.backward(&xs, &fx, &d2, i)?;
        check_matrix_near(&lhs, &rhs, 1e-12);
    }
    Ok(())
}
