use super::*;
use crate::autograd::check_function_grad;
use crate::utils::testing::{check_matrix_near, random_matrix};
use ndarray::array;

#[test]
fn test_log_forward() -> Result<(), HypernetError> {
    let x = array![[1.0, std::f64::consts::E]];
    let fx = Log.forward(&[&x])?;
    check_matrix_near(&fx, &array![[0.0, 1.0]], 1e-12);
    Ok(())
}

#[test]
fn test_log_backward() -> Result<(), HypernetError> {
    let x = array![[2.0, 4.0]];
    let fx = Log.forward(&[&x])?;
    let dx = Log.backward(&[&x], &fx, &array![[1.0, 1.0]], 0)?;
    check_matrix_near(&dx, &array![[0.5, 0.25]], 1e-12);
    Ok(())
}

#[test]
fn test_log_of_non_positive_is_left_to_the_caller() -> Result<(), HypernetError> {
    let fx = Log.forward(&[&array![[0.0, -1.0]]])?;
    assert_eq!(fx[[0, 0]], f64::NEG_INFINITY);
    assert!(fx[[0, 1]].is_nan());
    Ok(())
}

#[test]
fn test_log_grad_check() {
    let d = Dim::new(3, 2);
    let inputs = vec![random_matrix(d, 0.5, 3.0, 111)];
    let dedf = random_matrix(d, -1.0, 1.0, 112);
    check_function_grad(&Log, &inputs, &dedf, 1e-6, 1e-6).unwrap();
}
