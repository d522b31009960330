use super::*;
use crate::autograd::check_function_grad;
use crate::utils::testing::random_matrix;
use ndarray::array;

#[test]
fn test_relu_forward() -> Result<(), HypernetError> {
    let x = array![[-2.0, -1.0, 0.0, 1.0, 2.0]];
    let fx = Rectify.forward(&[&x])?;
    assert_eq!(fx, array![[0.0, 0.0, 0.0, 1.0, 2.0]]);
    Ok(())
}

#[test]
fn test_relu_backward_masks_inactive_units() -> Result<(), HypernetError> {
    let x = array![[-2.0, -1.0, 0.0, 1.0, 2.0]];
    let fx = Rectify.forward(&[&x])?;
    let dedf = array![[1.0, 1.0, 1.0, 1.0, 3.0]];
    let dx = Rectify.backward(&[&x], &fx, &dedf, 0)?;
    assert_eq!(dx, array![[0.0, 0.0, 0.0, 1.0, 3.0]]);
    Ok(())
}

#[test]
fn test_relu_grad_check_away_from_kink() {
    // Keep inputs away from 0 where the derivative jumps
    let d = Dim::new(3, 3);
    let inputs = vec![random_matrix(d, 0.1, 1.0, 91).mapv(|v| if v > 0.55 { v } else { -v })];
    let dedf = random_matrix(d, -1.0, 1.0, 92);
    check_function_grad(&Rectify, &inputs, &dedf, 1e-6, 1e-6).unwrap();
}
