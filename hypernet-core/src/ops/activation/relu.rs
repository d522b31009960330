use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};
use ndarray::Zip;

/// Rectified linear unit `f(x) = max(0, x)`, element-wise.
///
/// The subgradient at `0` is taken to be `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rectify;

impl Function for Rectify {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("Rectify", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Rectify", xs.len(), 1)?;
        Ok(xs[0].mapv(|x| if x > 0.0 { x } else { 0.0 }))
    }

    fn backward(&self, _xs: &[&Matrix], fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Rectify", i, 1));
        }
        Ok(Zip::from(fx).and(dedf).map_collect(|&f, &d| if f > 0.0 { d } else { 0.0 }))
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("ReLU({})", arg_names[0])
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
