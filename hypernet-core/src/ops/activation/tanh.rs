use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};

/// `f(x) = tanh(x)`, element-wise.
///
/// The derivative `1 - tanh²(x)` is taken from the forward output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tanh;

impl Function for Tanh {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("Tanh", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Tanh", xs.len(), 1)?;
        Ok(xs[0].mapv(f64::tanh))
    }

    fn backward(&self, _xs: &[&Matrix], fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Tanh", i, 1));
        }
        Ok(fx.mapv(|t| 1.0 - t * t) * dedf)
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("tanh({})", arg_names[0])
    }
}
