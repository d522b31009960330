use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};

/// Natural logarithm, element-wise.
///
/// Non-positive entries produce NaN or `-inf` like `f64::ln`; the function
/// reports nothing itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Log;

impl Function for Log {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("Log", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Log", xs.len(), 1)?;
        Ok(xs[0].mapv(f64::ln))
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Log", i, 1));
        }
        Ok(dedf / xs[0])
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("log({})", arg_names[0])
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
