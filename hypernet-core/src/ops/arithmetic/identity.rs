use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};

/// `f(x) = x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Function for Identity {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("Identity", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Identity", xs.len(), 1)?;
        Ok(xs[0].clone())
    }

    fn backward(&self, _xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Identity", i, 1));
        }
        Ok(dedf.clone())
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        arg_names.first().cloned().unwrap_or_default()
    }
}
