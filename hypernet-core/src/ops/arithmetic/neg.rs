use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};

/// `f(x) = -x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negate;

impl Function for Negate {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("Negate", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Negate", xs.len(), 1)?;
        Ok(-xs[0])
    }

    fn backward(&self, _xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Negate", i, 1));
        }
        Ok(-dedf)
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("-{}", arg_names[0])
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
