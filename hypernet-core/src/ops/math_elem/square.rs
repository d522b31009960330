use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};

/// `f(x) = x²`, element-wise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Function for Square {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("Square", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Square", xs.len(), 1)?;
        Ok(xs[0].mapv(|x| x * x))
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Square", i, 1));
        }
        Ok(xs[0] * dedf * 2.0)
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("square({})", arg_names[0])
    }
}
