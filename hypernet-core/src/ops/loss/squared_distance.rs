use crate::autograd::{check_arity, check_same_dims, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::{self, Matrix};
use crate::ops::no_such_argument;

/// `f(a, b) = ||a - b||²`, a `(1,1)` scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredDistance;

impl Function for SquaredDistance {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("SquaredDistance", xs.len(), 2)?;
        check_same_dims("SquaredDistance", xs)?;
        Ok(Dim::default())
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("SquaredDistance", xs.len(), 2)?;
        let diff = xs[0] - xs[1];
        Ok(matrix::scalar(diff.mapv(|d| d * d).sum()))
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        let scale = 2.0 * dedf[[0, 0]];
        match i {
            0 => Ok((xs[0] - xs[1]) * scale),
            1 => Ok((xs[0] - xs[1]) * -scale),
            _ => Err(no_such_argument("SquaredDistance", i, 2)),
        }
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("|| {} - {} ||^2", arg_names[0], arg_names[1])
    }
}
