use crate::autograd::{check_arity, check_same_dims, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::no_such_argument;

/// Element-wise (Hadamard) product `f(a, b) = a ⊙ b`.
///
/// On `(1,1)` arguments this is the ordinary scalar product.
#[derive(Debug, Clone, Copy, Default)]
pub struct CwiseMultiply;

impl Function for CwiseMultiply {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("CwiseMultiply", xs.len(), 2)?;
        check_same_dims("CwiseMultiply", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("CwiseMultiply", xs.len(), 2)?;
        Ok(xs[0] * xs[1])
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        // d(a ⊙ b)/da = b, d(a ⊙ b)/db = a
        match i {
            0 => Ok(dedf * xs[1]),
            1 => Ok(dedf * xs[0]),
            _ => Err(no_such_argument("CwiseMultiply", i, 2)),
        }
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("{} \u{2299} {}", arg_names[0], arg_names[1])
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
