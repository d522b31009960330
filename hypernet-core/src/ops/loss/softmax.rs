use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::loss::softmax;
use crate::ops::{check_column, no_such_argument};

/// Softmax over a column vector.
///
/// `dE/dx = f ⊙ (dE/df - <f, dE/df>)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Softmax;

impl Function for Softmax {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("Softmax", xs.len(), 1)?;
        check_column("Softmax", xs[0])?;
        Ok(xs[0])
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Softmax", xs.len(), 1)?;
        Ok(softmax(xs[0]))
    }

    fn backward(&self, _xs: &[&Matrix], fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Softmax", i, 1));
        }
        let inner = (fx * dedf).sum();
        Ok(fx * &dedf.mapv(|d| d - inner))
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("softmax({})", arg_names[0])
    }
}
