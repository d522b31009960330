use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::{self, Matrix};
use crate::ops::loss::{log_sum_exp, softmax};
use crate::ops::{check_column, no_such_argument};

/// Negative log-likelihood of class `index` under `softmax(x)`:
/// `f(x) = log Σ exp(x) - x[index]`, a `(1,1)` scalar.
///
/// The index is fixed when the edge is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickNegLogSoftmax {
    index: usize,
}

impl PickNegLogSoftmax {
    pub fn new(index: usize) -> Self {
        PickNegLogSoftmax { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Function for PickNegLogSoftmax {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("PickNegLogSoftmax", xs.len(), 1)?;
        check_column("PickNegLogSoftmax", xs[0])?;
        if self.index >= xs[0].rows() {
            return Err(HypernetError::InvalidArgument(format!(
                "PickNegLogSoftmax index {} out of range for {}",
                self.index, xs[0]
            )));
        }
        Ok(Dim::default())
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("PickNegLogSoftmax", xs.len(), 1)?;
        let x = xs[0];
        if self.index >= x.nrows() {
            return Err(HypernetError::InvalidArgument(format!(
                "PickNegLogSoftmax index {} out of range for {} rows",
                self.index,
                x.nrows()
            )));
        }
        Ok(matrix::scalar(log_sum_exp(x) - x[[self.index, 0]]))
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("PickNegLogSoftmax", i, 1));
        }
        let mut dx = softmax(xs[0]);
        dx[[self.index, 0]] -= 1.0;
        Ok(dx * dedf[[0, 0]])
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("log_softmax({})_{{{}}}", arg_names[0], self.index)
    }
}
