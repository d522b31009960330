use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::{self, Matrix};
use crate::ops::no_such_argument;

/// Sums every element of its argument into a `(1,1)` scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumElements;

impl Function for SumElements {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("SumElements", xs.len(), 1)?;
        Ok(Dim::default())
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("SumElements", xs.len(), 1)?;
        Ok(matrix::scalar(xs[0].sum()))
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("SumElements", i, 1));
        }
        Ok(Matrix::from_elem(xs[0].raw_dim(), dedf[[0, 0]]))
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("sum_elems({})", arg_names[0])
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
