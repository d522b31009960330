use crate::autograd::{check_same_dims, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::no_such_argument;

/// `f(x_1, ..., x_n) = x_1 + ... + x_n` over equally shaped arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl Function for Sum {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_same_dims("Sum", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        let (first, rest) = xs.split_first().ok_or_else(|| HypernetError::ArityMismatch {
            expected: 1,
            actual: 0,
            operation: "Sum".to_string(),
        })?;
        let mut res = (*first).clone();
        for x in rest {
            res += *x;
        }
        Ok(res)
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i >= xs.len() {
            return Err(no_such_argument("Sum", i, xs.len()));
        }
        Ok(dedf.clone())
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        arg_names.join(" + ")
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
