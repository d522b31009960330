use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::no_such_argument;

/// Matrix product `f(A, B) = A · B`.
///
/// With `A` of shape `(m,k)` and `B` of shape `(k,n)` the output is `(m,n)`, and
///
/// * `dE/dA = dE/df · Bᵀ`
/// * `dE/dB = Aᵀ · dE/df`
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixMultiply;

impl Function for MatrixMultiply {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("MatrixMultiply", xs.len(), 2)?;
        xs[0].checked_mul(xs[1])
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("MatrixMultiply", xs.len(), 2)?;
        if xs[0].ncols() != xs[1].nrows() {
            return Err(HypernetError::IncompatibleDims {
                left: Dim::of(xs[0])?,
                right: Dim::of(xs[1])?,
                operation: "MatrixMultiply".to_string(),
            });
        }
        Ok(xs[0].dot(xs[1]))
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        match i {
            0 => Ok(dedf.dot(&xs[1].t())),
            1 => Ok(xs[0].t().dot(dedf)),
            _ => Err(no_such_argument("MatrixMultiply", i, 2)),
        }
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("{} * {}", arg_names[0], arg_names[1])
    }
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
