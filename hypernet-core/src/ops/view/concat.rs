use crate::autograd::Function;
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::no_such_argument;
use ndarray::{concatenate, s, Axis};

/// Stacks its arguments on top of each other (row-wise).
///
/// Every argument must have the same number of columns. The output has the
/// summed row count. Any positive arity is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Concatenate;

impl Concatenate {
    /// First output row belonging to argument `i`.
    fn row_offset(xs: &[&Matrix], i: usize) -> usize {
        xs[..i].iter().map(|x| x.nrows()).sum()
    }
}

impl Function for Concatenate {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        let first = *xs.first().ok_or_else(|| HypernetError::ArityMismatch {
            expected: 1,
            actual: 0,
            operation: "Concatenate".to_string(),
        })?;
        let mut rows = 0usize;
        for d in xs {
            if d.cols() != first.cols() {
                return Err(HypernetError::IncompatibleDims {
                    left: first,
                    right: *d,
                    operation: "Concatenate".to_string(),
                });
            }
            rows += d.rows();
        }
        Dim::try_new(rows, first.cols())
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        if xs.is_empty() {
            return Err(HypernetError::ArityMismatch {
                expected: 1,
                actual: 0,
                operation: "Concatenate".to_string(),
            });
        }
        let views: Vec<_> = xs.iter().map(|x| x.view()).collect();
        concatenate(Axis(0), &views).map_err(|e| HypernetError::InternalError(format!("Concatenate: {}", e)))
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i >= xs.len() {
            return Err(no_such_argument("Concatenate", i, xs.len()));
        }
        let start = Self::row_offset(xs, i);
        let end = start + xs[i].nrows();
        Ok(dedf.slice(s![start..end, ..]).to_owned())
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("concat({})", arg_names.join(", "))
    }
}
