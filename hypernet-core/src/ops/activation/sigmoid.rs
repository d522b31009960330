use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};

/// Logistic sigmoid `f(x) = 1 / (1 + e^{-x})`, element-wise.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticSigmoid;

impl Function for LogisticSigmoid {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("LogisticSigmoid", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("LogisticSigmoid", xs.len(), 1)?;
        Ok(xs[0].mapv(|x| 1.0 / (1.0 + (-x).exp())))
    }

    fn backward(&self, _xs: &[&Matrix], fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("LogisticSigmoid", i, 1));
        }
        Ok(fx.mapv(|s| s * (1.0 - s)) * dedf)
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("\u{03c3}({})", arg_names[0])
    }
}
