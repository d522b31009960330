use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::loss::log_sum_exp;
use crate::ops::{check_column, no_such_argument};

/// `f(x) = x - log Σ exp(x)` over a column vector.
///
/// `dE/dx = dE/df - softmax(x) Σ dE/df`, where `softmax(x) = exp(f)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSoftmax;

impl Function for LogSoftmax {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("LogSoftmax", xs.len(), 1)?;
        check_column("LogSoftmax", xs[0])?;
        Ok(xs[0])
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("LogSoftmax", xs.len(), 1)?;
        let lse = log_sum_exp(xs[0]);
        Ok(xs[0].mapv(|v| v - lse))
    }

    fn backward(&self, _xs: &[&Matrix], fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("LogSoftmax", i, 1));
        }
        let total = dedf.sum();
        Ok(dedf - &fx.mapv(|f| f.exp() * total))
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("log_softmax({})", arg_names[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_function_grad;
    use crate::utils::testing::random_matrix;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_log_softmax_exponentiates_to_distribution() -> Result<(), HypernetError> {
        let fx = LogSoftmax.forward(&[&array![[0.5], [-1.0], [2.0]]])?;
        assert_relative_eq!(fx.mapv(f64::exp).sum(), 1.0, epsilon = 1e-12);
        assert!(fx.iter().all(|&v| v <= 0.0));
        Ok(())
    }

    #[test]
    fn test_log_softmax_grad_check() {
        let inputs = vec![random_matrix(Dim::vector(4), -2.0, 2.0, 161)];
        let dedf = random_matrix(Dim::vector(4), -1.0, 1.0, 162);
        check_function_grad(&LogSoftmax, &inputs, &dedf, 1e-6, 1e-6).unwrap();
    }
}
