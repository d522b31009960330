use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};

/// `f(x) = e^x`, element-wise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl Function for Exp {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("Exp", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Exp", xs.len(), 1)?;
        Ok(xs[0].mapv(f64::exp))
    }

    fn backward(&self, _xs: &[&Matrix], fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Exp", i, 1));
        }
        Ok(fx * dedf)
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("exp({})", arg_names[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_function_grad;
    use crate::utils::testing::random_matrix;

    #[test]
    fn test_exp_grad_check() {
        let d = Dim::new(2, 3);
        let inputs = vec![random_matrix(d, -2.0, 2.0, 101)];
        let dedf = random_matrix(d, -1.0, 1.0, 102);
        check_function_grad(&Exp, &inputs, &dedf, 1e-6, 1e-6).unwrap();
    }

    #[test]
    fn test_exp_overflow_is_not_intercepted() -> Result<(), HypernetError> {
        let fx = Exp.forward(&[&ndarray::array![[1000.0]]])?;
        assert!(fx[[0, 0]].is_infinite());
        Ok(())
    }
}
