use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::no_such_argument;

/// `f(x) = xᵀ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transpose;

impl Function for Transpose {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("Transpose", xs.len(), 1)?;
        Ok(xs[0].transpose())
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("Transpose", xs.len(), 1)?;
        Ok(xs[0].t().to_owned())
    }

    fn backward(&self, _xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("Transpose", i, 1));
        }
        Ok(dedf.t().to_owned())
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("transpose({})", arg_names[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_function_grad;
    use crate::utils::testing::random_matrix;
    use ndarray::array;

    #[test]
    fn test_transpose_forward() -> Result<(), HypernetError> {
        let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let fx = Transpose.forward(&[&x])?;
        assert_eq!(fx, array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
        assert_eq!(Transpose.dim_forward(&[Dim::new(2, 3)]), Ok(Dim::new(3, 2)));
        Ok(())
    }

    #[test]
    fn test_transpose_grad_check() {
        let inputs = vec![random_matrix(Dim::new(2, 3), -1.0, 1.0, 61)];
        let dedf = random_matrix(Dim::new(3, 2), -1.0, 1.0, 62);
        check_function_grad(&Transpose, &inputs, &dedf, 1e-6, 1e-6).unwrap();
    }
}
