use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{check_column, no_such_argument};

/// Max over non-overlapping windows of a column vector.
///
/// Window `j` covers rows `[j * width, (j + 1) * width)`; the last window
/// may be shorter. `backward` recomputes the winning row of each window from
/// the input and routes the adjoint there. Ties go to the first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxPooling1D {
    width: usize,
}

impl MaxPooling1D {
    pub fn new(width: usize) -> Result<Self, HypernetError> {
        if width == 0 {
            return Err(HypernetError::InvalidArgument(
                "MaxPooling1D width must be positive".to_string(),
            ));
        }
        Ok(MaxPooling1D { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn windows(&self, rows: usize) -> usize {
        rows.div_ceil(self.width)
    }

    fn argmax(&self, x: &Matrix, window: usize) -> usize {
        let start = window * self.width;
        let end = start.saturating_add(self.width).min(x.nrows());
        let mut best = start;
        for r in start + 1..end {
            if x[[r, 0]] > x[[best, 0]] {
                best = r;
            }
        }
        best
    }
}

impl Default for MaxPooling1D {
    fn default() -> Self {
        MaxPooling1D { width: 2 }
    }
}

impl Function for MaxPooling1D {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("MaxPooling1D", xs.len(), 1)?;
        check_column("MaxPooling1D", xs[0])?;
        Dim::try_new(self.windows(xs[0].rows()), 1)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("MaxPooling1D", xs.len(), 1)?;
        let x = xs[0];
        let n = self.windows(x.nrows());
        Ok(Matrix::from_shape_fn((n, 1), |(j, _)| x[[self.argmax(x, j), 0]]))
    }

    fn backward(&self, xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("MaxPooling1D", i, 1));
        }
        let x = xs[0];
        let mut dx = Matrix::zeros(x.raw_dim());
        for j in 0..dedf.nrows() {
            dx[[self.argmax(x, j), 0]] += dedf[[j, 0]];
        }
        Ok(dx)
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("maxpool1d({}, width={})", arg_names[0], self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_function_grad;
    use ndarray::array;

    #[test]
    fn test_max_pooling_short_last_window() -> Result<(), HypernetError> {
        let pool = MaxPooling1D::new(2)?;
        assert_eq!(pool.dim_forward(&[Dim::vector(5)])?, Dim::vector(3));
        let x = array![[1.0], [4.0], [3.0], [2.0], [-1.0]];
        let fx = pool.forward(&[&x])?;
        assert_eq!(fx, array![[4.0], [3.0], [-1.0]]);
        let dx = pool.backward(&[&x], &fx, &array![[1.0], [2.0], [3.0]], 0)?;
        assert_eq!(dx, array![[0.0], [1.0], [2.0], [0.0], [3.0]]);
        Ok(())
    }

    #[test]
    fn test_max_pooling_single_window_for_huge_width() -> Result<(), HypernetError> {
        let pool = MaxPooling1D::new(usize::MAX)?;
        assert_eq!(pool.dim_forward(&[Dim::vector(4)])?, Dim::vector(1));
        let x = array![[0.5], [2.0], [-1.0], [1.5]];
        let fx = pool.forward(&[&x])?;
        assert_eq!(fx, array![[2.0]]);
        let dx = pool.backward(&[&x], &fx, &array![[3.0]], 0)?;
        assert_eq!(dx, array![[0.0], [3.0], [0.0], [0.0]]);
        Ok(())
    }

    #[test]
    fn test_max_pooling_rejects_zero_width() {
        assert!(matches!(MaxPooling1D::new(0), Err(HypernetError::InvalidArgument(_))));
    }

    #[test]
    fn test_max_pooling_grad_check() {
        // Well separated values keep the argmax stable under perturbation.
        let inputs = vec![array![[0.1], [0.9], [0.5], [-0.3], [0.7], [0.2], [1.5]]];
        let dedf = array![[0.4], [-1.2], [0.6]];
        check_function_grad(&MaxPooling1D::new(3).unwrap(), &inputs, &dedf, 1e-6, 1e-6).unwrap();
    }
}
