use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::ops::{no_such_argument, unary_dim};

/// `f(x) = c - x` for a constant `c` fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantMinusX {
    c: f64,
}

impl ConstantMinusX {
    pub fn new(c: f64) -> Self {
        ConstantMinusX { c }
    }

    pub fn constant(&self) -> f64 {
        self.c
    }
}

impl Default for ConstantMinusX {
    /// `1 - x`.
    fn default() -> Self {
        ConstantMinusX { c: 1.0 }
    }
}

impl Function for ConstantMinusX {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        unary_dim("ConstantMinusX", xs)
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("ConstantMinusX", xs.len(), 1)?;
        Ok(xs[0].mapv(|x| self.c - x))
    }

    fn backward(&self, _xs: &[&Matrix], _fx: &Matrix, dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        if i != 0 {
            return Err(no_such_argument("ConstantMinusX", i, 1));
        }
        Ok(-dedf)
    }

    fn as_string(&self, arg_names: &[String]) -> String {
        format!("{} - {}", self.c, arg_names[0])
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
