//! Zero-arity edges that bring parameters and inputs into a graph.

use crate::autograd::{check_arity, Function};
use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::nn::{Input, Parameter};
use crate::ops::no_such_argument;

/// Reads a [`Parameter`] at forward time and accumulates the adjoint of its
/// vertex into the parameter's gradient at backward time.
#[derive(Debug, Clone)]
pub struct ParameterEdge {
    parameter: Parameter,
}

impl ParameterEdge {
    pub fn new(parameter: Parameter) -> Self {
        ParameterEdge { parameter }
    }

    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }
}

impl Function for ParameterEdge {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("ParameterEdge", xs.len(), 0)?;
        Ok(self.parameter.dim())
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("ParameterEdge", xs.len(), 0)?;
        self.parameter.value()
    }

    fn backward(&self, _xs: &[&Matrix], _fx: &Matrix, _dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        Err(no_such_argument("ParameterEdge", i, 0))
    }

    fn has_parameters(&self) -> bool {
        true
    }

    fn accumulate_grad(&self, dedf: &Matrix) -> Result<(), HypernetError> {
        self.parameter.accumulate_grad(dedf)
    }

    fn as_string(&self, _arg_names: &[String]) -> String {
        format!("parameters{}", self.parameter.dim())
    }
}

/// Reads a caller-bound [`Input`]. The adjoint of its vertex is left in the
/// gradient table and nowhere else.
#[derive(Debug, Clone)]
pub struct InputEdge {
    input: Input,
}

impl InputEdge {
    pub fn new(input: Input) -> Self {
        InputEdge { input }
    }

    pub fn input(&self) -> &Input {
        &self.input
    }
}

impl Function for InputEdge {
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError> {
        check_arity("InputEdge", xs.len(), 0)?;
        Ok(self.input.dim())
    }

    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError> {
        check_arity("InputEdge", xs.len(), 0)?;
        self.input.value()
    }

    fn backward(&self, _xs: &[&Matrix], _fx: &Matrix, _dedf: &Matrix, i: usize) -> Result<Matrix, HypernetError> {
        Err(no_such_argument("InputEdge", i, 0))
    }

    fn as_string(&self, _arg_names: &[String]) -> String {
        format!("inputs{}", self.input.dim())
    }
}
