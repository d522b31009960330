use crate::autograd::Function;
use crate::error::HypernetError;
use crate::graph::Hypergraph;
use crate::matrix::Matrix;
use crate::nn::Parameter;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element ({row},{col}): analytical {analytical_grad:?} != numerical {numerical_grad:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        row: usize,
        col: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}, element ({row},{col}). Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        row: usize,
        col: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient for input {input_index} has shape {actual:?}, expected {expected:?}")]
    GradientShapeMismatch {
        input_index: usize,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Upstream gradient has shape {actual:?} but the function output is {expected:?}")]
    OutputGradShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Engine error during gradient check: {0}")]
    EngineError(HypernetError),
}

impl From<HypernetError> for GradCheckError {
    fn from(err: HypernetError) -> Self {
        GradCheckError::EngineError(err)
    }
}

/// Checks a function's per-argument `backward` against central differences.
///
/// The scalar probed is the weighted loss \( L(xs) = \sum dE/df \odot f(xs) \),
/// whose exact gradient with respect to `xs[i]` is `backward(xs, fx, dedf, i)`.
/// Every element of every input is perturbed by `±epsilon`.
///
/// A difference is accepted when it is within `tolerance` either absolutely
/// or relative to the analytical value.
pub fn check_function_grad<F>(
    function: &F,
    inputs: &[Matrix],
    output_grad: &Matrix,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Function + ?Sized,
{
    let xs: Vec<&Matrix> = inputs.iter().collect();
    let fx = function.forward(&xs)?;
    if fx.dim() != output_grad.dim() {
        return Err(GradCheckError::OutputGradShapeMismatch {
            expected: fx.dim(),
            actual: output_grad.dim(),
        });
    }

    for (i, input) in inputs.iter().enumerate() {
        let analytical = function.backward(&xs, &fx, output_grad, i)?;
        if analytical.dim() != input.dim() {
            return Err(GradCheckError::GradientShapeMismatch {
                input_index: i,
                expected: input.dim(),
                actual: analytical.dim(),
            });
        }

        for ((row, col), &original) in input.indexed_iter() {
            let mut perturbed: Vec<Matrix> = inputs.to_vec();

            perturbed[i][[row, col]] = original + epsilon;
            let loss_plus = weighted_loss(function, &perturbed, output_grad)?;

            perturbed[i][[row, col]] = original - epsilon;
            let loss_minus = weighted_loss(function, &perturbed, output_grad)?;

            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    row,
                    col,
                    loss_plus,
                    loss_minus,
                });
            }
            compare(i, row, col, analytical[[row, col]], numerical_grad, epsilon, tolerance)?;
        }
    }
    Ok(())
}

/// Checks the gradients a full forward/backward pass accumulates into
/// `parameters` against central differences of the graph output.
///
/// The graph output must be a `(1,1)` scalar. Parameter gradients are
/// cleared first; on success they hold the analytical gradients. Parameter
/// values are restored whether or not the check succeeds.
pub fn check_parameter_grad(
    graph: &Hypergraph,
    parameters: &[Parameter],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    for p in parameters {
        p.zero_grad()?;
    }
    graph.forward()?.backward()?;

    for (i, param) in parameters.iter().enumerate() {
        let analytical = param.grad()?;
        let values = param.value()?;

        for ((row, col), &original) in values.indexed_iter() {
            let perturbed = central_losses(graph, param, row, col, original, epsilon);
            param.update_with(|m| m[[row, col]] = original)?;
            let (loss_plus, loss_minus) = perturbed?;

            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    row,
                    col,
                    loss_plus,
                    loss_minus,
                });
            }
            compare(i, row, col, analytical[[row, col]], numerical_grad, epsilon, tolerance)?;
        }
    }
    Ok(())
}

/// Graph outputs with entry `(row, col)` of `param` set to `original ± epsilon`.
/// Leaves the entry perturbed; the caller restores it.
fn central_losses(
    graph: &Hypergraph,
    param: &Parameter,
    row: usize,
    col: usize,
    original: f64,
    epsilon: f64,
) -> Result<(f64, f64), GradCheckError> {
    param.update_with(|m| m[[row, col]] = original + epsilon)?;
    let loss_plus = graph.forward()?.output()[[0, 0]];

    param.update_with(|m| m[[row, col]] = original - epsilon)?;
    let loss_minus = graph.forward()?.output()[[0, 0]];
    Ok((loss_plus, loss_minus))
}

fn weighted_loss<F>(function: &F, inputs: &[Matrix], output_grad: &Matrix) -> Result<f64, GradCheckError>
where
    F: Function + ?Sized,
{
    let xs: Vec<&Matrix> = inputs.iter().collect();
    let fx = function.forward(&xs)?;
    Ok((&fx * output_grad).sum())
}

fn compare(
    input_index: usize,
    row: usize,
    col: usize,
    analytical_grad: f64,
    numerical_grad: f64,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    let difference = (analytical_grad - numerical_grad).abs();
    if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
        return Err(GradCheckError::GradientMismatch {
            input_index,
            row,
            col,
            analytical_grad,
            numerical_grad,
            difference,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
