use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::Matrix;
use std::fmt::Debug;

/// A differentiable function of zero or more matrices: the payload of a hyperedge.
///
/// The engine only ever talks to concrete functions (matrix multiply,
/// nonlinearities, losses, parameter and input sources) through this trait,
/// so it never needs to know which one it is evaluating.
///
/// Implementations must not keep hidden state between `forward` and
/// `backward`. Everything `backward` needs is passed back in: the forward
/// inputs, the forward output and the incoming adjoint. Anything a function
/// would like to cache has to be re-derived from those arguments.
///
/// The trait requires `Debug + Send + Sync` so a constructed graph can be
/// shared and evaluated from several threads against different bindings.
pub trait Function: Debug + Send + Sync {
    /// Infers the output shape from the argument shapes.
    ///
    /// Called once when the edge is added to a graph, which is where arity
    /// and shape errors surface. The result must depend only on `xs` and the
    /// function's own configuration.
    fn dim_forward(&self, xs: &[Dim]) -> Result<Dim, HypernetError>;

    /// Computes \( f(x_1, ..., x_n) \).
    ///
    /// `xs` holds the already computed values of the edge's tail vertices,
    /// in tail order. Its length equals the edge's arity.
    fn forward(&self, xs: &[&Matrix]) -> Result<Matrix, HypernetError>;

    /// Computes the contribution to \( \frac{dE}{dx_i} \) flowing through this function.
    ///
    /// # Arguments
    /// * `xs`: the same inputs given to `forward`.
    /// * `fx`: the value `forward` produced for them.
    /// * `dedf`: \( \frac{dE}{df} \), the adjoint of the output. Same shape as `fx`.
    /// * `i`: argument index in `[0, xs.len())`.
    ///
    /// # Returns
    /// `dedf` pulled back through \( \frac{\partial f}{\partial x_i} \). The
    /// result must have the shape of `xs[i]`.
    fn backward(
        &self,
        xs: &[&Matrix],
        fx: &Matrix,
        dedf: &Matrix,
        i: usize,
    ) -> Result<Matrix, HypernetError>;

    /// Whether this function owns learnable parameters.
    fn has_parameters(&self) -> bool {
        false
    }

    /// Receives the final adjoint of the vertex this function defines.
    ///
    /// Only called for functions reporting `has_parameters()`, once per
    /// backward pass, after every downstream contribution has been summed.
    /// Parameter sources use it to route the gradient into their store.
    fn accumulate_grad(&self, _dedf: &Matrix) -> Result<(), HypernetError> {
        Ok(())
    }

    /// Short textual form over the display names of the arguments.
    fn as_string(&self, arg_names: &[String]) -> String;
}

/// Fails with `ArityMismatch` unless exactly `expected` arguments were given.
pub fn check_arity(operation: &str, actual: usize, expected: usize) -> Result<(), HypernetError> {
    if actual != expected {
        return Err(HypernetError::ArityMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Fails with `ShapeMismatch` unless every shape equals the first one.
/// Returns that shared shape.
pub fn check_same_dims(operation: &str, xs: &[Dim]) -> Result<Dim, HypernetError> {
    let first = *xs.first().ok_or_else(|| HypernetError::ArityMismatch {
        expected: 1,
        actual: 0,
        operation: operation.to_string(),
    })?;
    for d in &xs[1..] {
        if *d != first {
            return Err(HypernetError::ShapeMismatch {
                expected: first,
                actual: *d,
                operation: operation.to_string(),
            });
        }
    }
    Ok(first)
}
