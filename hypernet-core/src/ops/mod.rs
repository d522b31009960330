//! # Concrete functions (`ops`)
//!
//! Every type here implements [`Function`](crate::autograd::Function) and can
//! be placed on a hyperedge with
//! [`Hypergraph::add_function`](crate::graph::Hypergraph::add_function) or,
//! for configured ones, `add_function_with`.
//!
//! - [`source`]: zero-arity parameter and input edges.
//! - [`arithmetic`]: identity, sums, negation, element-wise products.
//! - [`linalg`]: matrix multiplication and transposition.
//! - [`activation`]: tanh, logistic sigmoid, rectifier.
//! - [`math_elem`]: element-wise exp, log, square.
//! - [`reduction`]: sum of all elements.
//! - [`loss`]: squared distance and the softmax family.
//! - [`view`]: concatenation and 1-D max pooling.

use crate::autograd::check_arity;
use crate::dim::Dim;
use crate::error::HypernetError;

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod loss;
pub mod math_elem;
pub mod reduction;
pub mod source;
pub mod view;

pub use activation::{LogisticSigmoid, Rectify, Tanh};
pub use arithmetic::{ConstantMinusX, CwiseMultiply, Identity, Negate, Sum};
pub use linalg::{MatrixMultiply, Transpose};
pub use loss::{LogSoftmax, PickNegLogSoftmax, Softmax, SquaredDistance};
pub use math_elem::{Exp, Log, Square};
pub use reduction::SumElements;
pub use source::{InputEdge, ParameterEdge};
pub use view::{Concatenate, MaxPooling1D};

/// Shape rule shared by element-wise unary functions: one argument, same shape out.
pub(crate) fn unary_dim(operation: &str, xs: &[Dim]) -> Result<Dim, HypernetError> {
    check_arity(operation, xs.len(), 1)?;
    Ok(xs[0])
}

/// Error for a `backward` call naming an argument the function does not have.
pub(crate) fn no_such_argument(operation: &str, i: usize, arity: usize) -> HypernetError {
    HypernetError::InvalidArgument(format!(
        "{} has no argument {} (arity {})",
        operation, i, arity
    ))
}

/// Fails unless `dim` is a column vector.
pub(crate) fn check_column(operation: &str, dim: Dim) -> Result<(), HypernetError> {
    if dim.cols() != 1 {
        return Err(HypernetError::ShapeMismatch {
            expected: Dim::vector(dim.rows() as u16),
            actual: dim,
            operation: operation.to_string(),
        });
    }
    Ok(())
}
