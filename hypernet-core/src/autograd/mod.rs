//! The differentiable-function contract implemented by every hyperedge, and
//! tooling to verify implementations numerically.

pub mod function;
pub mod grad_check;

pub use function::{check_arity, check_same_dims, Function};
pub use grad_check::{check_function_grad, check_parameter_grad, GradCheckError};
