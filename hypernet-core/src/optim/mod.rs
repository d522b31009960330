//! Optimizers for training the parameters of a hypergraph.
//!
//! An optimizer holds handles to the [`Parameter`](crate::nn::Parameter)s it
//! updates and reads the gradients a backward pass accumulated into them.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::{SgdConfig, SgdOptimizer};
