//! Element-wise nonlinearities.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use relu::Rectify;
pub use sigmoid::LogisticSigmoid;
pub use tanh::Tanh;
