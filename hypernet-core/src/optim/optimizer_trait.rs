use crate::error::HypernetError;

/// Common interface of all optimizers.
pub trait Optimizer {
    /// Updates every managed parameter from its accumulated gradient.
    fn step(&mut self) -> Result<(), HypernetError>;

    /// Clears the gradients of all managed parameters.
    ///
    /// Gradients add up across backward passes, so this is called once per
    /// training iteration before the next backward pass.
    fn zero_grad(&mut self) -> Result<(), HypernetError>;
}
