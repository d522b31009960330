use crate::error::HypernetError;
use crate::matrix::Matrix;
use crate::nn::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use log::{debug, trace};

/// Hyperparameters of [`SgdOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    pub learning_rate: f64,
    /// Momentum factor. `0.0` disables momentum.
    pub momentum: f64,
    /// L2 penalty added to the gradient as `weight_decay * value`.
    pub weight_decay: f64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            learning_rate: 0.1,
            momentum: 0.0,
            weight_decay: 0.0,
        }
    }
}

impl SgdConfig {
    pub fn with_learning_rate(learning_rate: f64) -> Self {
        SgdConfig {
            learning_rate,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), HypernetError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(HypernetError::InvalidArgument(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if !self.momentum.is_finite() || self.momentum < 0.0 {
            return Err(HypernetError::InvalidArgument(format!(
                "momentum must be non-negative and finite, got {}",
                self.momentum
            )));
        }
        if !self.weight_decay.is_finite() || self.weight_decay < 0.0 {
            return Err(HypernetError::InvalidArgument(format!(
                "weight decay must be non-negative and finite, got {}",
                self.weight_decay
            )));
        }
        Ok(())
    }
}

/// Stochastic gradient descent with optional momentum and weight decay.
///
/// For each parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d        (when momentum != 0)
/// p = p - learning_rate * v   (or d without momentum)
/// ```
///
/// Momentum buffers are created lazily, one per parameter, on the first step.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    config: SgdConfig,
    momentum_buffers: Vec<Option<Matrix>>,
    steps: usize,
}

impl SgdOptimizer {
    pub fn new(
        params: impl IntoIterator<Item = Parameter>,
        config: SgdConfig,
    ) -> Result<Self, HypernetError> {
        config.validate()?;
        let params: Vec<Parameter> = params.into_iter().collect();
        debug!(
            "SgdOptimizer: {} parameters, lr={}, momentum={}, weight_decay={}",
            params.len(),
            config.learning_rate,
            config.momentum,
            config.weight_decay
        );
        let momentum_buffers = vec![None; params.len()];
        Ok(SgdOptimizer {
            params,
            config,
            momentum_buffers,
            steps: 0,
        })
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<(), HypernetError> {
        let config = SgdConfig {
            learning_rate,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Number of completed steps.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), HypernetError> {
        let SgdConfig {
            learning_rate,
            momentum,
            weight_decay,
        } = self.config;

        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            param.update_with_grad(|values, grad| {
                let mut d_p = grad.clone();
                if weight_decay != 0.0 {
                    d_p.scaled_add(weight_decay, values);
                }
                let update = if momentum != 0.0 {
                    let v = buffer.get_or_insert_with(|| Matrix::zeros(d_p.raw_dim()));
                    *v *= momentum;
                    *v += &d_p;
                    v.clone()
                } else {
                    d_p
                };
                values.scaled_add(-learning_rate, &update);
            })?;
            trace!("SgdOptimizer: updated parameter {:?}", param.name());
        }

        self.steps += 1;
        Ok(())
    }

    fn zero_grad(&mut self) -> Result<(), HypernetError> {
        for param in &self.params {
            param.zero_grad()?;
        }
        Ok(())
    }
}
