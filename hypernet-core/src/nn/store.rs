use crate::dim::Dim;
use crate::error::HypernetError;
use crate::nn::Parameter;
use log::debug;

/// Owns the learnable parameters of a model.
///
/// Graphs only hold handles to parameters, so one store can back many
/// graphs, e.g. one graph per training example.
#[derive(Debug, Default)]
pub struct ParameterStore {
    parameters: Vec<Parameter>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new randomly initialised parameter and returns a handle to it.
    pub fn add_parameters(&mut self, dim: Dim, name: &str) -> Parameter {
        let param = if name.is_empty() {
            Parameter::new(dim)
        } else {
            Parameter::named(dim, name)
        };
        debug!("ParameterStore: added parameter '{}' of dim {}", name, dim);
        self.parameters.push(param.clone());
        param
    }

    /// Registers an existing parameter handle.
    pub fn push(&mut self, param: Parameter) {
        self.parameters.push(param);
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Clears the gradient of every parameter.
    pub fn zero_grad(&self) -> Result<(), HypernetError> {
        for p in &self.parameters {
            p.zero_grad()?;
        }
        Ok(())
    }

    /// Total number of learnable scalars.
    pub fn num_elements(&self) -> usize {
        self.parameters.iter().map(|p| p.dim().size()).sum()
    }
}
