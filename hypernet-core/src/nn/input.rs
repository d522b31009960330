use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::{self, Matrix};
use std::sync::{Arc, RwLock};

/// A caller-supplied value fed into a hypergraph.
///
/// Clones share the same binding, so the caller keeps one handle, rebinds
/// it between passes with [`Input::set`], and the graph's input edge sees
/// the new contents on its next forward pass.
#[derive(Debug, Clone)]
pub struct Input {
    dim: Dim,
    value: Arc<RwLock<Matrix>>,
}

impl Input {
    /// An input of shape `dim` bound to zeros.
    pub fn new(dim: Dim) -> Self {
        Input {
            dim,
            value: Arc::new(RwLock::new(matrix::zeros(dim))),
        }
    }

    /// An input whose shape and initial contents come from `value`.
    pub fn from_matrix(value: Matrix) -> Result<Self, HypernetError> {
        let dim = Dim::of(&value)?;
        Ok(Input {
            dim,
            value: Arc::new(RwLock::new(value)),
        })
    }

    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Rebinds the input. The new value must keep the input's shape.
    pub fn set(&self, value: Matrix) -> Result<(), HypernetError> {
        if !self.dim.matches(&value) {
            return Err(HypernetError::ShapeMismatch {
                expected: self.dim,
                actual: Dim::of(&value)?,
                operation: "Input::set".to_string(),
            });
        }
        let mut guard = self.value.write().map_err(|e| HypernetError::LockError {
            lock_type: "write".to_string(),
            reason: format!("Input binding poisoned: {}", e),
        })?;
        *guard = value;
        Ok(())
    }

    /// A copy of the currently bound value.
    pub fn value(&self) -> Result<Matrix, HypernetError> {
        let guard = self.value.read().map_err(|e| HypernetError::LockError {
            lock_type: "read".to_string(),
            reason: format!("Input binding poisoned: {}", e),
        })?;
        Ok(guard.clone())
    }
}
