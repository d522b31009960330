use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::{self, Matrix};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct ParameterData {
    values: Matrix,
    grad: Matrix,
}

/// A learnable matrix together with its accumulated gradient.
///
/// `Parameter` is a cheap shared handle: clones refer to the same storage.
/// A hypergraph reads the current values at forward time and adds the
/// adjoint of the parameter's vertex into `grad` at backward time. The
/// shape is fixed at creation.
#[derive(Clone)]
pub struct Parameter {
    dim: Dim,
    name: Option<String>,
    data: Arc<RwLock<ParameterData>>,
}

impl Parameter {
    /// Creates a parameter of shape `dim` initialised uniformly in `[-0.08, 0.08]`.
    pub fn new(dim: Dim) -> Self {
        Self::with_values(dim, matrix::random(dim), None)
    }

    /// Creates a named parameter initialised uniformly in `[-0.08, 0.08]`.
    pub fn named(dim: Dim, name: impl Into<String>) -> Self {
        Self::with_values(dim, matrix::random(dim), Some(name.into()))
    }

    /// Wraps existing values.
    pub fn from_matrix(values: Matrix) -> Result<Self, HypernetError> {
        let dim = Dim::of(&values)?;
        Ok(Self::with_values(dim, values, None))
    }

    fn with_values(dim: Dim, values: Matrix, name: Option<String>) -> Self {
        Parameter {
            dim,
            name,
            data: Arc::new(RwLock::new(ParameterData {
                values,
                grad: matrix::zeros(dim),
            })),
        }
    }

    pub fn dim(&self) -> Dim {
        self.dim
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// A copy of the current values.
    pub fn value(&self) -> Result<Matrix, HypernetError> {
        Ok(self.read()?.values.clone())
    }

    /// A copy of the accumulated gradient.
    pub fn grad(&self) -> Result<Matrix, HypernetError> {
        Ok(self.read()?.grad.clone())
    }

    /// Adds `delta` into the accumulated gradient.
    pub fn accumulate_grad(&self, delta: &Matrix) -> Result<(), HypernetError> {
        if !self.dim.matches(delta) {
            return Err(HypernetError::ShapeMismatch {
                expected: self.dim,
                actual: Dim::of(delta)?,
                operation: "Parameter::accumulate_grad".to_string(),
            });
        }
        let mut guard = self.write()?;
        guard.grad += delta;
        Ok(())
    }

    /// Resets the accumulated gradient to zeros.
    pub fn zero_grad(&self) -> Result<(), HypernetError> {
        self.write()?.grad.fill(0.0);
        Ok(())
    }

    /// Replaces the values. The shape must stay the same.
    pub fn set_value(&self, values: Matrix) -> Result<(), HypernetError> {
        if !self.dim.matches(&values) {
            return Err(HypernetError::ShapeMismatch {
                expected: self.dim,
                actual: Dim::of(&values)?,
                operation: "Parameter::set_value".to_string(),
            });
        }
        self.write()?.values = values;
        Ok(())
    }

    /// Mutates the values in place.
    pub fn update_with<F>(&self, f: F) -> Result<(), HypernetError>
    where
        F: FnOnce(&mut Matrix),
    {
        let mut guard = self.write()?;
        f(&mut guard.values);
        Ok(())
    }

    /// Runs `f` on the values and the gradient together, as an optimizer step does.
    pub fn update_with_grad<F>(&self, f: F) -> Result<(), HypernetError>
    where
        F: FnOnce(&mut Matrix, &Matrix),
    {
        let mut guard = self.write()?;
        let ParameterData { values, grad } = &mut *guard;
        f(values, grad);
        Ok(())
    }

    /// True when both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &Parameter) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ParameterData>, HypernetError> {
        self.data.read().map_err(|e| HypernetError::LockError {
            lock_type: "read".to_string(),
            reason: format!("Parameter storage poisoned: {}", e),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ParameterData>, HypernetError> {
        self.data.write().map_err(|e| HypernetError::LockError {
            lock_type: "write".to_string(),
            reason: format!("Parameter storage poisoned: {}", e),
        })
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("dim", &self.dim)
            .finish()
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
