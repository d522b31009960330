//! Matrix initialisers for parameters.

use crate::dim::Dim;
use crate::error::HypernetError;
use crate::matrix::{self, Matrix};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// All-zero matrix, the usual start for biases.
pub fn zeros(dim: Dim) -> Matrix {
    matrix::zeros(dim)
}

/// Entries drawn uniformly from `[-scale, scale]`.
pub fn uniform<R: Rng + ?Sized>(dim: Dim, scale: f64, rng: &mut R) -> Result<Matrix, HypernetError> {
    if !(scale.is_finite() && scale >= 0.0) {
        return Err(HypernetError::InvalidArgument(format!(
            "uniform init scale must be finite and non-negative, got {}",
            scale
        )));
    }
    let dist = Uniform::new_inclusive(-scale, scale);
    Ok(Matrix::from_shape_fn((dim.rows(), dim.cols()), |_| dist.sample(rng)))
}

/// Entries drawn from `N(mean, std^2)`.
pub fn normal<R: Rng + ?Sized>(dim: Dim, mean: f64, std: f64, rng: &mut R) -> Result<Matrix, HypernetError> {
    let dist = Normal::new(mean, std).map_err(|e| {
        HypernetError::InvalidArgument(format!("normal init with std {}: {}", std, e))
    })?;
    Ok(Matrix::from_shape_fn((dim.rows(), dim.cols()), |_| dist.sample(rng)))
}

/// Glorot-style uniform init: scale `sqrt(6 / (rows + cols))`.
pub fn xavier_uniform<R: Rng + ?Sized>(dim: Dim, rng: &mut R) -> Result<Matrix, HypernetError> {
    let scale = (6.0 / (dim.rows() + dim.cols()) as f64).sqrt();
    uniform(dim, scale, rng)
}
