//! Matrix type and shape-driven constructors.

use crate::dim::Dim;
use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Dense `f64` matrix used for every value and gradient in the engine.
pub type Matrix = Array2<f64>;

/// Half-width of the uniform range used for parameter initialisation.
pub const INIT_SCALE: f64 = 0.08;

/// An all-zeros matrix of shape `dim`.
pub fn zeros(dim: Dim) -> Matrix {
    Matrix::zeros((dim.rows(), dim.cols()))
}

/// A matrix of shape `dim` filled with `value`.
pub fn full(dim: Dim, value: f64) -> Matrix {
    Matrix::from_elem((dim.rows(), dim.cols()), value)
}

/// A `(1,1)` matrix holding `value`.
pub fn scalar(value: f64) -> Matrix {
    full(Dim::default(), value)
}

/// A matrix with entries drawn uniformly from `[-INIT_SCALE, INIT_SCALE]`.
pub fn random(dim: Dim) -> Matrix {
    random_with(dim, &mut rand::thread_rng())
}

/// Like [`random`], drawing from a caller-supplied generator.
pub fn random_with<R: Rng + ?Sized>(dim: Dim, rng: &mut R) -> Matrix {
    let dist = Uniform::new_inclusive(-INIT_SCALE, INIT_SCALE);
    Matrix::from_shape_fn((dim.rows(), dim.cols()), |_| dist.sample(rng))
}

/// Shape of `matrix` as a `Dim`, or `None` if it does not fit the 16-bit limit.
pub fn dim_of(matrix: &Matrix) -> Option<Dim> {
    Dim::of(matrix).ok()
}
