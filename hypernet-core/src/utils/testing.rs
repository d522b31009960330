//! Assertion and fixture helpers shared by unit and integration tests.

use crate::dim::Dim;
use crate::matrix::Matrix;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Asserts that two matrices have the same shape and are element-wise within `tolerance`.
///
/// Panics with the offending position otherwise.
pub fn check_matrix_near(actual: &Matrix, expected: &Matrix, tolerance: f64) {
    assert_eq!(actual.dim(), expected.dim(), "Shape mismatch");
    for ((idx, a), e) in actual.indexed_iter().zip(expected.iter()) {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Data mismatch at {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                idx, a, e, diff, tolerance
            );
        }
    }
}

/// A matrix of shape `dim` with entries uniform in `[low, high]`, reproducible from `seed`.
pub fn random_matrix(dim: Dim, low: f64, high: f64, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new_inclusive(low, high);
    Matrix::from_shape_fn((dim.rows(), dim.cols()), |_| dist.sample(&mut rng))
}
