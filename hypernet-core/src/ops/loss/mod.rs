//! Loss functions and the softmax family. The softmax variants operate on
//! column vectors.

use crate::matrix::Matrix;

pub mod log_softmax;
pub mod pick_neg_log_softmax;
pub mod softmax;
pub mod squared_distance;

pub use log_softmax::LogSoftmax;
pub use pick_neg_log_softmax::PickNegLogSoftmax;
pub use softmax::Softmax;
pub use squared_distance::SquaredDistance;

/// `log Σ exp(x)`, shifted by the maximum for stability.
pub(crate) fn log_sum_exp(x: &Matrix) -> f64 {
    let m = x.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    if !m.is_finite() {
        return m;
    }
    m + x.fold(0.0, |acc, &v| acc + (v - m).exp()).ln()
}

/// `exp(x) / Σ exp(x)`.
pub(crate) fn softmax(x: &Matrix) -> Matrix {
    let lse = log_sum_exp(x);
    x.mapv(|v| (v - lse).exp())
}
