/// Validation performed while evaluating a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Compare every matrix an edge returns against the shape inferred at
    /// construction time. Mismatches are reported as `ShapeMismatch`.
    pub check_shapes: bool,
    /// Report `NonFiniteValue` as soon as a NaN or infinity lands in a value
    /// or gradient slot. Off by default: numerical conditions are otherwise
    /// left to the caller.
    pub check_finite: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            check_shapes: true,
            check_finite: false,
        }
    }
}

impl EvalConfig {
    /// No validation at all.
    pub fn unchecked() -> Self {
        EvalConfig {
            check_shapes: false,
            check_finite: false,
        }
    }

    /// Every available check.
    pub fn strict() -> Self {
        EvalConfig {
            check_shapes: true,
            check_finite: true,
        }
    }
}
