//! Shape descriptor for the matrices flowing through a hypergraph.

use crate::error::HypernetError;
use crate::matrix::Matrix;
use std::fmt;
use std::ops::Mul;

/// The shape of a matrix value, `(rows, cols)`.
///
/// Each axis is stored in 16 bits, so no dimension may exceed
/// `u16::MAX` (65,535). Use [`Dim::try_new`] when the extents come from
/// runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dim {
    rows: u16,
    cols: u16,
}

impl Default for Dim {
    /// A `(1,1)` scalar.
    fn default() -> Self {
        Dim { rows: 1, cols: 1 }
    }
}

impl Dim {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Dim { rows, cols }
    }

    /// A column vector `(rows,1)`.
    pub const fn vector(rows: u16) -> Self {
        Dim { rows, cols: 1 }
    }

    /// Builds a `Dim` from `usize` extents, rejecting anything above the 16-bit limit.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, HypernetError> {
        match (u16::try_from(rows), u16::try_from(cols)) {
            (Ok(r), Ok(c)) => Ok(Dim { rows: r, cols: c }),
            _ => Err(HypernetError::DimensionOverflow { rows, cols }),
        }
    }

    /// The shape of an existing matrix.
    pub fn of(matrix: &Matrix) -> Result<Self, HypernetError> {
        Dim::try_new(matrix.nrows(), matrix.ncols())
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn transpose(&self) -> Dim {
        Dim {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Shape of the matrix product `self * rhs`, or `IncompatibleDims` when
    /// `self.cols != rhs.rows`.
    pub fn checked_mul(&self, rhs: Dim) -> Result<Dim, HypernetError> {
        if self.cols != rhs.rows {
            return Err(HypernetError::IncompatibleDims {
                left: *self,
                right: rhs,
                operation: "Dim * Dim".to_string(),
            });
        }
        Ok(Dim {
            rows: self.rows,
            cols: rhs.cols,
        })
    }

    /// True when `matrix` has exactly this shape.
    pub fn matches(&self, matrix: &Matrix) -> bool {
        matrix.nrows() == self.rows() && matrix.ncols() == self.cols()
    }
}

impl Mul for Dim {
    type Output = Dim;

    /// # Panics
    /// Panics when `self.cols != rhs.rows`.
    fn mul(self, rhs: Dim) -> Dim {
        assert_eq!(
            self.cols, rhs.rows,
            "Dim product requires lhs.cols == rhs.rows, got {} * {}",
            self, rhs
        );
        Dim {
            rows: self.rows,
            cols: rhs.cols,
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.rows, self.cols)
    }
}

#[cfg(test)]
#[path = "dim_test.rs"]
mod tests;
