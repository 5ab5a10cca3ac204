//! Error types for polynomial construction and arithmetic.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`PolyError`].
pub type Result<T> = std::result::Result<T, PolyError>;

/// Identifies which required input was absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The coefficient sequence handed to a constructor.
    Coefficients,
    /// Left-hand side operand.
    Lhs,
    /// Right-hand side operand.
    Rhs,
    /// Both operands.
    Both,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand::Coefficients => "coefficients",
            Operand::Lhs => "left-hand side operand",
            Operand::Rhs => "right-hand side operand",
            Operand::Both => "both operands",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when building or combining polynomials.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// A required input was not provided.
    #[error("{side} cannot be null")]
    NullOperand {
        /// The missing input.
        side: Operand,
    },

    /// The coefficient sequence was empty.
    #[error("coefficients cannot be empty")]
    EmptyInput,

    /// Coefficient index outside `[0, degree]`.
    #[error("index {index} is out of range for a polynomial of degree {degree}")]
    IndexOutOfRange {
        /// The requested index.
        index: isize,
        /// Degree of the polynomial.
        degree: usize,
    },

    /// A tolerance that is negative or NaN.
    #[error("invalid tolerance {0}: must be a non-negative number")]
    InvalidTolerance(f64),
}

impl PolyError {
    /// Returns true if this error reports an absent input.
    #[must_use]
    pub fn is_null_operand(&self) -> bool {
        matches!(self, PolyError::NullOperand { .. })
    }
}
