// ============================================================================
// Calculation Errors
// Error types for operation lookup and evaluation
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while applying calculator operations.
///
/// Every variant is terminal for the calculator instance that latches it:
/// there is no recovery path other than constructing a new calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Requested operation symbol is not present in the registry
    UnknownOperation(char),
    /// Fewer than two operands supplied; carries the count received
    InsufficientOperands(usize),
    /// A divisor of zero was encountered during a division fold
    DivisionByZero,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::UnknownOperation(symbol) => {
                write!(f, "unknown operation: '{}'", symbol)
            },
            CalcError::InsufficientOperands(count) => {
                write!(f, "not enough operands: got {}, need at least 2", count)
            },
            CalcError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for operation evaluation
pub type CalcResult<T> = Result<T, CalcError>;
