// ============================================================================
// Sub Operation
// Left-to-right subtraction fold
// ============================================================================

use crate::interfaces::{Operation, MIN_OPERANDS};
use crate::numeric::{CalcError, CalcResult, Number};

/// Subtraction over an operand sequence
///
/// Folds left to right: `sub(a, b, c)` is `(a - b) - c`.
pub struct Sub;

impl Operation for Sub {
    fn perform(&self, operands: &[Number]) -> CalcResult<Number> {
        if operands.len() < MIN_OPERANDS {
            return Err(CalcError::InsufficientOperands(operands.len()));
        }

        Ok(operands[1..].iter().fold(operands[0], |acc, n| acc - n))
    }

    fn name(&self) -> &str {
        "sub"
    }
}
