// ============================================================================
// Mul Operation
// Left-to-right multiplication fold
// ============================================================================

use crate::interfaces::{Operation, MIN_OPERANDS};
use crate::numeric::{CalcError, CalcResult, Number};

/// Multiplication over an operand sequence
///
/// Folds left to right starting from the first operand.
pub struct Mul;

impl Operation for Mul {
    fn perform(&self, operands: &[Number]) -> CalcResult<Number> {
        if operands.len() < MIN_OPERANDS {
            return Err(CalcError::InsufficientOperands(operands.len()));
        }

        Ok(operands[1..].iter().fold(operands[0], |acc, n| acc * n))
    }

    fn name(&self) -> &str {
        "mul"
    }
}
