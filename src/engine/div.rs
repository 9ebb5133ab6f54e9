// ============================================================================
// Div Operation
// Left-to-right division fold with zero-divisor detection
// ============================================================================

use crate::interfaces::{Operation, MIN_OPERANDS};
use crate::numeric::{normalize_zero, CalcError, CalcResult, Number};

/// Division over an operand sequence
///
/// Folds left to right: `div(a, b, c)` is `(a / b) / c`. Evaluation stops
/// with [`CalcError::DivisionByZero`] as soon as a zero divisor is seen;
/// a zero *first* operand is fine. A `-0.0` final result is collapsed to
/// `0.0` so IEEE-754 signed-zero artifacts never reach callers.
pub struct Div;

impl Operation for Div {
    fn perform(&self, operands: &[Number]) -> CalcResult<Number> {
        if operands.len() < MIN_OPERANDS {
            return Err(CalcError::InsufficientOperands(operands.len()));
        }

        let mut result = operands[0];
        for &divisor in &operands[1..] {
            if divisor == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            result /= divisor;
        }

        Ok(normalize_zero(result))
    }

    fn name(&self) -> &str {
        "div"
    }
}
