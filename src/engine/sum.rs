// ============================================================================
// Sum Operation
// Left-to-right addition fold
// ============================================================================

use crate::interfaces::{Operation, MIN_OPERANDS};
use crate::numeric::{CalcError, CalcResult, Number};

/// Addition over an operand sequence
///
/// Folds left to right starting from the first operand.
///
/// # Example
/// ```
/// use chain_calc::engine::Sum;
/// use chain_calc::interfaces::Operation;
///
/// assert_eq!(Sum.perform(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
/// ```
pub struct Sum;

impl Operation for Sum {
    fn perform(&self, operands: &[Number]) -> CalcResult<Number> {
        if operands.len() < MIN_OPERANDS {
            return Err(CalcError::InsufficientOperands(operands.len()));
        }

        Ok(operands[1..].iter().fold(operands[0], |acc, n| acc + n))
    }

    fn name(&self) -> &str {
        "sum"
    }
}
