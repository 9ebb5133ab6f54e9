// ============================================================================
// Chain Calc Library
// Chainable arithmetic calculator with pluggable operations
// ============================================================================

//! # Chain Calc
//!
//! A chainable arithmetic calculator: apply a named variadic operation to a
//! sequence of numbers, carry the running result into the next operation,
//! and latch the first error so later calls become no-ops.
//!
//! ## Features
//!
//! - **Pluggable operations** behind an immutable symbol registry
//!   (`+`, `-`, `*`, `/` built in, custom operations via the [`Operation`]
//!   trait)
//! - **Sticky error latching** — the first failure poisons the instance
//!   instead of letting callers compute on garbage
//! - **Read-once results** enabling nested-expression folding
//! - **Event hooks** for logging and metrics on every state transition
//!
//! ## Example
//!
//! ```rust
//! use chain_calc::prelude::*;
//!
//! let mut calc = CalculatorBuilder::new().standard_operations().build();
//!
//! // (2 * 2) + 2, chained left to right
//! calc.apply('*', &[2.0, 2.0]).apply('+', &[2.0]);
//! assert_eq!(calc.result(), 6.0);
//!
//! // An inner chain's result becomes the enclosing operation's operand
//! let inner = calc.apply('*', &[2.0, 2.0]).result();
//! calc.apply('+', &[inner, 2.0]);
//! assert_eq!(calc.result(), 6.0);
//!
//! // The first failure is latched; later calls are no-ops
//! calc.apply('/', &[4.0, 0.0]).apply('+', &[1.0, 1.0]);
//! assert!(calc.result().is_nan());
//! assert!(calc.error().is_some());
//! ```
//!
//! [`Operation`]: crate::interfaces::Operation

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{OperationRegistry, OperationRegistryBuilder};
    pub use crate::engine::{
        standard_registry, Calculator, CalculatorBuilder, Div, Mul, Sub, Sum,
    };
    pub use crate::interfaces::{
        CalcEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, Operation, MIN_OPERANDS,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::{is_invalid, CalcError};

    fn approx(got: f64, want: f64) -> bool {
        (got - want).abs() < 1e-9
    }

    #[test]
    fn test_chained_left_to_right() {
        let mut calc = CalculatorBuilder::new().standard_operations().build();

        // 2 + 2 * 2 without precedence: (2 * 2) + 2
        calc.apply('*', &[2.0, 2.0]).apply('+', &[2.0]);
        assert_eq!(calc.result(), 6.0);

        // (2 + 2) * 2
        calc.apply('+', &[2.0, 2.0]).apply('*', &[2.0]);
        assert_eq!(calc.result(), 8.0);
        assert_eq!(calc.error(), None);
    }

    #[test]
    fn test_nested_subexpressions() {
        let mut calc = CalculatorBuilder::new().standard_operations().build();

        // (2 * 2) + (2 * 2)
        let left = calc.apply('*', &[2.0, 2.0]).result();
        let right = calc.apply('*', &[2.0, 2.0]).result();
        assert_eq!(calc.apply('+', &[left, right]).result(), 8.0);
        assert_eq!(calc.error(), None);
    }

    #[test]
    fn test_long_mixed_expression() {
        let mut calc = CalculatorBuilder::new().standard_operations().build();

        // (4 / 2 / 2) + (15 * 4) - 0.01
        let quotient = calc.apply('/', &[4.0, 2.0, 2.0]).result();
        let product = calc.apply('*', &[15.0, 4.0]).result();
        let got = calc
            .apply('+', &[quotient, product])
            .apply('-', &[0.01])
            .result();
        assert!(approx(got, 60.99));

        // (4 / 2 / 2) + (15 * 4 * 10) - 0.01
        let quotient = calc.apply('/', &[4.0, 2.0, 2.0]).result();
        let product = calc.apply('*', &[15.0, 4.0, 10.0]).result();
        let got = calc
            .apply('+', &[quotient, product])
            .apply('-', &[0.01])
            .result();
        assert!(approx(got, 600.99));
        assert_eq!(calc.error(), None);
    }

    #[test]
    fn test_division_by_zero_poisons_chain() {
        let mut calc = CalculatorBuilder::new().standard_operations().build();

        // (4 / 0 / 2) + (15 * 4) - 0.01
        let quotient = calc.apply('/', &[4.0, 0.0, 2.0]).result();
        assert!(is_invalid(quotient));

        let product = calc.apply('*', &[15.0, 4.0]).result();
        assert!(is_invalid(product));

        let got = calc
            .apply('+', &[quotient, product])
            .apply('-', &[0.01])
            .result();
        assert!(is_invalid(got));
        assert_eq!(calc.error(), Some(CalcError::DivisionByZero));

        // Still latched after all of that
        assert!(is_invalid(calc.apply('+', &[1.0, 1.0]).result()));
        assert_eq!(calc.error(), Some(CalcError::DivisionByZero));
    }

    #[test]
    fn test_unknown_operator_latches() {
        let mut calc = CalculatorBuilder::new().standard_operations().build();
        calc.apply('^', &[1.0, 2.0]);
        assert_eq!(calc.error(), Some(CalcError::UnknownOperation('^')));
        assert!(is_invalid(calc.result()));
    }

    #[test]
    fn test_result_read_once_between_applies() {
        let mut calc = CalculatorBuilder::new().standard_operations().build();
        calc.apply('+', &[1.0, 2.0]);
        assert_eq!(calc.result(), 3.0);
        assert!(is_invalid(calc.result()));
    }
}
