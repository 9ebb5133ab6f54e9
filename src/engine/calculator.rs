// ============================================================================
// Calculator
// Chainable accumulator with sticky error latching
// ============================================================================

use crate::domain::OperationRegistry;
use crate::interfaces::{CalcEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{is_invalid, CalcError, Number, INVALID};
use chrono::Utc;
use smallvec::SmallVec;
use std::sync::Arc;

/// Stack capacity for the folded operand buffer; typical chains pass a
/// handful of operands, so folding stays heap-free.
const OPERAND_BUF: usize = 8;

/// Stateful accumulator over a registry of operations.
///
/// Each [`apply`](Calculator::apply) folds the pending result (if any) into
/// the supplied operands, evaluates the named operation, and stores the
/// outcome. The first failure is latched for the lifetime of the instance:
/// once [`error`](Calculator::error) is `Some`, every further `apply` is a
/// no-op that leaves the result at the invalid sentinel. There is no reset;
/// recovering from a failure means constructing a new calculator.
///
/// [`result`](Calculator::result) is a destructive read: it hands back the
/// pending value and clears it, which is what lets an inner chain's result
/// become the first operand of an enclosing one.
///
/// A calculator mutates through `&mut self` and is intended for
/// single-threaded use; sharing one across threads requires external
/// synchronization.
///
/// # Example
/// ```
/// use chain_calc::engine::{standard_registry, Calculator};
///
/// let mut calc = Calculator::new(standard_registry());
/// calc.apply('*', &[2.0, 2.0]).apply('+', &[2.0]);
/// assert_eq!(calc.result(), 6.0);
/// assert!(calc.error().is_none());
/// ```
pub struct Calculator {
    /// Symbol-to-operation lookup, immutable after construction
    registry: OperationRegistry,

    /// Pending result; the invalid sentinel when empty or consumed
    result: Number,

    /// First failure encountered, if any
    error: Option<CalcError>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a calculator over `registry` with no event handling
    pub fn new(registry: OperationRegistry) -> Self {
        Self::with_event_handler(registry, Arc::new(NoOpEventHandler))
    }

    /// Create a calculator that reports state transitions to `event_handler`
    pub fn with_event_handler(
        registry: OperationRegistry,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            registry,
            result: INVALID,
            error: None,
            event_handler,
        }
    }

    /// Apply the operation registered for `symbol` to `operands`
    ///
    /// A pending (unread) result is prepended as the first operand. Unknown
    /// symbols and operation failures latch the error; a latched error
    /// short-circuits the call without invoking any operation. Either way
    /// the stored result never goes stale: it is the fresh value on
    /// success and the invalid sentinel otherwise.
    ///
    /// Returns `&mut self` so calls can be chained.
    pub fn apply(&mut self, symbol: char, operands: &[Number]) -> &mut Self {
        if let Some(latched) = self.error {
            self.result = INVALID;
            self.event_handler.on_event(CalcEvent::OperationSkipped {
                symbol,
                latched,
                timestamp: Utc::now(),
            });
            return self;
        }

        let mut folded: SmallVec<[Number; OPERAND_BUF]> = SmallVec::new();
        if !is_invalid(self.result) {
            folded.push(self.result);
        }
        folded.extend_from_slice(operands);

        let outcome = match self.registry.get(symbol) {
            Some(op) => op.perform(&folded),
            None => Err(CalcError::UnknownOperation(symbol)),
        };

        match outcome {
            Ok(value) => {
                self.result = value;
                self.event_handler.on_event(CalcEvent::OperationApplied {
                    symbol,
                    operand_count: folded.len(),
                    result: value,
                    timestamp: Utc::now(),
                });
            },
            Err(error) => {
                self.result = INVALID;
                self.error = Some(error);
                self.event_handler.on_event(CalcEvent::OperationFailed {
                    symbol,
                    error,
                    timestamp: Utc::now(),
                });
            },
        }

        self
    }

    /// Read the pending result, clearing it
    ///
    /// Returns the invalid sentinel while an error is latched, and on any
    /// second read without an intervening [`apply`](Calculator::apply).
    pub fn result(&mut self) -> Number {
        let value = if self.error.is_some() {
            INVALID
        } else {
            self.result
        };
        self.result = INVALID;

        self.event_handler.on_event(CalcEvent::ResultConsumed {
            value,
            timestamp: Utc::now(),
        });

        value
    }

    /// Read the latched error, if any (repeatable, non-destructive)
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Whether a failure has been latched
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Access the operation registry
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }
}
