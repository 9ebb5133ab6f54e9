// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator state transitions
// ============================================================================

use crate::numeric::{CalcError, Number};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcEvent {
    /// An operation was looked up and evaluated successfully
    OperationApplied {
        symbol: char,
        operand_count: usize,
        result: Number,
        timestamp: DateTime<Utc>,
    },

    /// Lookup or evaluation failed; the error is now latched
    OperationFailed {
        symbol: char,
        error: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// An apply call was short-circuited by a previously latched error
    OperationSkipped {
        symbol: char,
        latched: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// The pending result was read (and reset) by the caller
    ResultConsumed {
        value: Number,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalcEvent);
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalcEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalcEvent) {
        tracing::debug!("calculator event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(CalcEvent::ResultConsumed {
            value: 1.0,
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(CalcEvent::OperationFailed {
            symbol: '/',
            error: CalcError::DivisionByZero,
            timestamp: Utc::now(),
        });
    }
}
