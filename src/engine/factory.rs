// ============================================================================
// Calculator Factory
// Creates calculators with proper registry configuration
// ============================================================================

use crate::domain::{OperationRegistry, OperationRegistryBuilder};
use crate::engine::{Calculator, Div, Mul, Sub, Sum};
use crate::interfaces::{EventHandler, NoOpEventHandler, Operation};
use std::sync::Arc;

// ============================================================================
// Presets
// ============================================================================

/// The conventional four-function registry: `+`, `-`, `*`, `/`
pub fn standard_registry() -> OperationRegistry {
    OperationRegistry::builder()
        .operation('+', Sum)
        .operation('-', Sub)
        .operation('*', Mul)
        .operation('/', Div)
        .build()
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with a fluent API
///
/// # Example
/// ```
/// use chain_calc::prelude::*;
///
/// let mut calc = CalculatorBuilder::new()
///     .standard_operations()
///     .build();
///
/// assert_eq!(calc.apply('+', &[2.0, 2.0]).result(), 4.0);
/// ```
pub struct CalculatorBuilder {
    registry: OperationRegistryBuilder,
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorBuilder {
    /// Create a builder with an empty registry and no event handling
    pub fn new() -> Self {
        Self {
            registry: OperationRegistry::builder(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Register the standard four operations (`+`, `-`, `*`, `/`)
    pub fn standard_operations(mut self) -> Self {
        self.registry = self
            .registry
            .operation('+', Sum)
            .operation('-', Sub)
            .operation('*', Mul)
            .operation('/', Div);
        self
    }

    /// Register a custom operation for `symbol`
    pub fn operation(mut self, symbol: char, op: impl Operation + 'static) -> Self {
        self.registry = self.registry.operation(symbol, op);
        self
    }

    /// Register an already-shared operation for `symbol`
    pub fn shared_operation(mut self, symbol: char, op: Arc<dyn Operation>) -> Self {
        self.registry = self.registry.shared_operation(symbol, op);
        self
    }

    /// Report state transitions to `event_handler`
    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Build the calculator
    pub fn build(self) -> Calculator {
        Calculator::with_event_handler(self.registry.build(), self.event_handler)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
