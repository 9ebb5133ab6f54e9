// ============================================================================
// Operation Registry
// Immutable symbol-to-operation mapping
// ============================================================================

use crate::interfaces::Operation;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Immutable mapping from a single-character symbol to an [`Operation`].
///
/// Built once through [`OperationRegistry::builder`] and read-only
/// afterward. Operations are held behind `Arc`, so a single stateless
/// operation instance can back any number of registries.
///
/// # Example
/// ```
/// use chain_calc::domain::OperationRegistry;
/// use chain_calc::engine::Sum;
///
/// let registry = OperationRegistry::builder().operation('+', Sum).build();
/// assert!(registry.contains('+'));
/// assert!(!registry.contains('^'));
/// ```
pub struct OperationRegistry {
    ops: HashMap<char, Arc<dyn Operation>>,
}

impl OperationRegistry {
    /// Start building a registry
    pub fn builder() -> OperationRegistryBuilder {
        OperationRegistryBuilder {
            ops: HashMap::new(),
        }
    }

    /// Look up the operation registered for `symbol`
    pub fn get(&self, symbol: char) -> Option<&Arc<dyn Operation>> {
        self.ops.get(&symbol)
    }

    /// Whether `symbol` has a registered operation
    pub fn contains(&self, symbol: char) -> bool {
        self.ops.contains_key(&symbol)
    }

    /// Iterate over the registered symbols (unordered)
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.ops.keys().copied()
    }

    /// Number of registered operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut symbols: Vec<char> = self.symbols().collect();
        symbols.sort_unstable();
        f.debug_struct("OperationRegistry")
            .field("symbols", &symbols)
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Consuming builder for [`OperationRegistry`].
///
/// Registering the same symbol twice keeps the last registration.
pub struct OperationRegistryBuilder {
    ops: HashMap<char, Arc<dyn Operation>>,
}

impl OperationRegistryBuilder {
    /// Register an operation for `symbol`
    pub fn operation(mut self, symbol: char, op: impl Operation + 'static) -> Self {
        self.ops.insert(symbol, Arc::new(op));
        self
    }

    /// Register an already-shared operation for `symbol`
    ///
    /// Useful when one operation instance backs several registries.
    pub fn shared_operation(mut self, symbol: char, op: Arc<dyn Operation>) -> Self {
        self.ops.insert(symbol, op);
        self
    }

    /// Freeze the mapping
    pub fn build(self) -> OperationRegistry {
        OperationRegistry { ops: self.ops }
    }
}
