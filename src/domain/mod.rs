// ============================================================================
// Domain Models Module
// Contains the core domain entities
// ============================================================================

pub mod registry;

pub use registry::{OperationRegistry, OperationRegistryBuilder};
