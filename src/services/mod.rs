// ============================================================================
// Services - Checkout & Refund Orchestration
// ============================================================================
//
// Thin coordinators over the pure domain layer: they own the store
// handles, wire the components together in the order the settlement flow
// requires, and publish events. All computation stays in domain/.
//
// ============================================================================

pub mod checkout;
pub mod refund;

// Re-export for convenience
pub use checkout::*;
pub use refund::*;
