// ============================================================================
// Domain Layer - Settlement Business Logic
// ============================================================================
//
// Each subdomain has its own subdirectory with value objects, errors, and
// the pure computation it owns. Nothing in this layer performs I/O; the
// only mutable state (promo usage counters, return history) sits behind
// the registry/store traits.
//
// ============================================================================

pub mod money;
pub mod order;
pub mod pricing;
pub mod promo;
pub mod refund;
pub mod returns;
pub mod shipping;
