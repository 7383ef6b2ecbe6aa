// ============================================================================
// Order Domain - Carts and Placed Orders
// ============================================================================
//
// This module contains the order-side data model:
// - Value objects (BookFormat, LineItem, Cart, PaymentMethod)
// - Order (immutable checkout result)
//
// ============================================================================

pub mod order;
pub mod value_objects;

// Re-export for convenience
pub use order::*;
pub use value_objects::*;
