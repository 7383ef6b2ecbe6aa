// ============================================================================
// Promo Domain - Promotional Code Validation & Redemption
// ============================================================================
//
// - Value objects (PromoCode, AppliedPromo)
// - Errors (PromoError, one variant per rejection reason)
// - Registry (PromoCodeRegistry trait + in-memory implementation)
// - Validator (pure, side-effect-free validation)
//
// ============================================================================

pub mod errors;
pub mod registry;
pub mod validator;
pub mod value_objects;

// Re-export for convenience
pub use errors::*;
pub use registry::*;
pub use validator::*;
pub use value_objects::*;
