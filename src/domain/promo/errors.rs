use rust_decimal::Decimal;

// ============================================================================
// Promo Code Rejection Reasons
// ============================================================================
//
// Every rejection is recoverable: the caller corrects the input (or the
// cart) and resubmits. Validation has no side effects, so resubmission is
// always safe.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PromoError {
    #[error("Invalid promotional code")]
    NotFound,

    #[error("This promotional code is no longer active")]
    Inactive,

    #[error("This promotional code is not yet valid")]
    NotYetValid,

    #[error("This promotional code has expired")]
    Expired,

    #[error("This promotional code has reached its usage limit")]
    UsageLimitReached,

    #[error("Minimum order amount of ${minimum:.2} required for this code")]
    BelowMinimumOrder { minimum: Decimal },
}
