use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::errors::PromoError;
use super::registry::PromoCodeRegistry;
use super::value_objects::AppliedPromo;

// ============================================================================
// Promo Code Validator
// ============================================================================
//
// Pure validation against the registry: no side effects, so calling twice
// with identical inputs returns identical results. Usage counters move
// only at order finalization via `PromoCodeRegistry::redeem`.
//
// ============================================================================

/// Validate a code against the current wall clock.
pub fn validate(
    registry: &impl PromoCodeRegistry,
    code: &str,
    subtotal: Decimal,
) -> Result<AppliedPromo, PromoError> {
    validate_at(registry, code, subtotal, Utc::now())
}

/// Validate a code at an explicit instant. Rejection reasons are checked
/// in a fixed order so the caller always learns the most fundamental
/// problem first (unknown code before window, window before minimum).
pub fn validate_at(
    registry: &impl PromoCodeRegistry,
    code: &str,
    subtotal: Decimal,
    now: DateTime<Utc>,
) -> Result<AppliedPromo, PromoError> {
    let promo = registry.find(code).ok_or(PromoError::NotFound)?;

    if !promo.is_active {
        return Err(PromoError::Inactive);
    }
    if now < promo.valid_from {
        return Err(PromoError::NotYetValid);
    }
    if now > promo.valid_until {
        return Err(PromoError::Expired);
    }
    if promo.usage_exhausted() {
        return Err(PromoError::UsageLimitReached);
    }
    if subtotal < promo.minimum_order {
        return Err(PromoError::BelowMinimumOrder {
            minimum: promo.minimum_order,
        });
    }

    Ok(AppliedPromo {
        code: promo.code.clone(),
        discount_percentage: promo.discount_percentage,
    })
}
