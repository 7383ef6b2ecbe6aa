use rust_decimal::prelude::*;

// ============================================================================
// Money Utilities
// ============================================================================
//
// All monetary arithmetic in the engine goes through this module so that
// rounding happens consistently: 2 decimal places, midpoint rounds away
// from zero ("round half up" for the positive amounts we deal with).
// Amounts are rounded after every multiplication, not only at the end,
// so displayed and persisted values never drift apart.
//
// ============================================================================

/// Currency precision: cents.
pub const DECIMAL_PLACES: u32 = 2;

/// Round a monetary amount to cents, half-up.
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total for a priced quantity: `unit_price * quantity`, rounded.
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    round(unit_price * Decimal::from(quantity))
}

/// Percentage of an amount, where `percentage` is expressed 0-100.
pub fn percentage_of(value: Decimal, percentage: Decimal) -> Decimal {
    round(value * percentage / Decimal::ONE_HUNDRED)
}

/// Fractional rate of an amount, e.g. a 0.08 tax rate or 0.15 restocking rate.
pub fn rate_of(value: Decimal, rate: Decimal) -> Decimal {
    round(value * rate)
}
