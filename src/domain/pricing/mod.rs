use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money;
use crate::domain::order::Cart;

// ============================================================================
// Pricing Calculator
// ============================================================================
//
// Turns a cart plus an applied discount, shipping cost, and tax rate into
// the amount charged at checkout.
//
// Tax base: tax is charged on the PRE-discount subtotal while the discount
// reduces only the subtotal portion of the total. This mirrors the store's
// billing behavior (tax on original price) and is covered by a dedicated
// test; changing it changes what customers are charged.
//
// ============================================================================

/// Checkout totals. Every field is rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub discounted_subtotal: Decimal,
    pub tax: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
}

/// Price a cart.
///
/// `discount_percentage` is 0-100 (0 when no promo is applied);
/// `tax_rate` is a fraction, e.g. 0.08. Shipping is supplied by the
/// shipping-rate collaborator and is zero for pure-digital carts.
pub fn price(
    cart: &Cart,
    discount_percentage: Decimal,
    shipping_cost: Decimal,
    tax_rate: Decimal,
) -> Totals {
    let subtotal = cart.subtotal();
    let discount_amount = money::percentage_of(subtotal, discount_percentage);
    let discounted_subtotal = subtotal - discount_amount;
    let tax = money::rate_of(subtotal, tax_rate);
    let total = discounted_subtotal + shipping_cost + tax;

    Totals {
        subtotal,
        discount_amount,
        discounted_subtotal,
        tax,
        shipping_cost,
        total,
    }
}
