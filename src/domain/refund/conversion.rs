use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::money;

// ============================================================================
// Refund Method Conversion
// ============================================================================
//
// Customers who accept store credit instead of a cash refund get a bonus
// on top of the net refund. Conversion runs strictly AFTER fee
// computation; fees are always assessed against the cash-equivalent
// gross refund.
//
// ============================================================================

/// Bonus rate for accepting store credit, as a fraction of the net refund.
pub const STORE_CREDIT_BONUS_RATE: Decimal = dec!(0.10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefundMethod {
    OriginalPayment,
    StoreCredit,
}

/// Convert a net refund into the payout for the chosen method, using the
/// store's standard bonus rate.
pub fn convert(net_refund: Decimal, method: RefundMethod) -> Decimal {
    convert_with(net_refund, method, STORE_CREDIT_BONUS_RATE)
}

/// Conversion with an explicit bonus rate (taken from configuration).
pub fn convert_with(net_refund: Decimal, method: RefundMethod, bonus_rate: Decimal) -> Decimal {
    match method {
        RefundMethod::OriginalPayment => net_refund,
        RefundMethod::StoreCredit => money::round(net_refund * (Decimal::ONE + bonus_rate)),
    }
}
