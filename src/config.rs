use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::refund::ReturnFeeSchedule;

// ============================================================================
// Settlement Configuration
// ============================================================================
//
// The engine assumes a single currency and a flat tax rate. Defaults are
// the store's standard policy; deployments override the whole value.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Flat sales tax rate as a fraction, e.g. 0.08 for 8%.
    pub tax_rate: Decimal,
    /// Store-credit bonus as a fraction of the net refund.
    pub store_credit_bonus: Decimal,
    pub fees: ReturnFeeSchedule,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            tax_rate: dec!(0.08),
            store_credit_bonus: dec!(0.10),
            fees: ReturnFeeSchedule::default(),
        }
    }
}
