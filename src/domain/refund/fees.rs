use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::money;

// ============================================================================
// Return Fee Engine
// ============================================================================
//
// A customer's first-ever return is free, across all their orders; that
// is a retention policy, not a per-order one. Subsequent returns pay a
// flat return-shipping fee, a capped percentage restocking fee, and a
// flat processing fee. The net refund never goes negative.
//
// The first-return flag must be resolved from the return history BEFORE
// calling in here, and is then frozen onto the resulting ReturnRecord: a
// later return never retroactively changes an earlier record's fee basis.
//
// ============================================================================

/// Fee schedule for non-first returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnFeeSchedule {
    pub return_shipping_fee: Decimal,
    /// Fraction of the gross refund, e.g. 0.15.
    pub restocking_rate: Decimal,
    pub restocking_fee_cap: Decimal,
    pub processing_fee: Decimal,
}

impl Default for ReturnFeeSchedule {
    fn default() -> Self {
        Self {
            return_shipping_fee: dec!(4.99),
            restocking_rate: dec!(0.15),
            restocking_fee_cap: dec!(25.00),
            processing_fee: dec!(2.99),
        }
    }
}

/// Itemized fees plus the resulting net refund. Never persisted outside
/// its owning ReturnRecord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub return_shipping_fee: Decimal,
    pub restocking_fee: Decimal,
    pub processing_fee: Decimal,
    pub total_fees: Decimal,
    pub net_refund: Decimal,
}

impl FeeBreakdown {
    fn fee_free(gross_refund: Decimal) -> Self {
        Self {
            return_shipping_fee: Decimal::ZERO,
            restocking_fee: Decimal::ZERO,
            processing_fee: Decimal::ZERO,
            total_fees: Decimal::ZERO,
            net_refund: gross_refund,
        }
    }
}

impl ReturnFeeSchedule {
    /// Compute fees for a gross refund under this schedule.
    pub fn compute(&self, gross_refund: Decimal, is_first_return: bool) -> FeeBreakdown {
        if is_first_return {
            return FeeBreakdown::fee_free(gross_refund);
        }

        let restocking_fee = money::rate_of(gross_refund, self.restocking_rate)
            .min(self.restocking_fee_cap);
        let total_fees = self.return_shipping_fee + restocking_fee + self.processing_fee;
        let net_refund = (gross_refund - total_fees).max(Decimal::ZERO);

        FeeBreakdown {
            return_shipping_fee: self.return_shipping_fee,
            restocking_fee,
            processing_fee: self.processing_fee,
            total_fees,
            net_refund,
        }
    }
}

/// Compute fees under the store's standard schedule.
pub fn compute_fees(gross_refund: Decimal, is_first_return: bool) -> FeeBreakdown {
    ReturnFeeSchedule::default().compute(gross_refund, is_first_return)
}
