use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::errors::PromoError;
use super::value_objects::PromoCode;

// ============================================================================
// Promo Code Registry
// ============================================================================
//
// Owns the only mutable promo state: usage counters. Redemption is keyed
// by order id so a checkout retry can never double-count a code.
//
// ============================================================================

pub trait PromoCodeRegistry {
    /// Case-insensitive lookup. Read-only; never touches usage counters.
    fn find(&self, code: &str) -> Option<&PromoCode>;

    /// Redeem a code for an order. Increments `used_count` at most once
    /// per order id; redeeming the same (code, order) pair again is a
    /// no-op, so this is safe to call on retry.
    fn redeem(&mut self, code: &str, order_id: Uuid) -> Result<(), PromoError>;
}

/// In-memory registry. A production deployment would back this trait with
/// a transactional store; the engine only requires the idempotency
/// contract above.
#[derive(Debug, Default)]
pub struct InMemoryPromoRegistry {
    codes: HashMap<String, PromoCode>,
    redemptions: HashMap<String, HashSet<Uuid>>,
}

impl InMemoryPromoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, promo: PromoCode) {
        self.codes.insert(promo.code.clone(), promo);
    }
}

impl PromoCodeRegistry for InMemoryPromoRegistry {
    fn find(&self, code: &str) -> Option<&PromoCode> {
        self.codes.get(code.trim().to_uppercase().as_str())
    }

    fn redeem(&mut self, code: &str, order_id: Uuid) -> Result<(), PromoError> {
        let key = code.trim().to_uppercase();
        let promo = self.codes.get_mut(&key).ok_or(PromoError::NotFound)?;

        let seen = self.redemptions.entry(key).or_default();
        if seen.insert(order_id) {
            promo.used_count += 1;
            tracing::debug!(code = %promo.code, %order_id, used_count = promo.used_count, "promo code redeemed");
        }
        Ok(())
    }
}
