use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Promo Code Value Objects
// ============================================================================

/// A promotional discount code. `used_count` is the only field ever
/// mutated, and only through idempotent redemption in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    /// Percentage discount, 0-100.
    pub discount_percentage: Decimal,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    /// `None` means unlimited usage.
    pub usage_limit: Option<u32>,
    pub used_count: u32,
    pub minimum_order: Decimal,
    pub is_active: bool,
}

impl PromoCode {
    pub fn new(
        code: impl Into<String>,
        discount_percentage: Decimal,
        valid_from: DateTime<Utc>,
        valid_until: DateTime<Utc>,
    ) -> Self {
        Self {
            code: code.into().to_uppercase(),
            discount_percentage,
            valid_from,
            valid_until,
            usage_limit: None,
            used_count: 0,
            minimum_order: Decimal::ZERO,
            is_active: true,
        }
    }

    pub fn with_usage_limit(mut self, limit: u32) -> Self {
        self.usage_limit = Some(limit);
        self
    }

    pub fn with_minimum_order(mut self, minimum: Decimal) -> Self {
        self.minimum_order = minimum;
        self
    }

    /// Whether the usage limit (when one exists) is already exhausted.
    pub fn usage_exhausted(&self) -> bool {
        match self.usage_limit {
            Some(limit) => self.used_count >= limit,
            None => false,
        }
    }
}

/// Result of successful validation: the resolved code plus the discount
/// it grants. Carries no side effects; redemption happens separately at
/// order finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedPromo {
    pub code: String,
    pub discount_percentage: Decimal,
}
