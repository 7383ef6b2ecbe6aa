use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::pricing::Totals;
use super::value_objects::{Cart, LineItem, PaymentMethod};

// ============================================================================
// Order - Immutable Checkout Result
// ============================================================================
//
// Created atomically when checkout completes. The settlement engine never
// mutates an order afterwards; delivery/tracking state lives with an
// external fulfillment collaborator.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: Uuid,
    pub customer_id: Uuid,
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub shipping_cost: Decimal,
    pub tax_amount: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Freeze a priced cart into an order.
    pub fn place(
        customer_id: Uuid,
        cart: &Cart,
        totals: &Totals,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            customer_id,
            items: cart.items.clone(),
            subtotal: totals.subtotal,
            shipping_cost: totals.shipping_cost,
            tax_amount: totals.tax,
            discount: totals.discount_amount,
            total: totals.total,
            payment_method,
            created_at: Utc::now(),
        }
    }

    pub fn find_item(&self, book_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.book_id == book_id)
    }

    /// Ids of every refundable line on this order. The refund path compares
    /// a return selection against this set, not against all items.
    pub fn refundable_item_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.refundable)
            .map(|item| item.book_id.as_str())
            .collect()
    }

    /// The pre-tax, pre-shipping value the order was charged on. Equals the
    /// discounted subtotal; used as the base for proportional tax refunds.
    pub fn pre_tax_value(&self) -> Decimal {
        self.total - self.shipping_cost - self.tax_amount
    }
}
