use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Format a book was purchased in. Format pricing (e.g. the ebook discount)
/// is resolved by the catalog before a line item reaches this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookFormat {
    Physical,
    Ebook,
}

/// A single priced cart/order line. Immutable once an order is placed;
/// `refundable` is fixed at order time (an ebook already delivered is not
/// refundable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub book_id: String,
    pub title: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub format: BookFormat,
    pub refundable: bool,
}

impl LineItem {
    /// `unit_price * quantity`, rounded to cents.
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.unit_price, self.quantity)
    }
}

/// A customer's cart during checkout. Replaced by an `Order` once the
/// order is placed; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<LineItem>,
}

impl Cart {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals over all items.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|item| item.line_total()).sum()
    }

    /// Sum of line totals over physical items only. Used by the shipping
    /// free-threshold rule.
    pub fn physical_subtotal(&self) -> Decimal {
        self.items
            .iter()
            .filter(|item| item.format == BookFormat::Physical)
            .map(|item| item.line_total())
            .sum()
    }

    /// Whether anything in the cart needs shipping at all.
    pub fn has_physical_items(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.format == BookFormat::Physical)
    }
}

/// How the order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    BankAccount,
    DigitalWallet,
}
