//! Order pricing and refund settlement engine for an online bookstore.
//!
//! Pure, synchronous computation: carts are priced into checkout totals
//! (with promotional discounts), and placed orders are later settled into
//! refunds with proportional shipping/tax allocation, a first-return-free
//! policy, a tiered fee schedule, and an optional store-credit bonus.
//! Mutable state (promo usage counters, return history) lives behind
//! traits so any persistence layer can back the engine.

pub mod config;
pub mod domain;
pub mod events;
pub mod services;

pub use config::SettlementConfig;
pub use domain::money;
pub use domain::order::{BookFormat, Cart, LineItem, Order, PaymentMethod};
pub use domain::pricing::{price, Totals};
pub use domain::promo::{
    validate, AppliedPromo, InMemoryPromoRegistry, PromoCode, PromoCodeRegistry, PromoError,
};
pub use domain::refund::{
    allocate, compute_fees, convert, FeeBreakdown, GrossRefund, RefundError, RefundMethod,
    ReturnFeeSchedule,
};
pub use domain::returns::{
    InMemoryReturnHistory, ReturnHistoryStore, ReturnRecord, ReturnStatus,
};
pub use domain::shipping::{quote, Destination, ShippingMethod, ShippingQuote};
pub use events::{EventPublisher, InMemoryEventPublisher, SettlementEvent};
pub use services::{CheckoutError, CheckoutService, RefundService, ReturnSettlement};
