use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use bookstore_settlement::{
    quote, BookFormat, Cart, CheckoutService, Destination, InMemoryEventPublisher,
    InMemoryPromoRegistry, InMemoryReturnHistory, LineItem, PaymentMethod, PromoCode,
    RefundMethod, RefundService, SettlementConfig, ShippingMethod,
};

fn main() -> anyhow::Result<()> {
    // Structured logging with environment-based filtering.
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bookstore_settlement=debug")),
        )
        .init();

    tracing::info!("🚀 Bookstore settlement engine demo");

    let config = SettlementConfig::default();
    let now = Utc::now();

    // === 1. Seed the store's promotional codes ===
    let mut registry = InMemoryPromoRegistry::new();
    registry.insert(PromoCode::new("DRSHIMA", dec!(100), now, now + Duration::days(365)));
    registry.insert(
        PromoCode::new("WELCOME10", dec!(10), now, now + Duration::days(30))
            .with_usage_limit(100)
            .with_minimum_order(dec!(25.00)),
    );
    registry.insert(
        PromoCode::new("STUDENT20", dec!(20), now, now + Duration::days(90))
            .with_usage_limit(500)
            .with_minimum_order(dec!(15.00)),
    );

    let mut checkout = CheckoutService::new(registry, InMemoryEventPublisher::new(), config.clone());
    let mut refunds = RefundService::new(
        InMemoryReturnHistory::new(),
        InMemoryEventPublisher::new(),
        config,
    );

    // === 2. Checkout a mixed cart with a promo code ===
    let customer_id = Uuid::new_v4();
    let cart = Cart::new(vec![
        LineItem {
            book_id: "1".to_string(),
            title: "The Midnight Library".to_string(),
            unit_price: dec!(14.99),
            quantity: 1,
            format: BookFormat::Physical,
            refundable: true,
        },
        LineItem {
            book_id: "2".to_string(),
            title: "Atomic Habits".to_string(),
            unit_price: dec!(8.39), // ebook price resolved by the catalog
            quantity: 1,
            format: BookFormat::Ebook,
            refundable: false, // already delivered
        },
        LineItem {
            book_id: "7".to_string(),
            title: "Sapiens".to_string(),
            unit_price: dec!(15.99),
            quantity: 1,
            format: BookFormat::Physical,
            refundable: true,
        },
    ]);

    let shipping = quote(&cart, ShippingMethod::Standard, Destination::Domestic);
    let order = checkout.checkout(
        customer_id,
        &cart,
        Some("WELCOME10"),
        &shipping,
        PaymentMethod::CreditCard,
    )?;

    tracing::info!(
        "✅ Order placed: subtotal ${}, discount ${}, shipping ${}, tax ${}, total ${}",
        order.subtotal,
        order.discount,
        order.shipping_cost,
        order.tax_amount,
        order.total
    );

    // === 3. First return: fee-free by policy ===
    let first = refunds.submit_return(
        &order,
        &["1".to_string()],
        "Item damaged during shipping",
        RefundMethod::OriginalPayment,
    )?;
    tracing::info!(
        "📦 First return: gross ${}, fees ${}, refunded ${}",
        first.record.gross_refund,
        first.record.fees.total_fees,
        first.payout
    );

    // === 4. Second return: fee schedule applies, store credit adds 10% ===
    let second = refunds.submit_return(
        &order,
        &["7".to_string()],
        "Changed my mind",
        RefundMethod::StoreCredit,
    )?;
    tracing::info!(
        "💳 Second return: gross ${}, fees ${}, net ${}, store credit ${}",
        second.record.gross_refund,
        second.record.fees.total_fees,
        second.record.net_refund,
        second.payout
    );

    tracing::info!(
        "🎉 Demo complete: {} settlement events published",
        checkout.publisher().events().len() + refunds.publisher().events().len()
    );

    Ok(())
}
