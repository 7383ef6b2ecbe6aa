use chrono::Utc;
use uuid::Uuid;

use crate::config::SettlementConfig;
use crate::domain::order::{Cart, Order, PaymentMethod};
use crate::domain::pricing;
use crate::domain::promo::{self, AppliedPromo, PromoCodeRegistry, PromoError};
use crate::domain::shipping::ShippingQuote;
use crate::events::{CheckoutCompleted, EventPublisher, SettlementEvent};
use rust_decimal::Decimal;

// ============================================================================
// Checkout Service
// ============================================================================
//
// Orchestrates: promo validation → pricing → order creation → idempotent
// promo redemption → event publication. The order is created atomically;
// redemption is keyed by the new order id so retrying finalization cannot
// double-count the code.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Promo(#[from] PromoError),
}

pub struct CheckoutService<R, P> {
    registry: R,
    publisher: P,
    config: SettlementConfig,
}

impl<R: PromoCodeRegistry, P: EventPublisher> CheckoutService<R, P> {
    pub fn new(registry: R, publisher: P, config: SettlementConfig) -> Self {
        Self {
            registry,
            publisher,
            config,
        }
    }

    /// Complete a checkout: price the cart (applying the promo code if one
    /// was entered) and freeze the result into an immutable order.
    pub fn checkout(
        &mut self,
        customer_id: Uuid,
        cart: &Cart,
        promo_code: Option<&str>,
        shipping: &ShippingQuote,
        payment_method: PaymentMethod,
    ) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let applied: Option<AppliedPromo> = match promo_code {
            Some(code) => Some(promo::validate(&self.registry, code, cart.subtotal())?),
            None => None,
        };
        let discount_percentage = applied
            .as_ref()
            .map(|promo| promo.discount_percentage)
            .unwrap_or(Decimal::ZERO);

        let totals = pricing::price(cart, discount_percentage, shipping.cost, self.config.tax_rate);
        let order = Order::place(customer_id, cart, &totals, payment_method);

        if let Some(promo) = &applied {
            self.registry.redeem(&promo.code, order.order_id)?;
        }

        tracing::info!(
            order_id = %order.order_id,
            %customer_id,
            total = %order.total,
            discount = %order.discount,
            "checkout completed"
        );

        self.publisher
            .publish(SettlementEvent::CheckoutCompleted(CheckoutCompleted {
                order_id: order.order_id,
                customer_id,
                total: order.total,
                discount: order.discount,
                promo_code: applied.map(|promo| promo.code),
                timestamp: Utc::now(),
            }));

        Ok(order)
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}
