use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Settlement Events
// ============================================================================
//
// Explicit messages published when the engine settles money movement, so
// downstream services (entitlements, notifications, analytics) react to
// events instead of ambient state mutation.
//
// ============================================================================

/// Union type for everything the settlement engine announces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SettlementEvent {
    CheckoutCompleted(CheckoutCompleted),
    ReturnFiled(ReturnFiled),
}

impl SettlementEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            SettlementEvent::CheckoutCompleted(_) => "CheckoutCompleted",
            SettlementEvent::ReturnFiled(_) => "ReturnFiled",
        }
    }
}

/// An order was placed and charged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutCompleted {
    pub order_id: Uuid,
    pub customer_id: Uuid,
    pub total: Decimal,
    pub discount: Decimal,
    pub promo_code: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A return was filed and its payout settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnFiled {
    pub return_id: Uuid,
    pub order_id: Uuid,
    pub customer_id: Uuid,
    pub gross_refund: Decimal,
    pub net_refund: Decimal,
    pub payout: Decimal,
    pub is_first_return: bool,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Event Publisher
// ============================================================================

pub trait EventPublisher {
    fn publish(&mut self, event: SettlementEvent);
}

/// Collects events in memory; the demo and the tests read them back.
#[derive(Debug, Default)]
pub struct InMemoryEventPublisher {
    events: Vec<SettlementEvent>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SettlementEvent] {
        &self.events
    }
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&mut self, event: SettlementEvent) {
        tracing::debug!(event_type = event.event_type(), "settlement event published");
        self.events.push(event);
    }
}
