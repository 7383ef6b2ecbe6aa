use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::refund::FeeBreakdown;

// ============================================================================
// Return Record
// ============================================================================

/// Fulfillment state of a filed return. Owned by an external collaborator;
/// the settlement engine only ever creates records as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

/// One filed return. Appended to the customer's history at submission and
/// never mutated afterwards except `status`. `is_first_return` is derived
/// from the history at submission time and then frozen here; it is the
/// permanent record of the fee basis this return was settled under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub id: Uuid,
    pub order_id: Uuid,
    pub customer_id: Uuid,
    pub selected_item_ids: Vec<String>,
    pub reason: String,
    pub gross_refund: Decimal,
    pub fees: FeeBreakdown,
    pub net_refund: Decimal,
    pub is_first_return: bool,
    pub status: ReturnStatus,
    pub created_at: DateTime<Utc>,
}
