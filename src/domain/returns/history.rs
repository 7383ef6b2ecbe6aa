use uuid::Uuid;

use super::record::ReturnRecord;

// ============================================================================
// Return History Store
// ============================================================================
//
// Append-only, per-customer history of filed returns. Drives the
// first-return-free policy: `is_first_return` is true iff no record
// exists for the customer at call time.
//
// Precondition (documented, not checked at runtime): implementations must
// provide causally-ordered appends. Two concurrent submissions for the
// same customer must not both observe `is_first_return == true`; callers
// that cannot guarantee this serialize submissions per customer.
//
// ============================================================================

pub trait ReturnHistoryStore {
    /// True iff zero records exist for this customer.
    fn is_first_return(&self, customer_id: Uuid) -> bool;

    /// Append a record. The only mutation this store supports; records
    /// are never removed or edited here.
    fn append(&mut self, record: ReturnRecord);

    /// The customer's returns, chronological by `created_at`, ties broken
    /// by insertion order.
    fn history(&self, customer_id: Uuid) -> Vec<&ReturnRecord>;
}

#[derive(Debug, Default)]
pub struct InMemoryReturnHistory {
    records: Vec<ReturnRecord>,
}

impl InMemoryReturnHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReturnHistoryStore for InMemoryReturnHistory {
    fn is_first_return(&self, customer_id: Uuid) -> bool {
        !self
            .records
            .iter()
            .any(|record| record.customer_id == customer_id)
    }

    fn append(&mut self, record: ReturnRecord) {
        self.records.push(record);
        // Stable sort keeps insertion order for equal timestamps.
        self.records.sort_by_key(|record| record.created_at);
    }

    fn history(&self, customer_id: Uuid) -> Vec<&ReturnRecord> {
        self.records
            .iter()
            .filter(|record| record.customer_id == customer_id)
            .collect()
    }
}
