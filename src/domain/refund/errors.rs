// ============================================================================
// Refund Selection Errors
// ============================================================================
//
// All recoverable: the caller drops or replaces the offending item id and
// resubmits. The allocator never silently ignores a bad selection.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefundError {
    #[error("No items selected for return")]
    EmptySelection,

    #[error("Item {0} is not part of this order")]
    ItemNotFound(String),

    #[error("Item {0} is not eligible for refund")]
    ItemNotRefundable(String),
}
