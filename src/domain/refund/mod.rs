// ============================================================================
// Refund Domain - Allocation, Fees, and Payout Conversion
// ============================================================================
//
// - Allocator (gross refund with proportional shipping/tax allocation)
// - Fee engine (first-return-free policy + tiered fee schedule)
// - Conversion (store-credit bonus)
// - Errors (RefundError, per offending item)
//
// ============================================================================

pub mod allocator;
pub mod conversion;
pub mod errors;
pub mod fees;

// Re-export for convenience
pub use allocator::*;
pub use conversion::*;
pub use errors::*;
pub use fees::*;
