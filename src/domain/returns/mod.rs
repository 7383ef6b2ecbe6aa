// ============================================================================
// Returns Domain - Filed Returns and Per-Customer History
// ============================================================================

pub mod history;
pub mod record;

// Re-export for convenience
pub use history::*;
pub use record::*;
