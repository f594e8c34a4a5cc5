//! Common constants used across governance contracts

// ===== Governance Defaults (seconds) =====

/// Default delay between proposal creation and the start of voting (2 hours)
pub const DEFAULT_VOTING_DELAY: u64 = 7_200;

/// Default length of the voting window (14 hours)
pub const DEFAULT_VOTING_PERIOD: u64 = 50_400;

// ===== Fixed-Width Limits =====

/// Largest timepoint representable in 48 bits
pub const MAX_TIMEPOINT: u64 = (1u64 << 48) - 1;

// ===== Storage Lifetimes (ledgers) =====

/// Persistent entries are bumped to roughly 30 days at ~5s per ledger
pub const PERSISTENT_TTL_LEDGERS: u32 = 518_400;

/// Bump only once the remaining TTL drops below this
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_LEDGERS - 17_280;
