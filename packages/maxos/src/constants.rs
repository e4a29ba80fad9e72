// Ledger TTL bumps, assuming ~5 second ledgers.
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// 10_000 bps == 100%
pub const BPS_DENOMINATOR: u32 = 10_000;
pub const MAX_BPS: u32 = 10_000;

/// Largest drift (in base asset units) between a strategy's value and its
/// target that `allocate` leaves untouched.
pub const DEFAULT_REBALANCE_TOLERANCE: i128 = 10;
