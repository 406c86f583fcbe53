pub const LEDGER_CONFIG_SEED: &[u8] = b"config";
pub const MEMBER_SEED: &[u8] = b"member";
pub const REFERRAL_LINK_SEED: &[u8] = b"referral";

/// Seconds in one UTC calendar day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// 100% in basis points
pub const BASIS_POINTS: u64 = 10_000;

// Default parameters, in whole settlement tokens. Scaled by the mint's
// decimals when the ledger is initialized without explicit params.

/// Flat bonus to the referrer when a direct referral's membership is confirmed
pub const DEFAULT_DIRECT_BONUS: u64 = 20;

/// Bonus for each filled left/right placement
pub const DEFAULT_PAIRING_BONUS: u64 = 5;

/// Membership fee the user pays off-chain before submitting proof
pub const DEFAULT_MEMBERSHIP_FEE: u64 = 50;

pub const DEFAULT_MIN_INVEST: u64 = 50;

pub const DEFAULT_MIN_WITHDRAW: u64 = 20;

/// Placements per side that earn a pairing bonus in one UTC day
pub const DEFAULT_MAX_PAIRS_PER_DAY: u16 = 10;

/// Daily yield: 100 basis points = 1%
pub const DEFAULT_DAILY_RATE_BPS: u16 = 100;

/// Principal lock after investment confirmation
pub const DEFAULT_LOCK_DAYS: i64 = 30;

/// Maximum daily yield accepted by config validation (10%)
pub const MAX_DAILY_RATE_BPS: u16 = 1_000;

/// TXID or screenshot file id, as submitted through the bot
pub const MAX_PROOF_LEN: usize = 128;

/// Off-chain payout address (BEP20 hex, base58 or similar)
pub const MAX_DESTINATION_LEN: usize = 64;
