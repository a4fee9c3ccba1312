pub const CONFIG_SEED: &[u8] = b"config";
pub const AUTHORITY_SEED: &[u8] = b"authority";
pub const ROUND_SEED: &[u8] = b"round";
pub const VAULT_SEED: &[u8] = b"vault";
pub const POSITION_SEED: &[u8] = b"position";
pub const USER_STATS_SEED: &[u8] = b"user_stats";

pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 1_000; // 10%

// Round phase durations, seconds
pub const MIN_DURATION: i64 = 5;
pub const MAX_DURATION: i64 = 86_400;

pub const MIN_ODDS_MULTIPLIER_BPS: u32 = 10_000; // 1.0x
pub const MAX_ODDS_MULTIPLIER_BPS: u32 = 1_000_000; // 100x

pub const MAX_PRICE_AGE: u64 = 3_600;
// Oracle age bound used when `max_price_age` is 0
pub const ANY_PRICE_AGE: u64 = i64::MAX as u64;

/// Oracle prices are stored with this many decimals regardless of the feed exponent.
pub const PRICE_DECIMALS: i32 = 8;

pub const STATS_WINDOW_SECS: i64 = 60 * 60 * 24;

// Values a fresh config starts with
pub const DEFAULT_FEE_BPS: u16 = 500;
pub const DEFAULT_LOCK_DURATION: i64 = 60;
pub const DEFAULT_RESOLVE_DURATION: i64 = 60;
pub const DEFAULT_MIN_STAKE: u64 = 1;
pub const DEFAULT_MAX_STAKE: u64 = u64::MAX;
pub const DEFAULT_ODDS_MULTIPLIER_BPS: u32 = 10_000;
pub const DEFAULT_MAX_PRICE_AGE: u64 = 0;
