use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use crate::constants::{ANY_PRICE_AGE, PRICE_DECIMALS};
use crate::errors::DuelError;
use crate::state::Config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PricePair {
    pub a: u64,
    pub b: u64,
}

/// Rescales a Pyth `price * 10^exponent` to `PRICE_DECIMALS` fixed point.
pub fn normalize_price(price: i64, exponent: i32) -> Result<u64> {
    require!(price > 0, DuelError::OracleUnavailable);

    let scale = PRICE_DECIMALS
        .checked_add(exponent)
        .ok_or(DuelError::MathOverflow)?;
    let value = if scale >= 0 {
        let mul = 10i128
            .checked_pow(scale as u32)
            .ok_or(DuelError::MathOverflow)?;
        (price as i128).checked_mul(mul).ok_or(DuelError::MathOverflow)?
    } else {
        let div = 10i128
            .checked_pow(scale.unsigned_abs())
            .ok_or(DuelError::MathOverflow)?;
        (price as i128) / div
    };
    require!(value > 0, DuelError::OracleUnavailable);
    Ok(u64::try_from(value).map_err(|_| DuelError::MathOverflow)?)
}

/// A verified feed reading, normalized to `PRICE_DECIMALS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedPrice {
    pub value: u64,
    pub published_at: i64,
}

/// Both assets sampled together. `published_at` is the older of the two publish times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceSample {
    pub prices: PricePair,
    pub published_at: i64,
}

/// Fully verified price of `feed_id`. `max_age == 0` accepts any publish time.
pub fn read_price(
    update: &PriceUpdateV2,
    feed_id: &[u8; 32],
    clock: &Clock,
    max_age: u64,
) -> Result<FeedPrice> {
    let max_age = if max_age == 0 { ANY_PRICE_AGE } else { max_age };
    let price = update
        .get_price_no_older_than(clock, max_age, feed_id)
        .map_err(|e| {
            msg!("Oracle read failed: {:?}", e);
            error!(DuelError::OracleUnavailable)
        })?;

    Ok(FeedPrice {
        value: normalize_price(price.price, price.exponent)?,
        published_at: price.publish_time,
    })
}

/// Samples both configured assets. Lock and resolution go through this same path.
pub fn read_price_pair(
    config: &Config,
    update_a: &PriceUpdateV2,
    update_b: &PriceUpdateV2,
    clock: &Clock,
) -> Result<PriceSample> {
    let a = read_price(update_a, &config.feed_a, clock, config.max_price_age)?;
    let b = read_price(update_b, &config.feed_b, clock, config.max_price_age)?;
    msg!("Oracle prices: a={}, b={}", a.value, b.value);
    Ok(PriceSample {
        prices: PricePair { a: a.value, b: b.value },
        published_at: a.published_at.min(b.published_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyth_solana_receiver_sdk::price_update::{PriceFeedMessage, VerificationLevel};
    use crate::utils::testing::assert_duel_err;

    const FEED_A: [u8; 32] = [1; 32];
    const FEED_B: [u8; 32] = [2; 32];
    const NOW: i64 = 1_700_000_000;

    fn update(feed_id: [u8; 32], price: i64, publish_time: i64) -> PriceUpdateV2 {
        PriceUpdateV2 {
            write_authority: Pubkey::new_unique(),
            verification_level: VerificationLevel::Full,
            price_message: PriceFeedMessage {
                feed_id,
                price,
                conf: 0,
                exponent: -8,
                publish_time,
                prev_publish_time: publish_time - 1,
                ema_price: price,
                ema_conf: 0,
            },
            posted_slot: 0,
        }
    }

    fn clock() -> Clock {
        Clock { unix_timestamp: NOW, ..Clock::default() }
    }

    fn config(max_price_age: u64) -> Config {
        Config {
            admin: Pubkey::new_unique(),
            crank_authority: Pubkey::new_unique(),
            house_wallet: Pubkey::new_unique(),
            stake_mint: Pubkey::new_unique(),
            feed_a: FEED_A,
            feed_b: FEED_B,
            fee_bps: 500,
            min_stake: 1,
            max_stake: u64::MAX,
            lock_duration: 60,
            resolve_duration: 60,
            odds_multiplier_bps: 10_000,
            max_price_age,
            paused: false,
            round_count: 0,
            version: 1,
            bump: 255,
            authority_bump: 254,
        }
    }

    #[test]
    fn reads_verified_price_of_any_age_by_default() {
        let old = update(FEED_A, 15_000_000_000, NOW - 86_400 * 365);
        let price = read_price(&old, &FEED_A, &clock(), 0).unwrap();
        assert_eq!(price, FeedPrice { value: 15_000_000_000, published_at: NOW - 86_400 * 365 });
    }

    #[test]
    fn rejects_partially_verified_updates() {
        let mut partial = update(FEED_A, 15_000_000_000, NOW);
        partial.verification_level = VerificationLevel::Partial { num_signatures: 1 };
        assert_duel_err(read_price(&partial, &FEED_A, &clock(), 0), DuelError::OracleUnavailable);
        assert_duel_err(read_price(&partial, &FEED_A, &clock(), 60), DuelError::OracleUnavailable);
    }

    #[test]
    fn rejects_mismatched_feed() {
        let other = update(FEED_B, 15_000_000_000, NOW);
        assert_duel_err(read_price(&other, &FEED_A, &clock(), 0), DuelError::OracleUnavailable);
    }

    #[test]
    fn enforces_max_age_when_set() {
        let fresh = update(FEED_A, 15_000_000_000, NOW - 60);
        assert!(read_price(&fresh, &FEED_A, &clock(), 60).is_ok());

        let stale = update(FEED_A, 15_000_000_000, NOW - 61);
        assert_duel_err(read_price(&stale, &FEED_A, &clock(), 60), DuelError::OracleUnavailable);
    }

    #[test]
    fn rejects_non_positive_feed_price() {
        let zero = update(FEED_A, 0, NOW);
        assert_duel_err(read_price(&zero, &FEED_A, &clock(), 0), DuelError::OracleUnavailable);
        let negative = update(FEED_A, -1, NOW);
        assert_duel_err(read_price(&negative, &FEED_A, &clock(), 0), DuelError::OracleUnavailable);
    }

    #[test]
    fn pair_reads_both_configured_feeds() {
        let cfg = config(0);
        let sample = read_price_pair(
            &cfg,
            &update(FEED_A, 15_000_000_000, NOW - 5),
            &update(FEED_B, 300_000_000_000, NOW - 2),
            &clock(),
        )
        .unwrap();
        assert_eq!(sample.prices, PricePair { a: 15_000_000_000, b: 300_000_000_000 });
        assert_eq!(sample.published_at, NOW - 5);
    }

    #[test]
    fn pair_fails_when_feeds_are_swapped() {
        let cfg = config(0);
        assert_duel_err(
            read_price_pair(
                &cfg,
                &update(FEED_B, 300_000_000_000, NOW),
                &update(FEED_A, 15_000_000_000, NOW),
                &clock(),
            ),
            DuelError::OracleUnavailable,
        );
    }

    #[test]
    fn scales_negative_exponents() {
        // 150.12345678 with expo -8 is already at PRICE_DECIMALS
        assert_eq!(normalize_price(15_012_345_678, -8).unwrap(), 15_012_345_678);
        // expo -10 loses two digits
        assert_eq!(normalize_price(1_501_234_567_899, -10).unwrap(), 15_012_345_678);
        // expo -5 gains three
        assert_eq!(normalize_price(15_012_345, -5).unwrap(), 15_012_345_000);
    }

    #[test]
    fn scales_positive_exponents() {
        assert_eq!(normalize_price(3, 2).unwrap(), 30_000_000_000);
    }

    #[test]
    fn rejects_non_positive_prices() {
        assert_duel_err(normalize_price(0, -8), DuelError::OracleUnavailable);
        assert_duel_err(normalize_price(-5, -8), DuelError::OracleUnavailable);
        // rounds to zero after rescaling
        assert_duel_err(normalize_price(99, -11), DuelError::OracleUnavailable);
    }

    #[test]
    fn rejects_overflowing_prices() {
        assert_duel_err(normalize_price(i64::MAX, 10), DuelError::MathOverflow);
    }
}
