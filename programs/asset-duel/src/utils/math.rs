use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::DuelError;
use crate::state::round::Outcome;
use crate::utils::oracle::PricePair;

/// House share of `total`, truncated.
pub fn fee_for(total: u64, fee_bps: u16) -> Result<u64> {
    let fee = (total as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(DuelError::MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(DuelError::MathOverflow)?;
    Ok(u64::try_from(fee).map_err(|_| DuelError::MathOverflow)?)
}

/// `stake * distributable / winning_pool`, truncated toward zero. The remainder stays in the vault.
pub fn pro_rata(stake: u64, distributable: u64, winning_pool: u64) -> Result<u64> {
    require!(winning_pool > 0, DuelError::MathOverflow);
    let share = (stake as u128)
        .checked_mul(distributable as u128)
        .ok_or(DuelError::MathOverflow)?
        / winning_pool as u128;
    Ok(u64::try_from(share).map_err(|_| DuelError::MathOverflow)?)
}

/// Compares the relative move of both assets between two samples.
///
/// `(end_a - start_a) / start_a` against `(end_b - start_b) / start_b`, cross-multiplied so
/// no precision is lost. Side A wins if asset A did better, equal moves are a draw.
pub fn relative_outcome(start: PricePair, end: PricePair) -> Result<Outcome> {
    require!(start.a > 0 && start.b > 0, DuelError::OracleUnavailable);

    let delta_a = end.a as i128 - start.a as i128;
    let delta_b = end.b as i128 - start.b as i128;
    let perf_a = delta_a.checked_mul(start.b as i128).ok_or(DuelError::MathOverflow)?;
    let perf_b = delta_b.checked_mul(start.a as i128).ok_or(DuelError::MathOverflow)?;

    Ok(match perf_a.cmp(&perf_b) {
        std::cmp::Ordering::Greater => Outcome::A,
        std::cmp::Ordering::Less => Outcome::B,
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::assert_duel_err;

    fn pair(a: u64, b: u64) -> PricePair {
        PricePair { a, b }
    }

    #[test]
    fn fee_truncates() {
        assert_eq!(fee_for(45, 500).unwrap(), 2);
        assert_eq!(fee_for(19, 500).unwrap(), 0);
        assert_eq!(fee_for(1_000_000, 0).unwrap(), 0);
        assert_eq!(fee_for(u64::MAX, 1_000).unwrap(), u64::MAX / 10);
    }

    #[test]
    fn pro_rata_keeps_dust() {
        assert_eq!(pro_rata(5, 43, 25).unwrap(), 8);
        assert_eq!(pro_rata(10, 43, 25).unwrap(), 17);
        assert_eq!(pro_rata(25, 43, 25).unwrap(), 43);
        assert_eq!(pro_rata(u64::MAX, u64::MAX, u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn pro_rata_rejects_empty_pool() {
        assert_duel_err(pro_rata(1, 1, 0), DuelError::MathOverflow);
    }

    #[test]
    fn outcome_follows_relative_performance() {
        // A +1%, B +2%
        assert_eq!(relative_outcome(pair(100, 50), pair(101, 51)).unwrap(), Outcome::B);
        // A -1%, B -2%
        assert_eq!(relative_outcome(pair(100, 50), pair(99, 49)).unwrap(), Outcome::A);
        // absolute moves favour B, relative moves favour A
        assert_eq!(
            relative_outcome(pair(150, 3_000), pair(153, 3_050)).unwrap(),
            Outcome::A
        );
        assert_eq!(relative_outcome(pair(100, 100), pair(100, 100)).unwrap(), Outcome::Draw);
    }

    #[test]
    fn outcome_handles_large_prices() {
        let start = pair(u64::MAX / 2, u64::MAX / 2);
        let end = pair(u64::MAX, u64::MAX / 2 + 1);
        assert_eq!(relative_outcome(start, end).unwrap(), Outcome::A);
    }

    #[test]
    fn outcome_requires_lock_sample() {
        assert_duel_err(relative_outcome(pair(0, 10), pair(1, 10)), DuelError::OracleUnavailable);
    }
}
