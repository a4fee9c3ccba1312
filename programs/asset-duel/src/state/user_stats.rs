use anchor_lang::prelude::*;
use crate::constants::STATS_WINDOW_SECS;
use crate::errors::DuelError;

/// Cross-round staking activity, read by the external reward/spin flow.
#[account]
#[derive(Default)]
pub struct UserStats {
    pub user: Pubkey,
    pub stake_count: u64,
    pub total_staked: u64,
    pub window_started_at: i64,
    pub window_volume: u64,
    pub last_stake_at: i64,
    pub bump: u8,
}

impl UserStats {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 8 + 8 + 8 + 1;

    pub fn record_stake(&mut self, amount: u64, now: i64) -> Result<()> {
        let window_end = self
            .window_started_at
            .checked_add(STATS_WINDOW_SECS)
            .ok_or(DuelError::MathOverflow)?;
        let window_volume = if now >= window_end {
            self.window_started_at = now;
            amount
        } else {
            self.window_volume.checked_add(amount).ok_or(DuelError::MathOverflow)?
        };

        self.stake_count = self.stake_count.checked_add(1).ok_or(DuelError::MathOverflow)?;
        self.total_staked = self.total_staked.checked_add(amount).ok_or(DuelError::MathOverflow)?;
        self.window_volume = window_volume;
        self.last_stake_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_accumulates_inside_window() {
        let mut stats = UserStats::default();
        stats.record_stake(100, 1_000_000).unwrap();
        stats.record_stake(50, 1_000_000 + STATS_WINDOW_SECS - 1).unwrap();

        assert_eq!(stats.stake_count, 2);
        assert_eq!(stats.total_staked, 150);
        assert_eq!(stats.window_started_at, 1_000_000);
        assert_eq!(stats.window_volume, 150);
    }

    #[test]
    fn window_rolls_after_a_day() {
        let mut stats = UserStats::default();
        stats.record_stake(100, 1_000_000).unwrap();
        stats.record_stake(30, 1_000_000 + STATS_WINDOW_SECS).unwrap();

        assert_eq!(stats.window_started_at, 1_000_000 + STATS_WINDOW_SECS);
        assert_eq!(stats.window_volume, 30);
        assert_eq!(stats.total_staked, 130);
        assert_eq!(stats.last_stake_at, 1_000_000 + STATS_WINDOW_SECS);
    }
}
