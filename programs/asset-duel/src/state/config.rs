use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::DuelError;

#[account]
pub struct Config {
    pub admin: Pubkey,              // 32
    pub crank_authority: Pubkey,    // 32
    pub house_wallet: Pubkey,       // 32 (stake-mint token account)
    pub stake_mint: Pubkey,         // 32
    pub feed_a: [u8; 32],           // 32 (Pyth feed id, side A asset)
    pub feed_b: [u8; 32],           // 32 (Pyth feed id, side B asset)
    pub fee_bps: u16,               // 2
    pub min_stake: u64,             // 8
    pub max_stake: u64,             // 8
    pub lock_duration: i64,         // 8
    pub resolve_duration: i64,      // 8
    pub odds_multiplier_bps: u32,   // 4
    pub max_price_age: u64,         // 8 (0 = accept any publish time)
    pub paused: bool,               // 1
    pub round_count: u64,           // 8
    pub version: u64,               // 8
    pub bump: u8,                   // 1
    pub authority_bump: u8,         // 1
}

impl Config {
    pub const LEN: usize = 8 + 32 * 6 + 2 + 8 * 4 + 4 + 8 + 1 + 8 + 8 + 1 + 1;

    pub fn params(&self) -> ConfigParams {
        ConfigParams {
            fee_bps: self.fee_bps,
            min_stake: self.min_stake,
            max_stake: self.max_stake,
            lock_duration: self.lock_duration,
            resolve_duration: self.resolve_duration,
            odds_multiplier_bps: self.odds_multiplier_bps,
            max_price_age: self.max_price_age,
        }
    }

    /// Validates the whole parameter set, then writes it in one go.
    pub fn apply(&mut self, params: &ConfigParams, crank_authority: Pubkey) -> Result<()> {
        params.validate()?;

        self.fee_bps = params.fee_bps;
        self.min_stake = params.min_stake;
        self.max_stake = params.max_stake;
        self.lock_duration = params.lock_duration;
        self.resolve_duration = params.resolve_duration;
        self.odds_multiplier_bps = params.odds_multiplier_bps;
        self.max_price_age = params.max_price_age;
        self.crank_authority = crank_authority;
        self.version = self.version.checked_add(1).ok_or(DuelError::MathOverflow)?;
        Ok(())
    }

    pub fn confirm_crank(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.crank_authority, *signer, DuelError::Unauthorized);
        Ok(())
    }

    pub fn confirm_house_wallet(&self, wallet: &Pubkey) -> Result<()> {
        require_keys_eq!(self.house_wallet, *wallet, DuelError::HouseWalletMismatch);
        Ok(())
    }

    pub fn check_stake_amount(&self, amount: u64) -> Result<()> {
        require!(
            amount >= self.min_stake && amount <= self.max_stake,
            DuelError::AmountOutOfRange
        );
        Ok(())
    }

    pub fn next_round_id(&mut self) -> Result<u64> {
        let id = self.round_count;
        self.round_count = self.round_count.checked_add(1).ok_or(DuelError::MathOverflow)?;
        Ok(id)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub struct ConfigParams {
    pub fee_bps: u16,
    pub min_stake: u64,
    pub max_stake: u64,
    pub lock_duration: i64,
    pub resolve_duration: i64,
    pub odds_multiplier_bps: u32,
    pub max_price_age: u64,
}

impl Default for ConfigParams {
    fn default() -> Self {
        Self {
            fee_bps: DEFAULT_FEE_BPS,
            min_stake: DEFAULT_MIN_STAKE,
            max_stake: DEFAULT_MAX_STAKE,
            lock_duration: DEFAULT_LOCK_DURATION,
            resolve_duration: DEFAULT_RESOLVE_DURATION,
            odds_multiplier_bps: DEFAULT_ODDS_MULTIPLIER_BPS,
            max_price_age: DEFAULT_MAX_PRICE_AGE,
        }
    }
}

impl ConfigParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.fee_bps <= MAX_FEE_BPS, DuelError::InvalidConfig);
        require!(
            self.min_stake > 0 && self.min_stake <= self.max_stake,
            DuelError::InvalidConfig
        );
        require!(
            (MIN_DURATION..=MAX_DURATION).contains(&self.lock_duration),
            DuelError::InvalidConfig
        );
        require!(
            (MIN_DURATION..=MAX_DURATION).contains(&self.resolve_duration),
            DuelError::InvalidConfig
        );
        require!(
            (MIN_ODDS_MULTIPLIER_BPS..=MAX_ODDS_MULTIPLIER_BPS).contains(&self.odds_multiplier_bps),
            DuelError::InvalidConfig
        );
        require!(self.max_price_age <= MAX_PRICE_AGE, DuelError::InvalidConfig);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::assert_duel_err;

    fn config() -> Config {
        Config {
            admin: Pubkey::new_unique(),
            crank_authority: Pubkey::new_unique(),
            house_wallet: Pubkey::new_unique(),
            stake_mint: Pubkey::new_unique(),
            feed_a: [1; 32],
            feed_b: [2; 32],
            fee_bps: DEFAULT_FEE_BPS,
            min_stake: 10,
            max_stake: 1_000,
            lock_duration: 60,
            resolve_duration: 60,
            odds_multiplier_bps: DEFAULT_ODDS_MULTIPLIER_BPS,
            max_price_age: 0,
            paused: false,
            round_count: 0,
            version: 0,
            bump: 255,
            authority_bump: 254,
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(ConfigParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let base = ConfigParams::default();

        let cases = [
            ConfigParams { fee_bps: MAX_FEE_BPS + 1, ..base },
            ConfigParams { min_stake: 0, ..base },
            ConfigParams { min_stake: 100, max_stake: 99, ..base },
            ConfigParams { lock_duration: MIN_DURATION - 1, ..base },
            ConfigParams { resolve_duration: MAX_DURATION + 1, ..base },
            ConfigParams { odds_multiplier_bps: MIN_ODDS_MULTIPLIER_BPS - 1, ..base },
            ConfigParams { max_price_age: MAX_PRICE_AGE + 1, ..base },
        ];
        for params in cases {
            assert_duel_err(params.validate(), DuelError::InvalidConfig);
        }

        assert!(ConfigParams { fee_bps: MAX_FEE_BPS, ..base }.validate().is_ok());
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut cfg = config();
        let before = cfg.params();
        let crank = cfg.crank_authority;

        let bad = ConfigParams { fee_bps: 200, lock_duration: 0, ..before };
        assert_duel_err(cfg.apply(&bad, Pubkey::new_unique()), DuelError::InvalidConfig);
        assert_eq!(cfg.params(), before);
        assert_eq!(cfg.crank_authority, crank);
        assert_eq!(cfg.version, 0);

        let new_crank = Pubkey::new_unique();
        let good = ConfigParams { fee_bps: 200, lock_duration: 30, ..before };
        cfg.apply(&good, new_crank).unwrap();
        assert_eq!(cfg.params(), good);
        assert_eq!(cfg.crank_authority, new_crank);
        assert_eq!(cfg.version, 1);
    }

    #[test]
    fn stake_bounds_are_inclusive() {
        let cfg = config();
        assert_duel_err(cfg.check_stake_amount(9), DuelError::AmountOutOfRange);
        assert!(cfg.check_stake_amount(10).is_ok());
        assert!(cfg.check_stake_amount(1_000).is_ok());
        assert_duel_err(cfg.check_stake_amount(1_001), DuelError::AmountOutOfRange);
    }

    #[test]
    fn only_crank_may_crank() {
        let cfg = config();
        assert!(cfg.confirm_crank(&cfg.crank_authority).is_ok());
        assert_duel_err(cfg.confirm_crank(&cfg.admin), DuelError::Unauthorized);
    }

    #[test]
    fn house_take_goes_to_configured_wallet() {
        let cfg = config();
        assert!(cfg.confirm_house_wallet(&cfg.house_wallet).is_ok());
        assert_duel_err(
            cfg.confirm_house_wallet(&Pubkey::new_unique()),
            DuelError::HouseWalletMismatch,
        );
    }

    #[test]
    fn round_ids_are_sequential() {
        let mut cfg = config();
        assert_eq!(cfg.next_round_id().unwrap(), 0);
        assert_eq!(cfg.next_round_id().unwrap(), 1);
        assert_eq!(cfg.round_count, 2);
    }
}
