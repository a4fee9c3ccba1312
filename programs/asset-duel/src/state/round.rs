use anchor_lang::prelude::*;
use crate::errors::DuelError;
use crate::state::position::Position;
use crate::utils::math::{fee_for, pro_rata, relative_outcome};
use crate::utils::oracle::PricePair;

#[account]
#[derive(Default)]
pub struct Round {
    pub round_id: u64,
    pub creator: Pubkey,
    pub stake_mint: Pubkey,
    pub vault: Pubkey,
    pub phase: Phase,
    pub pool_a: u64,
    pub pool_b: u64,
    pub positions_a: u32,
    pub positions_b: u32,
    pub lock_price_a: u64,
    pub lock_price_b: u64,
    pub resolve_price_a: u64,
    pub resolve_price_b: u64,
    pub outcome: Option<Outcome>,
    pub fee_amount: u64,        // taken by the house at resolution
    pub distributable: u64,     // pool left for winners (or refunds on a draw)
    pub claims_settled: u32,
    pub total_paid_out: u64,
    pub opened_at: i64,
    pub locked_at: i64,
    pub resolved_at: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Round {
    // 8 (discriminator)
    // 8 (round_id) + 32 * 3 (creator, stake_mint, vault)
    // 1 (phase) + 8 * 2 (pools) + 4 * 2 (position counts)
    // 8 * 4 (lock / resolve prices)
    // 1 + 1 (outcome option) + 8 (fee) + 8 (distributable)
    // 4 (claims_settled) + 8 (total_paid_out)
    // 8 * 3 (timestamps) + 1 + 1 (bumps)
    pub const LEN: usize = 8 + 8 + 32 * 3 + 1 + 8 * 2 + 4 * 2 + 8 * 4 + 2 + 8 + 8 + 4 + 8 + 8 * 3 + 2;

    pub fn pool(&self, side: Side) -> u64 {
        match side {
            Side::A => self.pool_a,
            Side::B => self.pool_b,
        }
    }

    pub fn position_count(&self, side: Side) -> u32 {
        match side {
            Side::A => self.positions_a,
            Side::B => self.positions_b,
        }
    }

    pub fn total_pool(&self) -> Result<u64> {
        Ok(self.pool_a.checked_add(self.pool_b).ok_or(DuelError::MathOverflow)?)
    }

    pub fn lock_prices(&self) -> PricePair {
        PricePair { a: self.lock_price_a, b: self.lock_price_b }
    }

    /// Credits `amount` on `side` to both the pool and the caller's position.
    /// Nothing is written unless every check passes.
    pub fn record_stake(&mut self, position: &mut Position, side: Side, amount: u64) -> Result<()> {
        require!(self.phase == Phase::Open, DuelError::InvalidPhase);
        require!(amount > 0, DuelError::AmountOutOfRange);
        position.check_side(side)?;

        let first_stake = position.amount == 0;
        let pool = self.pool(side).checked_add(amount).ok_or(DuelError::MathOverflow)?;
        let staked = position.amount.checked_add(amount).ok_or(DuelError::MathOverflow)?;
        let count = if first_stake {
            self.position_count(side).checked_add(1).ok_or(DuelError::MathOverflow)?
        } else {
            self.position_count(side)
        };

        match side {
            Side::A => {
                self.pool_a = pool;
                self.positions_a = count;
            }
            Side::B => {
                self.pool_b = pool;
                self.positions_b = count;
            }
        }
        position.side = side;
        position.amount = staked;
        Ok(())
    }

    pub fn ensure_lockable(&self, lock_duration: i64, now: i64) -> Result<()> {
        require!(self.phase == Phase::Open, DuelError::InvalidPhase);
        let lock_at = self.opened_at.checked_add(lock_duration).ok_or(DuelError::MathOverflow)?;
        require!(now >= lock_at, DuelError::TooEarly);
        Ok(())
    }

    pub fn lock(&mut self, prices: PricePair, lock_duration: i64, now: i64) -> Result<()> {
        self.ensure_lockable(lock_duration, now)?;
        self.lock_price_a = prices.a;
        self.lock_price_b = prices.b;
        self.locked_at = now;
        self.phase = Phase::Locked;
        Ok(())
    }

    pub fn ensure_resolvable(&self, resolve_duration: i64, now: i64) -> Result<()> {
        require!(self.phase == Phase::Locked, DuelError::InvalidPhase);
        let resolve_at = self.locked_at.checked_add(resolve_duration).ok_or(DuelError::MathOverflow)?;
        require!(now >= resolve_at, DuelError::TooEarly);
        Ok(())
    }

    /// The resolution sample must have been published after the round locked.
    pub fn ensure_sample_after_lock(&self, published_at: i64) -> Result<()> {
        require!(published_at >= self.locked_at, DuelError::OracleUnavailable);
        Ok(())
    }

    /// Finalizes the round and returns how much of the vault belongs to the house.
    ///
    /// A draw refunds every stake with no fee. A win for a side nobody backed leaves
    /// no claimant, so the whole pool goes to the house.
    pub fn resolve(
        &mut self,
        prices: PricePair,
        resolve_duration: i64,
        fee_bps: u16,
        now: i64,
    ) -> Result<u64> {
        self.ensure_resolvable(resolve_duration, now)?;

        let outcome = relative_outcome(self.lock_prices(), prices)?;
        let total = self.total_pool()?;
        let (fee, distributable) = match outcome.winning_side() {
            None => (0, total),
            Some(side) if self.pool(side) == 0 => (total, 0),
            Some(_) => {
                let fee = fee_for(total, fee_bps)?;
                (fee, total.checked_sub(fee).ok_or(DuelError::MathOverflow)?)
            }
        };

        self.resolve_price_a = prices.a;
        self.resolve_price_b = prices.b;
        self.outcome = Some(outcome);
        self.fee_amount = fee;
        self.distributable = distributable;
        self.resolved_at = now;
        self.phase = Phase::Resolved;
        Ok(fee)
    }

    /// What `position` is owed, without touching any state.
    pub fn payout_for(&self, position: &Position) -> Result<u64> {
        require!(self.phase == Phase::Resolved, DuelError::InvalidPhase);
        let outcome = self.outcome.ok_or(DuelError::InvalidPhase)?;
        require!(position.amount > 0, DuelError::NoPosition);
        require!(!position.claimed, DuelError::AlreadyClaimed);

        match outcome.winning_side() {
            None => Ok(position.amount),
            Some(side) => {
                require!(position.side == side, DuelError::NotWinner);
                pro_rata(position.amount, self.distributable, self.pool(side))
            }
        }
    }

    pub fn claim(&mut self, position: &mut Position) -> Result<u64> {
        let payout = self.payout_for(position)?;
        let settled = self.claims_settled.checked_add(1).ok_or(DuelError::MathOverflow)?;
        let paid = self.total_paid_out.checked_add(payout).ok_or(DuelError::MathOverflow)?;

        self.claims_settled = settled;
        self.total_paid_out = paid;
        position.claimed = true;
        position.payout = payout;
        Ok(payout)
    }

    pub fn is_claimable(&self, position: &Position) -> bool {
        match self.outcome {
            Some(outcome) => position.amount > 0 && outcome.pays(position.side),
            None => false,
        }
    }

    pub fn claims_outstanding(&self) -> u32 {
        let claimable = match self.outcome {
            None => return 0,
            Some(Outcome::Draw) => self.positions_a.saturating_add(self.positions_b),
            Some(Outcome::A) => self.positions_a,
            Some(Outcome::B) => self.positions_b,
        };
        claimable.saturating_sub(self.claims_settled)
    }

    pub fn ensure_closable(&self) -> Result<()> {
        require!(self.phase == Phase::Resolved, DuelError::InvalidPhase);
        require!(self.claims_outstanding() == 0, DuelError::ClaimsOutstanding);
        Ok(())
    }

    pub fn ensure_position_closable(&self, position: &Position) -> Result<()> {
        require!(self.phase == Phase::Resolved, DuelError::PositionActive);
        require!(
            position.claimed || !self.is_claimable(position),
            DuelError::PositionActive
        );
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Open,
    Locked,
    Resolved,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Side {
    #[default]
    A,
    B,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    A,
    B,
    Draw,
}

impl Outcome {
    pub fn winning_side(&self) -> Option<Side> {
        match self {
            Outcome::A => Some(Side::A),
            Outcome::B => Some(Side::B),
            Outcome::Draw => None,
        }
    }

    pub fn pays(&self, side: Side) -> bool {
        self.winning_side().map_or(true, |winner| winner == side)
    }
}
