use anchor_lang::prelude::*;
use crate::state::round::{Outcome, Side};

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub crank_authority: Pubkey,
    pub house_wallet: Pubkey,
    pub stake_mint: Pubkey,
    pub fee_bps: u16,
}

#[event]
pub struct ConfigUpdated {
    pub version: u64,
    pub crank_authority: Pubkey,
    pub fee_bps: u16,
    pub min_stake: u64,
    pub max_stake: u64,
    pub lock_duration: i64,
    pub resolve_duration: i64,
    pub odds_multiplier_bps: u32,
}

#[event]
pub struct RoundOpened {
    pub round_id: u64,
    pub creator: Pubkey,
    pub vault: Pubkey,
    pub opened_at: i64,
}

#[event]
pub struct StakePlaced {
    pub round_id: u64,
    pub user: Pubkey,
    pub side: Side,
    pub amount: u64,
    pub position_amount: u64,
    pub pool_a: u64,
    pub pool_b: u64,
    pub timestamp: i64,
}

#[event]
pub struct RoundLocked {
    pub round_id: u64,
    pub lock_price_a: u64,
    pub lock_price_b: u64,
    pub locked_at: i64,
}

#[event]
pub struct RoundResolved {
    pub round_id: u64,
    pub outcome: Outcome,
    pub resolve_price_a: u64,
    pub resolve_price_b: u64,
    pub fee_amount: u64,
    pub distributable: u64,
}

#[event]
pub struct WinClaimed {
    pub round_id: u64,
    pub user: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RoundClosed {
    pub round_id: u64,
    pub dust_swept: u64,
}
