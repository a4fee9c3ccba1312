use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;
use state::{ConfigParams, Side};

declare_id!("DuELr5Kp3XvAw9W1mRoQ7nYb8eZtHs6cUfJgq2LkTiVa");

#[program]
pub mod asset_duel {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, feed_a: [u8; 32], feed_b: [u8; 32]) -> Result<()> {
        instructions::admin::initialize::process_initialize(ctx, feed_a, feed_b)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, params: ConfigParams) -> Result<()> {
        instructions::admin::update_config::process_update_config(ctx, params)
    }

    pub fn resize_config(ctx: Context<ResizeConfig>, new_size: u64) -> Result<()> {
        instructions::admin::resize_config::process_resize_config(ctx, new_size)
    }

    pub fn pause(ctx: Context<ConfigAdmin>) -> Result<()> {
        instructions::admin::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<ConfigAdmin>) -> Result<()> {
        instructions::admin::pause::unpause(ctx)
    }

    pub fn update_house_wallet(ctx: Context<UpdateHouseWallet>) -> Result<()> {
        instructions::admin::update_house_wallet::update_house_wallet(ctx)
    }

    pub fn open_round(ctx: Context<OpenRound>, round_id: u64) -> Result<()> {
        instructions::round::open_round::process_open_round(ctx, round_id)
    }

    pub fn place_stake(ctx: Context<PlaceStake>, side: Side, amount: u64) -> Result<()> {
        instructions::betting::place_stake::process_place_stake(ctx, side, amount)
    }

    pub fn lock_round(ctx: Context<LockRound>) -> Result<()> {
        instructions::oracle::lock_round::process_lock_round(ctx)
    }

    pub fn resolve_round(ctx: Context<ResolveRound>) -> Result<()> {
        instructions::oracle::resolve_round::process_resolve_round(ctx)
    }

    pub fn claim_win(ctx: Context<ClaimWin>) -> Result<()> {
        instructions::betting::claim_win::process_claim_win(ctx)
    }

    pub fn close_position(ctx: Context<ClosePosition>) -> Result<()> {
        instructions::betting::close_position::process_close_position(ctx)
    }

    pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
        instructions::round::close_round::process_close_round(ctx)
    }

    pub fn create_user_stats(ctx: Context<CreateUserStats>) -> Result<()> {
        instructions::user::user_stats::process_create_user_stats(ctx)
    }

    pub fn close_user_stats(ctx: Context<CloseUserStats>) -> Result<()> {
        instructions::user::user_stats::process_close_user_stats(ctx)
    }
}
