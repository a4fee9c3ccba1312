use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::{CONFIG_SEED, POSITION_SEED, ROUND_SEED, USER_STATS_SEED, VAULT_SEED};
use crate::state::{Config, Position, Round, Side, UserStats};
use crate::events::StakePlaced;
use crate::errors::DuelError;
use crate::utils::token::transfer_stake;

#[derive(Accounts)]
pub struct PlaceStake<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [ROUND_SEED, round.round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, round.key().as_ref()],
        bump = round.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        seeds = [POSITION_SEED, round.key().as_ref(), user.key().as_ref()],
        bump,
        payer = user,
        space = Position::LEN
    )]
    pub position: Account<'info, Position>,

    /// Optional activity counter for the reward flow
    #[account(
        mut,
        seeds = [USER_STATS_SEED, user.key().as_ref()],
        bump = user_stats.bump,
    )]
    pub user_stats: Option<Account<'info, UserStats>>,

    #[account(
        mut,
        constraint = user_token.mint == round.stake_mint @ DuelError::TokenMismatch,
        constraint = user_token.owner == user.key() @ DuelError::Unauthorized,
    )]
    pub user_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_place_stake(ctx: Context<PlaceStake>, side: Side, amount: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    let round = &mut ctx.accounts.round;
    let position = &mut ctx.accounts.position;
    let clock = Clock::get()?;

    // 1. Guards
    require!(!config.paused, DuelError::ProgramPaused);
    config.check_stake_amount(amount)?;
    require!(ctx.accounts.user_token.amount >= amount, DuelError::TransferFailed);

    // 2. Pool + position, rejected whole on phase or side conflict
    round.record_stake(position, side, amount)?;
    position.round = round.key();
    position.user = ctx.accounts.user.key();
    position.bump = ctx.bumps.position;

    // 3. Funds in
    transfer_stake(
        ctx.accounts.user_token.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.user.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        None,
    )?;

    if let Some(stats) = ctx.accounts.user_stats.as_mut() {
        stats.record_stake(amount, clock.unix_timestamp)?;
    }

    msg!(
        "Stake {} on {:?} in round {} (pool a={}, b={})",
        amount,
        side,
        round.round_id,
        round.pool_a,
        round.pool_b
    );

    emit!(StakePlaced {
        round_id: round.round_id,
        user: ctx.accounts.user.key(),
        side,
        amount,
        position_amount: position.amount,
        pool_a: round.pool_a,
        pool_b: round.pool_b,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
