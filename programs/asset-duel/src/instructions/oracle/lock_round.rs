use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::state::{Config, Round};
use crate::events::RoundLocked;
use crate::utils::oracle::read_price_pair;

#[derive(Accounts)]
pub struct LockRound<'info> {
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

    pub crank: Signer<'info>,

    /// Pyth price update for asset A; feed id checked against config
    pub price_feed_a: Account<'info, PriceUpdateV2>,

    /// Pyth price update for asset B
    pub price_feed_b: Account<'info, PriceUpdateV2>,
}

pub fn process_lock_round(ctx: Context<LockRound>) -> Result<()> {
    let config = &ctx.accounts.config;
    let round = &mut ctx.accounts.round;
    let clock = Clock::get()?;

    config.confirm_crank(&ctx.accounts.crank.key())?;
    round.ensure_lockable(config.lock_duration, clock.unix_timestamp)?;

    let sample = read_price_pair(
        config,
        &ctx.accounts.price_feed_a,
        &ctx.accounts.price_feed_b,
        &clock,
    )?;
    round.lock(sample.prices, config.lock_duration, clock.unix_timestamp)?;

    msg!("Round {} locked at {}", round.round_id, round.locked_at);

    emit!(RoundLocked {
        round_id: round.round_id,
        lock_price_a: round.lock_price_a,
        lock_price_b: round.lock_price_b,
        locked_at: round.locked_at,
    });

    Ok(())
}
