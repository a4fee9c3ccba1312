use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, ROUND_SEED, VAULT_SEED};
use crate::state::{Config, CustodialAuthority, Round};
use crate::events::RoundResolved;
use crate::errors::DuelError;
use crate::utils::oracle::read_price_pair;
use crate::utils::token::transfer_stake;

#[derive(Accounts)]
pub struct ResolveRound<'info> {
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
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump,
    )]
    pub custodial_authority: Account<'info, CustodialAuthority>,

    #[account(mut)]
    pub house_wallet: Account<'info, TokenAccount>,

    pub crank: Signer<'info>,

    /// Pyth price update for asset A; feed id checked against config
    pub price_feed_a: Account<'info, PriceUpdateV2>,

    /// Pyth price update for asset B
    pub price_feed_b: Account<'info, PriceUpdateV2>,

    pub token_program: Program<'info, Token>,
}

pub fn process_resolve_round(ctx: Context<ResolveRound>) -> Result<()> {
    let config = &ctx.accounts.config;
    let round = &mut ctx.accounts.round;
    let clock = Clock::get()?;

    config.confirm_crank(&ctx.accounts.crank.key())?;
    config.confirm_house_wallet(&ctx.accounts.house_wallet.key())?;
    round.ensure_resolvable(config.resolve_duration, clock.unix_timestamp)?;

    let sample = read_price_pair(
        config,
        &ctx.accounts.price_feed_a,
        &ctx.accounts.price_feed_b,
        &clock,
    )?;
    round.ensure_sample_after_lock(sample.published_at)?;
    let house_take = round.resolve(sample.prices, config.resolve_duration, config.fee_bps, clock.unix_timestamp)?;

    // Vault always holds at least the pool; anything extra is swept at close.
    require!(ctx.accounts.vault.amount >= house_take, DuelError::TransferFailed);

    let bump = [config.authority_bump];
    let seeds: &[&[u8]] = &[AUTHORITY_SEED, &bump];
    transfer_stake(
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.house_wallet.to_account_info(),
        ctx.accounts.custodial_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        house_take,
        Some(&[seeds]),
    )?;

    msg!(
        "Round {} resolved: {:?}, lock a={} b={}, end a={} b={}",
        round.round_id,
        round.outcome,
        round.lock_price_a,
        round.lock_price_b,
        round.resolve_price_a,
        round.resolve_price_b
    );

    emit!(RoundResolved {
        round_id: round.round_id,
        outcome: round.outcome.ok_or(DuelError::InvalidPhase)?,
        resolve_price_a: round.resolve_price_a,
        resolve_price_b: round.resolve_price_b,
        fee_amount: round.fee_amount,
        distributable: round.distributable,
    });

    Ok(())
}
