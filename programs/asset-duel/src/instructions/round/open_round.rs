use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, ROUND_SEED, VAULT_SEED};
use crate::state::{Config, CustodialAuthority, Phase, Round};
use crate::events::RoundOpened;
use crate::errors::DuelError;

#[derive(Accounts)]
#[instruction(round_id: u64)] // must equal config.round_count
pub struct OpenRound<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.stake_mint == stake_mint.key() @ DuelError::TokenMismatch,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        seeds = [ROUND_SEED, round_id.to_le_bytes().as_ref()],
        bump,
        payer = creator,
        space = Round::LEN
    )]
    pub round: Box<Account<'info, Round>>,

    #[account(
        init,
        seeds = [VAULT_SEED, round.key().as_ref()],
        bump,
        payer = creator,
        token::mint = stake_mint,
        token::authority = custodial_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump,
    )]
    pub custodial_authority: Account<'info, CustodialAuthority>,

    pub stake_mint: Account<'info, Mint>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn process_open_round(ctx: Context<OpenRound>, round_id: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(!config.paused, DuelError::ProgramPaused);
    require!(round_id == config.round_count, DuelError::InvalidRoundId);
    config.next_round_id()?;

    let clock = Clock::get()?;
    let round = &mut ctx.accounts.round;
    round.round_id = round_id;
    round.creator = ctx.accounts.creator.key();
    round.stake_mint = ctx.accounts.stake_mint.key();
    round.vault = ctx.accounts.vault.key();
    round.phase = Phase::Open;
    round.pool_a = 0;
    round.pool_b = 0;
    round.positions_a = 0;
    round.positions_b = 0;
    round.outcome = None;
    round.opened_at = clock.unix_timestamp;
    round.bump = ctx.bumps.round;
    round.vault_bump = ctx.bumps.vault;

    msg!("Round {} opened at {}", round_id, round.opened_at);

    emit!(RoundOpened {
        round_id,
        creator: round.creator,
        vault: round.vault,
        opened_at: round.opened_at,
    });

    Ok(())
}
