use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, POSITION_SEED, ROUND_SEED, VAULT_SEED};
use crate::state::{Config, CustodialAuthority, Position, Round};
use crate::events::WinClaimed;
use crate::errors::DuelError;
use crate::utils::token::transfer_stake;

#[derive(Accounts)]
pub struct ClaimWin<'info> {
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
        mut,
        seeds = [POSITION_SEED, round.key().as_ref(), user.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,

    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump,
    )]
    pub custodial_authority: Account<'info, CustodialAuthority>,

    #[account(
        mut,
        constraint = user_token.mint == round.stake_mint @ DuelError::TokenMismatch,
    )]
    pub user_token: Account<'info, TokenAccount>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_claim_win(ctx: Context<ClaimWin>) -> Result<()> {
    let round = &mut ctx.accounts.round;
    let position = &mut ctx.accounts.position;

    let payout = round.claim(position)?;
    require!(ctx.accounts.vault.amount >= payout, DuelError::TransferFailed);

    let bump = [ctx.accounts.config.authority_bump];
    let seeds: &[&[u8]] = &[AUTHORITY_SEED, &bump];
    transfer_stake(
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.user_token.to_account_info(),
        ctx.accounts.custodial_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        payout,
        Some(&[seeds]),
    )?;

    msg!("Round {}: paid {} to {}", round.round_id, payout, position.user);

    emit!(WinClaimed {
        round_id: round.round_id,
        user: position.user,
        amount: payout,
    });

    Ok(())
}
