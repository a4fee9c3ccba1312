use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, ROUND_SEED, VAULT_SEED};
use crate::state::{Config, CustodialAuthority, Round};
use crate::events::RoundClosed;
use crate::errors::DuelError;
use crate::utils::token::{close_vault, transfer_stake};

#[derive(Accounts)]
pub struct CloseRound<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.crank_authority == crank.key() @ DuelError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [ROUND_SEED, round.round_id.to_le_bytes().as_ref()],
        bump = round.bump,
        close = crank,
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

    #[account(mut)]
    pub crank: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Sweeps leftover rounding dust to the house and reclaims the round's rent once every
/// claimable position has been paid.
pub fn process_close_round(ctx: Context<CloseRound>) -> Result<()> {
    let round = &ctx.accounts.round;
    round.ensure_closable()?;
    ctx.accounts.config.confirm_house_wallet(&ctx.accounts.house_wallet.key())?;

    let bump = [ctx.accounts.config.authority_bump];
    let seeds: &[&[u8]] = &[AUTHORITY_SEED, &bump];
    let signer = &[seeds];

    let dust = ctx.accounts.vault.amount;
    transfer_stake(
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.house_wallet.to_account_info(),
        ctx.accounts.custodial_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        dust,
        Some(signer),
    )?;

    close_vault(
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.crank.to_account_info(),
        ctx.accounts.custodial_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer,
    )?;

    // Round account is closed by Anchor's `close = crank` constraint

    msg!("Round {} closed, {} dust swept", round.round_id, dust);

    emit!(RoundClosed {
        round_id: round.round_id,
        dust_swept: dust,
    });

    Ok(())
}
