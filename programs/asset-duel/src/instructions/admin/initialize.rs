use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use crate::constants::{AUTHORITY_SEED, CONFIG_SEED};
use crate::state::{Config, ConfigParams, CustodialAuthority};
use crate::events::ConfigInitialized;
use crate::errors::DuelError;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        seeds = [CONFIG_SEED],
        bump,
        payer = admin,
        space = Config::LEN
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        seeds = [AUTHORITY_SEED],
        bump,
        payer = admin,
        space = CustodialAuthority::LEN
    )]
    pub custodial_authority: Account<'info, CustodialAuthority>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: Only stored; compared against the signer of lock/resolve/close.
    pub crank_authority: AccountInfo<'info>,

    #[account(
        constraint = house_wallet.mint == stake_mint.key() @ DuelError::TokenMismatch,
    )]
    pub house_wallet: Account<'info, TokenAccount>,

    pub stake_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn process_initialize(
    ctx: Context<Initialize>,
    feed_a: [u8; 32],
    feed_b: [u8; 32],
) -> Result<()> {
    require!(feed_a != feed_b, DuelError::InvalidConfig);

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.house_wallet = ctx.accounts.house_wallet.key();
    config.stake_mint = ctx.accounts.stake_mint.key();
    config.feed_a = feed_a;
    config.feed_b = feed_b;
    config.paused = false;
    config.round_count = 0;
    config.version = 0;
    config.bump = ctx.bumps.config;
    config.authority_bump = ctx.bumps.custodial_authority;
    config.apply(&ConfigParams::default(), ctx.accounts.crank_authority.key())?;

    msg!("Config initialized, stake mint {}", config.stake_mint);

    emit!(ConfigInitialized {
        admin: config.admin,
        crank_authority: config.crank_authority,
        house_wallet: config.house_wallet,
        stake_mint: config.stake_mint,
        fee_bps: config.fee_bps,
    });

    Ok(())
}
