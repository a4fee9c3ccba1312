use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::constants::CONFIG_SEED;
use crate::state::Config;
use crate::errors::DuelError;

#[derive(Accounts)]
pub struct UpdateHouseWallet<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ DuelError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
    pub admin: Signer<'info>,
    #[account(
        constraint = new_house_wallet.mint == config.stake_mint @ DuelError::TokenMismatch,
    )]
    pub new_house_wallet: Account<'info, TokenAccount>,
}

pub fn update_house_wallet(ctx: Context<UpdateHouseWallet>) -> Result<()> {
    ctx.accounts.config.house_wallet = ctx.accounts.new_house_wallet.key();
    msg!("House wallet updated to {}", ctx.accounts.new_house_wallet.key());
    Ok(())
}
