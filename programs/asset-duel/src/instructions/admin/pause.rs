use anchor_lang::prelude::*;
use crate::constants::CONFIG_SEED;
use crate::state::Config;
use crate::errors::DuelError;

#[derive(Accounts)]
pub struct ConfigAdmin<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ DuelError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
    pub admin: Signer<'info>,
}

// Pause only stops new rounds and new stakes

pub fn pause(ctx: Context<ConfigAdmin>) -> Result<()> {
    ctx.accounts.config.paused = true;
    msg!("Program paused");
    Ok(())
}

pub fn unpause(ctx: Context<ConfigAdmin>) -> Result<()> {
    ctx.accounts.config.paused = false;
    msg!("Program unpaused");
    Ok(())
}
