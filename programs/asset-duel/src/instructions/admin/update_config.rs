use anchor_lang::prelude::*;
use crate::constants::CONFIG_SEED;
use crate::state::{Config, ConfigParams};
use crate::events::ConfigUpdated;
use crate::errors::DuelError;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ DuelError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,

    /// CHECK: Any key may be named crank authority; it only has to sign cranks.
    pub new_crank_authority: AccountInfo<'info>,
}

pub fn process_update_config(ctx: Context<UpdateConfig>, params: ConfigParams) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.apply(&params, ctx.accounts.new_crank_authority.key())?;

    msg!("Config updated to version {}", config.version);

    emit!(ConfigUpdated {
        version: config.version,
        crank_authority: config.crank_authority,
        fee_bps: config.fee_bps,
        min_stake: config.min_stake,
        max_stake: config.max_stake,
        lock_duration: config.lock_duration,
        resolve_duration: config.resolve_duration,
        odds_multiplier_bps: config.odds_multiplier_bps,
    });

    Ok(())
}
