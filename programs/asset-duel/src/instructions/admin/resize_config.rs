use anchor_lang::prelude::*;
use anchor_lang::solana_program::entrypoint::MAX_PERMITTED_DATA_INCREASE;
use anchor_lang::system_program::{self, Transfer};
use crate::constants::CONFIG_SEED;
use crate::state::Config;
use crate::errors::DuelError;

#[derive(Accounts)]
pub struct ResizeConfig<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ DuelError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Grows the config account so later versions can append fields. Never shrinks it.
pub fn process_resize_config(ctx: Context<ResizeConfig>, new_size: u64) -> Result<()> {
    let config_info = ctx.accounts.config.to_account_info();
    let old_size = config_info.data_len();
    let new_size = usize::try_from(new_size).map_err(|_| DuelError::InvalidSize)?;

    require!(new_size > old_size, DuelError::InvalidSize);
    require!(
        new_size - old_size <= MAX_PERMITTED_DATA_INCREASE,
        DuelError::InvalidSize
    );

    let rent = Rent::get()?;
    let top_up = rent
        .minimum_balance(new_size)
        .saturating_sub(config_info.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.admin.to_account_info(),
                    to: config_info.clone(),
                },
            ),
            top_up,
        )?;
    }

    config_info.realloc(new_size, true)?;

    msg!("Config resized: {} -> {} bytes", old_size, new_size);
    Ok(())
}
