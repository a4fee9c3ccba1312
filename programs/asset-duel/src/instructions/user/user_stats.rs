use anchor_lang::prelude::*;
use crate::constants::USER_STATS_SEED;
use crate::state::UserStats;

#[derive(Accounts)]
pub struct CreateUserStats<'info> {
    #[account(
        init,
        seeds = [USER_STATS_SEED, user.key().as_ref()],
        bump,
        payer = user,
        space = UserStats::LEN
    )]
    pub user_stats: Account<'info, UserStats>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CloseUserStats<'info> {
    #[account(
        mut,
        seeds = [USER_STATS_SEED, user.key().as_ref()],
        bump = user_stats.bump,
        close = user,
    )]
    pub user_stats: Account<'info, UserStats>,

    #[account(mut)]
    pub user: Signer<'info>,
}

pub fn process_create_user_stats(ctx: Context<CreateUserStats>) -> Result<()> {
    let stats = &mut ctx.accounts.user_stats;
    stats.user = ctx.accounts.user.key();
    stats.bump = ctx.bumps.user_stats;
    Ok(())
}

pub fn process_close_user_stats(_ctx: Context<CloseUserStats>) -> Result<()> {
    Ok(())
}
