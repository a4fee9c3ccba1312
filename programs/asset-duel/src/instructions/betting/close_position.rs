use anchor_lang::prelude::*;
use crate::constants::POSITION_SEED;
use crate::state::{Position, Round};
use crate::errors::DuelError;

#[derive(Accounts)]
pub struct ClosePosition<'info> {
    /// CHECK: Must be the position's round. It may already be closed by `close_round`.
    #[account(address = position.round)]
    pub round: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POSITION_SEED, position.round.as_ref(), user.key().as_ref()],
        bump = position.bump,
        close = user,
    )]
    pub position: Account<'info, Position>,

    #[account(mut)]
    pub user: Signer<'info>,
}

pub fn process_close_position(ctx: Context<ClosePosition>) -> Result<()> {
    let round_info = ctx.accounts.round.to_account_info();

    // A closed round had every claim settled already
    if !round_info.data_is_empty() {
        require_keys_eq!(*round_info.owner, crate::ID, DuelError::InvalidPhase);
        let data = round_info.try_borrow_data()?;
        let round = Round::try_deserialize(&mut &data[..])?;
        round.ensure_position_closable(&ctx.accounts.position)?;
    }

    msg!("Position closed for {}", ctx.accounts.user.key());
    Ok(())
}
