use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Transfer};
use crate::errors::DuelError;

/// Moves stake tokens between two token accounts. `signer_seeds` is set when the
/// source is a vault owned by the custodial authority.
pub fn transfer_stake<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let accounts = Transfer { from, to, authority };
    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, accounts, seeds),
        None => CpiContext::new(token_program, accounts),
    };

    token::transfer(cpi_ctx, amount).map_err(|e| {
        msg!("Stake transfer of {} failed: {}", amount, e);
        error!(DuelError::TransferFailed)
    })
}

pub fn close_vault<'info>(
    vault: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token::close_account(CpiContext::new_with_signer(
        token_program,
        CloseAccount {
            account: vault,
            destination,
            authority,
        },
        signer_seeds,
    ))
}
