use anchor_lang::prelude::*;

/// Owner of every round vault. Holds no data; its PDA seeds sign vault transfers.
#[account]
#[derive(Default)]
pub struct CustodialAuthority {}

impl CustodialAuthority {
    pub const LEN: usize = 8;
}
