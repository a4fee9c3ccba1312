use anchor_lang::prelude::*;
use crate::errors::DuelError;
use crate::state::round::Side;

#[account]
#[derive(Default)]
pub struct Position {
    pub round: Pubkey,
    pub user: Pubkey,
    pub side: Side,
    pub amount: u64,
    pub claimed: bool,
    pub payout: u64,
    pub bump: u8,
}

impl Position {
    pub const LEN: usize = 8 + 32 + 32 + 1 + 8 + 1 + 8 + 1;

    /// A position with nothing staked has not picked a side yet.
    pub fn check_side(&self, side: Side) -> Result<()> {
        if self.amount > 0 {
            require!(self.side == side, DuelError::ConflictingSide);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::assert_duel_err;

    #[test]
    fn empty_position_accepts_either_side() {
        let position = Position::default();
        assert!(position.check_side(Side::A).is_ok());
        assert!(position.check_side(Side::B).is_ok());
    }

    #[test]
    fn funded_position_is_bound_to_its_side() {
        let position = Position { side: Side::B, amount: 1, ..Position::default() };
        assert!(position.check_side(Side::B).is_ok());
        assert_duel_err(position.check_side(Side::A), DuelError::ConflictingSide);
    }
}
