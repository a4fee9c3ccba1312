use anchor_lang::prelude::*;

#[error_code]
pub enum DuelError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Round is not in the required phase")]
    InvalidPhase,
    #[msg("Phase duration has not elapsed yet")]
    TooEarly,
    #[msg("Stake outside the configured min/max")]
    AmountOutOfRange,
    #[msg("Position already holds a stake on the other side")]
    ConflictingSide,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Position is not on the winning side")]
    NotWinner,
    #[msg("Token mint does not match the configured stake token")]
    TokenMismatch,
    #[msg("Stake token transfer failed")]
    TransferFailed,
    #[msg("Oracle price unavailable")]
    OracleUnavailable,
    #[msg("Config parameter out of range")]
    InvalidConfig,
    #[msg("Invalid account size")]
    InvalidSize,
    #[msg("Program is paused")]
    ProgramPaused,
    #[msg("Round id does not match the next round")]
    InvalidRoundId,
    #[msg("Winning positions still unclaimed")]
    ClaimsOutstanding,
    #[msg("Position still has an unsettled claim")]
    PositionActive,
    #[msg("No stake in this position")]
    NoPosition,
    #[msg("House wallet does not match config")]
    HouseWalletMismatch,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
