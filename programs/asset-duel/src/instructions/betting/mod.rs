pub mod place_stake;
pub mod claim_win;
pub mod close_position;

pub use place_stake::*;
pub use claim_win::*;
pub use close_position::*;
