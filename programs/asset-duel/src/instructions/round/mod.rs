pub mod open_round;
pub mod close_round;

pub use open_round::*;
pub use close_round::*;
