pub mod lock_round;
pub mod resolve_round;

pub use lock_round::*;
pub use resolve_round::*;
