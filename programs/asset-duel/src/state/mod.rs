pub mod config;
pub mod authority;
pub mod round;
pub mod position;
pub mod user_stats;

pub use config::*;
pub use authority::*;
pub use round::*;
pub use position::*;
pub use user_stats::*;
