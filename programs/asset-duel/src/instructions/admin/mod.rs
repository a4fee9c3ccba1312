pub mod initialize;
pub mod update_config;
pub mod resize_config;
pub mod pause;
pub mod update_house_wallet;

pub use initialize::*;
pub use update_config::*;
pub use resize_config::*;
pub use pause::*;
pub use update_house_wallet::*;
