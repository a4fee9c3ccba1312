pub mod admin;
pub mod round;
pub mod betting;
pub mod oracle;
pub mod user;

pub use admin::*;
pub use round::*;
pub use betting::*;
pub use oracle::*;
pub use user::*;
