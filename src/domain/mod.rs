mod balance;
mod command;
mod session;

pub use balance::*;
pub use command::*;
pub use session::*;
