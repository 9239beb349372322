// Application layer - the programs themselves.
// Each program is wired explicitly with its input, output and storage.

pub mod config;
pub mod error;
pub mod greeter;
pub mod session;

pub use config::*;
pub use error::*;
pub use greeter::*;
pub use session::*;
