// Console capabilities the programs run against.
// Stdin/stdout back the binary; the in-memory pair backs the tests.

mod console;
mod memory;

pub use console::*;
pub use memory::*;
