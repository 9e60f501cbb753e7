//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod find_path;
mod probe;

pub use find_path::FindPath;
pub use probe::Probe;
