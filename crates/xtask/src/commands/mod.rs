//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod drill;
mod list;

pub use drill::Drill;
pub use list::List;
