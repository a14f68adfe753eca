//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod analyze;
pub mod menu;

// Shared utilities for commands
pub(crate) mod util;
