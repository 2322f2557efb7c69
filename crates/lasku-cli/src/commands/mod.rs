//! CLI subcommands.

pub mod extract;
pub mod vendors;
