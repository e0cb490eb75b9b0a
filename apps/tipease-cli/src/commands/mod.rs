//! Subcommand implementations.

pub mod advise;
pub mod config;
pub mod interactive;
pub mod split;
