//! Command-line surface over the glossary and directory history stores.

pub mod commands;

pub use commands::{Cli, Commands, run};
