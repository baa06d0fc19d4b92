//! CLI layer for greeter.
//!
//! Parses the optional name with clap and writes the greeting.

pub mod commands;
pub mod parser;

pub use commands::execute;
pub use parser::Cli;
