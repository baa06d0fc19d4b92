//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::greeting::DEFAULT_NAME;
use clap::Parser;

/// Greeter: prints a greeting for the given name.
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name to greet.
    #[arg(default_value = DEFAULT_NAME)]
    pub name: String,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
