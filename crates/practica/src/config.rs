//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

/// Practica — coursework exercises toolkit.
#[derive(Parser, Debug)]
#[command(name = "practica", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Quiet mode (only output the result).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (never truncate large results).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// The three exercises.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an "hh:mm" time to its English phrase.
    Time {
        /// Time string; read from stdin when omitted.
        time: Option<String>,
    },
    /// Compute the n-th Fibonacci number.
    Fib {
        /// Index n; read from stdin when omitted.
        n: Option<u64>,
    },
    /// Test an integer for primality.
    Prime {
        /// Candidate; read from stdin when omitted.
        n: Option<u64>,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
