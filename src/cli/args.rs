//! CLI argument definitions using clap
//!
//! Commands:
//! - earlybird serve
//! - earlybird init-db

use clap::{Parser, Subcommand};

/// Earlybird - a minimal email signup capture service
#[derive(Parser, Debug)]
#[command(name = "earlybird")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve,

    /// Ensure the database schema exists, then exit
    InitDb,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
