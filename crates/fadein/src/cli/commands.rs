//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fadein - one-line story idea to five-minute screenplay
#[derive(Parser, Debug)]
#[command(name = "fadein")]
#[command(about = "Generate a five-minute screenplay from a one-line story idea", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a screenplay from a story idea
    Generate {
        /// The one-line story idea
        idea: String,

        /// Model to use (default: gemini-2.0-flash)
        #[arg(long)]
        model: Option<String>,

        /// Directory to write screenplay.txt and screenplay.fountain into
        #[arg(long)]
        out: Option<PathBuf>,

        /// Request deadline in seconds
        #[arg(long, default_value = "120")]
        timeout_secs: u64,
    },
}
