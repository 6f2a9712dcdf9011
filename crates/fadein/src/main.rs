//! Fadein CLI binary.
//!
//! Command-line access to the screenplay generator: turn a one-line story
//! idea into a five-minute screenplay and optionally write it to disk.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate};

    // Pick up GEMINI_API_KEY from a local .env, if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate {
            idea,
            model,
            out,
            timeout_secs,
        } => {
            run_generate(&idea, model.as_deref(), out.as_deref(), timeout_secs).await?;
        }
    }

    Ok(())
}
