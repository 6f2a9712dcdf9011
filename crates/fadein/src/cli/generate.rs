//! Screenplay generation command handler.

use fadein_error::{FadeinResult, IoError};
use fadein_models::GeminiClient;
use fadein_screenplay::generate_screenplay;
use std::path::Path;
use std::time::Duration;

/// Filenames for the two download conventions. Byte-identical content; only
/// the extension differs.
const DOWNLOAD_FILENAMES: [&str; 2] = ["screenplay.txt", "screenplay.fountain"];

/// Run the generate command: validate input, call the model, print the
/// result, and optionally write the script to disk.
pub async fn run_generate(
    idea: &str,
    model: Option<&str>,
    out: Option<&Path>,
    timeout_secs: u64,
) -> FadeinResult<()> {
    if idea.trim().is_empty() {
        eprintln!("warning: please enter a story idea first");
        return Ok(());
    }

    let mut client = GeminiClient::from_env()?.with_timeout(Duration::from_secs(timeout_secs));
    if let Some(model) = model {
        client = client.with_model(model);
    }

    let outcome = generate_screenplay(&client, idea).await?;

    if outcome.recovered() {
        eprintln!("warning: model reply needed manual JSON extraction; review the output");
    }

    let screenplay = outcome.screenplay();

    println!("=== STORY & CREATIVE REVIEW ===\n");
    println!("{}\n", screenplay.story_review);
    println!("=== SCREENPLAY ===\n");
    println!("{}", screenplay.script);

    if let Some(dir) = out {
        write_downloads(dir, &screenplay.script)?;
    }

    Ok(())
}

/// Write the script under both plain-text conventions.
fn write_downloads(dir: &Path, script: &str) -> FadeinResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        IoError::new(format!(
            "Failed to create output directory {}: {e}",
            dir.display()
        ))
    })?;

    for filename in DOWNLOAD_FILENAMES {
        let path = dir.join(filename);
        std::fs::write(&path, script)
            .map_err(|e| IoError::new(format!("Failed to write {}: {e}", path.display())))?;
        tracing::info!(path = %path.display(), "Wrote screenplay");
    }

    Ok(())
}
