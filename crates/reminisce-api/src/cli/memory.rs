//! Memory CLI commands: store, recall.

use anyhow::{Context, Result};
use console::style;

use reminisce_types::memory::{Metadata, Recollection};

use crate::state::AppState;

/// Parse `--metadata` into a JSON object.
pub fn parse_metadata(raw: Option<&str>) -> Result<Option<Metadata>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let metadata: Metadata = serde_json::from_str(raw)
        .context("--metadata must be a JSON object, e.g. '{\"tag\":\"family\"}'")?;
    Ok(Some(metadata))
}

/// Store a memory and print its document id.
pub async fn store_memory(
    state: &AppState,
    text: &str,
    metadata: Option<&str>,
    json: bool,
) -> Result<()> {
    let metadata = parse_metadata(metadata)?;
    let document_id = state.writer.store(text, metadata.as_ref()).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({"success": true, "document_id": document_id})
        );
    } else {
        println!(
            "  {} Memory stored ({})",
            style("✓").green().bold(),
            style(document_id).dim()
        );
    }

    Ok(())
}

/// Recall memories for a query and print the recollection.
pub async fn recall_memory(state: &AppState, query: &str, json: bool) -> Result<()> {
    let recollection = state.reader.recall(query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recollection)?);
    } else {
        print_recollection(&recollection);
    }

    Ok(())
}

fn print_recollection(recollection: &Recollection) {
    println!();
    for line in recollection.text.lines() {
        println!("  {line}");
    }
    println!();
    match &recollection.image {
        Some(uri) => println!(
            "  {} Image generated ({} byte data URI)",
            style("🖼").bold(),
            uri.len()
        ),
        None => println!("  {}", style("No image").dim()),
    }
    println!();
}
