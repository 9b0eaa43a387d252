//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use tracing::info;

use wedding_content::{ContentStore, DynamoContentStore, TableCreation};
use wedding_models::{ContentRecord, CONTENT_RECORD_ID};

use crate::preview::{preview, PREVIEW_CHARS};
use crate::sample::SAMPLE_CONTENT;

pub async fn create_table(store: &DynamoContentStore) -> Result<()> {
    info!(table = store.table(), "Creating table");

    let outcome = store
        .create_table()
        .await
        .with_context(|| format!("failed to create table {}", store.table()))?;

    match outcome {
        TableCreation::Created => println!("Table {} created and active", store.table()),
        TableCreation::AlreadyExists => println!("Table {} already exists", store.table()),
    }
    Ok(())
}

/// Write the content record, stamping `lastUpdated` with the current time.
pub async fn update(store: &DynamoContentStore, file: Option<&Path>) -> Result<()> {
    let content = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => SAMPLE_CONTENT.to_string(),
    };

    let record = ContentRecord::stamped(CONTENT_RECORD_ID, content, Utc::now());
    store
        .put_record(&record)
        .await
        .context("failed to update wedding content")?;

    println!("Wedding content updated");
    println!("Last updated: {}", last_updated_label(record.last_updated.as_ref()));
    Ok(())
}

pub async fn get(store: &DynamoContentStore) -> Result<()> {
    let record = store
        .get_record(CONTENT_RECORD_ID)
        .await
        .context("failed to read wedding content")?;

    let Some(record) = record else {
        println!("No wedding content found");
        return Ok(());
    };

    println!("Last updated: {}", last_updated_label(record.last_updated.as_ref()));
    println!();
    println!("Content preview:");
    println!(
        "{}...",
        preview(record.html().unwrap_or_default(), PREVIEW_CHARS)
    );
    Ok(())
}

pub async fn setup(store: &DynamoContentStore) -> Result<()> {
    info!(table = store.table(), "Setting up wedding content");
    create_table(store).await?;
    update(store, None).await?;
    println!("Setup complete");
    Ok(())
}

fn last_updated_label(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_last_updated_label() {
        let stamped = json!("2024-06-15T16:00:00.000Z");
        assert_eq!(last_updated_label(Some(&stamped)), "2024-06-15T16:00:00.000Z");
        assert_eq!(last_updated_label(Some(&json!(1704067200))), "1704067200");
        assert_eq!(last_updated_label(None), "unknown");
    }
}
