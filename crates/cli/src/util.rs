//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use autosave_core::{config, EditableRecord, SledStore};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Pick the store directory: explicit flag first, then config
pub fn resolve_store_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => {
            let config = config::load().context("Failed to load configuration")?;
            Ok(config.store.path)
        }
    }
}

/// Open the project database
pub fn open_store(flag: Option<PathBuf>) -> Result<Arc<SledStore>> {
    let path = resolve_store_path(flag)?;
    let store = SledStore::open(&path)
        .with_context(|| format!("Failed to open project store at {}", path.display()))?;
    Ok(Arc::new(store))
}

/// Shorten long text for one-line display
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

/// Display a record in compact one-line format
pub fn display_record_compact(record: &EditableRecord) {
    let title = if record.title.is_empty() {
        "(untitled)".dimmed().to_string()
    } else {
        truncate(&record.title, 60)
    };
    println!("{}  {}", format!("{:>6}", record.id()).yellow(), title);
}

/// Display every field of a record
pub fn display_record(record: &EditableRecord) {
    println!("{} {}", "Project".bold(), record.id().yellow());
    for field in autosave_core::Field::ALL {
        println!("  {}: {}", field.cyan(), record.get(field));
    }
}
