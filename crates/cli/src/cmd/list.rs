//! List project records

use crate::util;
use anyhow::{Context, Result};
use autosave_core::ProjectStore;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub async fn run(store: Option<PathBuf>) -> Result<()> {
    let store = util::open_store(store)?;
    let records = store.list_projects().await.context("Failed to list projects")?;

    if records.is_empty() {
        println!("{}", "No projects yet. Create one with 'autosave create'.".dimmed());
        return Ok(());
    }

    for record in &records {
        util::display_record_compact(record);
    }
    Ok(())
}
