//! Create a project record

use crate::util;
use anyhow::{Context, Result};
use autosave_core::ProjectStore;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub async fn run(
    store: Option<PathBuf>,
    title: &str,
    subhead: &str,
    description: &str,
) -> Result<()> {
    let store = util::open_store(store)?;

    let record = store
        .create_project(title, subhead, description)
        .await
        .context("Failed to create project")?;

    println!("{} Created project {}", "✓".green(), record.id());
    Ok(())
}
