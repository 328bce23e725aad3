//! Show a project record

use crate::util;
use anyhow::{anyhow, Context, Result};
use autosave_core::{ProjectId, ProjectStore};
use std::path::PathBuf;

pub async fn run(store: Option<PathBuf>, id: u64, json: bool) -> Result<()> {
    let store = util::open_store(store)?;
    let id = ProjectId(id);

    let record = store
        .get_project(id)
        .await
        .context("Failed to read project")?
        .ok_or_else(|| anyhow!("Project {} not found", id))?;

    if json {
        let out = serde_json::to_string_pretty(&record)
            .context("Failed to serialize project")?;
        println!("{}", out);
    } else {
        util::display_record(&record);
    }
    Ok(())
}
