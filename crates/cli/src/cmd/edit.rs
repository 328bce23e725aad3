//! Apply an edit script through the auto-save form
//!
//! Edits are read from stdin and fed to the form as if typed; saves happen
//! on the debounce schedule and are reported as they land. After the script
//! ends, the command waits for the last save before exiting.

use crate::script::{self, EditCommand};
use crate::util;
use anyhow::{anyhow, bail, Context, Result};
use autosave_core::{config, ProjectId, ProjectStore};
use form::{AutoSaveForm, SaveEvent};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

/// Save outcomes seen while the script ran
#[derive(Debug, Default)]
struct Tally {
    saved: usize,
    failed: usize,
}

pub async fn run(store: Option<PathBuf>, id: u64, delay_ms: Option<u64>) -> Result<()> {
    let delay = match delay_ms {
        Some(0) => bail!("--delay-ms must be at least 1"),
        Some(millis) => Duration::from_millis(millis),
        None => config::load()
            .context("Failed to load configuration")?
            .debounce
            .delay(),
    };

    let store = util::open_store(store)?;
    let id = ProjectId(id);
    let record = store
        .get_project(id)
        .await
        .context("Failed to read project")?
        .ok_or_else(|| anyhow!("Project {} not found", id))?;

    let mut form = AutoSaveForm::new(record, store, delay);
    let reporter = tokio::spawn(report(form.subscribe()));
    debug!("Editing project {} with {:?} quiet period", id, delay);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read edit script")?
    {
        line_no += 1;
        match script::parse_line(&line).with_context(|| format!("Edit script line {}", line_no))? {
            Some(EditCommand::Set(field, value)) => form.edit(field, value),
            Some(EditCommand::Wait(pause)) => tokio::time::sleep(pause).await,
            None => {}
        }
    }

    form.settle().await;
    // Closes the event channel so the reporter finishes
    drop(form);

    let tally = reporter.await.context("Save reporter task failed")?;
    println!("{} saves, {} failed", tally.saved, tally.failed);

    if tally.failed > 0 {
        bail!("{} save(s) failed for project {}", tally.failed, id);
    }
    Ok(())
}

/// Print save events until the form is gone
async fn report(mut events: tokio::sync::broadcast::Receiver<SaveEvent>) -> Tally {
    let mut tally = Tally::default();
    loop {
        match events.recv().await {
            Ok(SaveEvent::Saved(record)) => {
                tally.saved += 1;
                println!(
                    "{} Saved project {} (title: {:?})",
                    "✓".green(),
                    record.id(),
                    record.title
                );
            }
            Ok(SaveEvent::Failed { id, error }) => {
                tally.failed += 1;
                println!("{} Failed to save project {}: {}", "✗".red(), id, error);
            }
            Err(RecvError::Lagged(missed)) => warn!("Missed {} save events", missed),
            Err(RecvError::Closed) => break,
        }
    }
    tally
}
