//! Edit script parsing
//!
//! ```text
//! # comment
//! title Title A
//! wait 200
//! subhead
//! ```
//!
//! A field keyword alone sets the field to the empty string.

use anyhow::{bail, Context, Result};
use autosave_core::Field;
use std::time::Duration;

/// One line of an edit script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Replace a field value
    Set(Field, String),
    /// Pause before the next command
    Wait(Duration),
}

/// Parse one script line; blank lines and comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<EditCommand>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return Ok(None);
    }

    let line = line.trim_start();
    let (keyword, rest) = match line.find(char::is_whitespace) {
        Some(at) => {
            let sep = line[at..].chars().next().map_or(1, char::len_utf8);
            (&line[..at], &line[at + sep..])
        }
        None => (line, ""),
    };

    if keyword == "wait" {
        let millis: u64 = rest
            .trim()
            .parse()
            .with_context(|| format!("Invalid wait duration '{}'", rest.trim()))?;
        return Ok(Some(EditCommand::Wait(Duration::from_millis(millis))));
    }

    match keyword.parse::<Field>() {
        Ok(field) => Ok(Some(EditCommand::Set(field, rest.to_string()))),
        Err(_) => bail!(
            "Unknown command '{}' (expected title, subhead, description or wait)",
            keyword
        ),
    }
}
