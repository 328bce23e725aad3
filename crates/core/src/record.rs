//! Project record data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a project record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProjectId)
    }
}

/// A project record edited through the auto-save form
///
/// The id is fixed at construction. Text fields may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableRecord {
    id: ProjectId,
    pub title: String,
    pub subhead: String,
    pub description: String,
}

impl EditableRecord {
    /// Create a record with the given id and field values
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        subhead: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subhead: subhead.into(),
            description: description.into(),
        }
    }

    /// Create a record with all text fields empty
    pub fn empty(id: ProjectId) -> Self {
        Self::new(id, "", "", "")
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Read a text field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Subhead => &self.subhead,
            Field::Description => &self.description,
        }
    }

    /// Replace a text field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Subhead => self.subhead = value,
            Field::Description => self.description = value,
        }
    }
}

/// Editable text field of a project record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Subhead,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Subhead, Field::Description];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Subhead => "subhead",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Field::Title),
            "subhead" => Ok(Field::Subhead),
            "description" => Ok(Field::Description),
            other => Err(format!("unknown field '{}'", other)),
        }
    }
}
