//! Autosave Core - project records and the persistence seam
//!
//! This crate provides:
//! - The editable project record and its field names
//! - The `ProjectStore` trait that auto-save persists through
//! - In-memory and sled-backed stores
//! - TOML configuration for the debounce delay and store location

pub mod config;
pub mod error;
pub mod record;
pub mod store;

// Re-export main types for convenience
pub use config::{AutosaveConfig, DebounceConfig, StoreConfig};
pub use error::{ConfigError, StoreError};
pub use record::{EditableRecord, Field, ProjectId};
pub use store::{MemoryStore, ProjectStore, SledStore};
