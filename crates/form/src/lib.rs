//! Auto-saving project form
//!
//! Holds the displayed state of one project record. Every edit updates that
//! state immediately, binds a save of the full record, and restarts the
//! debounce timer; the store sees one `update_project` call per quiet period.

pub mod form;

pub use form::{AutoSaveForm, SaveEvent};
