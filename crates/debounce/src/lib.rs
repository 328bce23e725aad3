//! Debounced scheduling for Autosave
//!
//! This crate provides a single owned scheduler that:
//! - Coalesces bursts of notifications into one delayed invocation
//! - Runs whatever action is bound when the timer fires, not when it was armed
//! - Cancels its timer on re-notify, reconfiguration or drop

pub mod scheduler;

pub use scheduler::{Action, DebounceScheduler, SchedulerState, DEFAULT_DELAY};
