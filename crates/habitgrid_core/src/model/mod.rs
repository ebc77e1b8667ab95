//! Domain records for habits and their per-day log entries.
//!
//! # Responsibility
//! - Define the habit and log record shapes shared by storage and engine.
//! - Own the status cycle state machine and the date join-key format.
//!
//! # Invariants
//! - Every (habit, date) pair maps to exactly one status; absence means
//!   `Status::Empty`.
//! - Date keys are always `YYYY-MM-DD` with zero-padded month and day.

pub mod habit;
pub mod habit_log;
