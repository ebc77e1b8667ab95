//! Core domain logic for the habitgrid monthly habit tracker.
//! This crate is the single source of truth for status and streak
//! invariants.

pub mod calendar;
pub mod db;
pub mod grid;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calendar::{day_numbers, days_in_month, CivilDate, Period};
pub use grid::{
    month_grid, plan_cell_cycle, status_of, streak, CellUpdate, GridRow, MonthGrid,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{Habit, HabitId, HabitValidationError, Priority};
pub use model::habit_log::{date_key, HabitLog, Status};
pub use repo::habit_repo::{HabitRepository, RepoError, RepoResult, SqliteHabitRepository};
pub use repo::log_repo::{HabitLogRepository, SqliteHabitLogRepository};
pub use service::grid_service::{GridService, GridServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
