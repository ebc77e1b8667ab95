//! Per-day habit log records and the tri-state status cycle.
//!
//! # Responsibility
//! - Define the persisted (habit, date, status) record.
//! - Own the `Empty -> Done -> Skip -> Empty` interaction cycle.
//! - Format the `YYYY-MM-DD` join key shared with the log store.
//!
//! # Invariants
//! - A missing log record always reads as `Status::Empty`.
//! - Unrecognized stored status text normalizes to `Status::Empty` at the
//!   boundary instead of erroring.

use crate::calendar::Period;
use crate::model::habit::HabitId;
use serde::{Deserialize, Serialize};

/// Completion state of one habit on one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Done,
    Skip,
    /// Default state; a missing log record reads as `Empty`.
    #[default]
    Empty,
}

impl Status {
    /// Advances to the next status in the interaction cycle.
    ///
    /// The cycle is `Empty -> Done -> Skip -> Empty`; applying it three
    /// times returns the starting value.
    pub fn cycle(self) -> Self {
        match self {
            Self::Empty => Self::Done,
            Self::Done => Self::Skip,
            Self::Skip => Self::Empty,
        }
    }

    /// Returns the storage text for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Skip => "skip",
            Self::Empty => "empty",
        }
    }

    /// Parses storage text, normalizing unknown values to `Empty`.
    ///
    /// External stores may hand back arbitrary text; the grid treats
    /// anything unrecognized as an absent entry.
    pub fn from_db(value: &str) -> Self {
        match value {
            "done" => Self::Done,
            "skip" => Self::Skip,
            _ => Self::Empty,
        }
    }
}

/// One persisted log entry for one habit on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitLog {
    pub habit_id: HabitId,
    /// Calendar date key in `YYYY-MM-DD` form; see [`date_key`].
    pub date: String,
    pub status: Status,
}

/// Formats the `YYYY-MM-DD` date key for one day of a selected period.
///
/// Month and day are zero-padded to two digits, the year is written as
/// given. This exact shape is the join key between grid and log store; any
/// deviation makes every lookup read as `Empty`.
pub fn date_key(period: Period, day: u32) -> String {
    format!("{}-{:02}-{:02}", period.year, period.month, day)
}
