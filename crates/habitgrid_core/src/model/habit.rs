//! Habit domain model.
//!
//! # Responsibility
//! - Define the habit record rendered as one grid row.
//! - Validate display names on write paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another habit.
//! - Persisted habits always carry a non-blank display name.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier for a habit.
///
/// Kept as a string alias: identifiers arrive from the external store and
/// double as the `habit_logs` join key.
pub type HabitId = String;

/// Ordinal habit priority shown as a row badge.
///
/// Stored as its ordinal (`normal=0`, `medium=1`, `high=2`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Normal,
    Medium,
    High,
}

impl Priority {
    /// Returns the storage ordinal for this priority.
    pub fn ordinal(self) -> i64 {
        match self {
            Self::Normal => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Maps a storage ordinal back to a priority.
    ///
    /// Unknown ordinals normalize to `Normal`; priority is row metadata and
    /// must not poison grid queries.
    pub fn from_ordinal(value: i64) -> Self {
        match value {
            1 => Self::Medium,
            2 => Self::High,
            _ => Self::Normal,
        }
    }
}

/// One tracked habit: a single row of the monthly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Stable external identifier, also the log join key.
    pub id: HabitId,
    /// Display name shown in the row header.
    pub name: String,
    pub priority: Priority,
}

/// Validation failure for habit write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitValidationError {
    /// Display name is blank after trimming.
    BlankName,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "habit name must not be blank"),
        }
    }
}

impl Error for HabitValidationError {}

impl Habit {
    /// Creates a habit with a generated stable id.
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, priority)
    }

    /// Creates a habit with a caller-provided stable id.
    ///
    /// Used where identity already exists externally (imports, tests).
    pub fn with_id(id: impl Into<HabitId>, name: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority,
        }
    }

    /// Checks write-path invariants.
    ///
    /// # Errors
    /// - `BlankName` when the display name trims to empty.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.name.trim().is_empty() {
            return Err(HabitValidationError::BlankName);
        }
        Ok(())
    }
}
