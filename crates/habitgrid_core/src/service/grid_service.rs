//! Grid use-case service.
//!
//! # Responsibility
//! - Validate selected period and day inputs at the boundary.
//! - Wire the pure grid engine to the habit and log repositories.
//! - Provide the mutation and deletion entry points the presentation layer
//!   invokes after user interaction.
//!
//! # Invariants
//! - Month inputs outside 1..=12 are rejected before any calendar
//!   resolution runs.
//! - The engine plans every cell cycle; this service only persists the
//!   planned triple.

use crate::calendar::{days_in_month, CivilDate, Period};
use crate::grid::{month_grid, plan_cell_cycle, CellUpdate, MonthGrid};
use crate::model::habit::{Habit, HabitId, Priority};
use crate::repo::habit_repo::{HabitRepository, RepoError};
use crate::repo::log_repo::HabitLogRepository;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from grid service operations.
#[derive(Debug)]
pub enum GridServiceError {
    /// Selected month is outside 1..=12.
    InvalidMonth(u32),
    /// Day does not exist in the selected month.
    InvalidDay { day: u32, days_in_month: u32 },
    /// Habit display name is blank after trim.
    InvalidHabitName,
    /// Target habit does not exist.
    HabitNotFound(HabitId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for GridServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => {
                write!(f, "month must be within 1..=12, got {month}")
            }
            Self::InvalidDay { day, days_in_month } => write!(
                f,
                "day {day} does not exist in the selected month of {days_in_month} days"
            ),
            Self::InvalidHabitName => write!(f, "habit name must not be blank"),
            Self::HabitNotFound(id) => write!(f, "habit not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GridServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for GridServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::HabitNotFound(id),
            RepoError::Validation(_) => Self::InvalidHabitName,
            other => Self::Repo(other),
        }
    }
}

/// Use-case facade over the habit and log stores.
pub struct GridService<H: HabitRepository, L: HabitLogRepository> {
    habits: H,
    logs: L,
}

impl<H: HabitRepository, L: HabitLogRepository> GridService<H, L> {
    /// Creates a service using the provided store implementations.
    pub fn new(habits: H, logs: L) -> Self {
        Self { habits, logs }
    }

    /// Creates one habit with a generated stable id.
    pub fn create_habit(
        &self,
        name: impl Into<String>,
        priority: Priority,
    ) -> Result<Habit, GridServiceError> {
        let habit = Habit::new(name, priority);
        self.habits.create_habit(&habit)?;
        info!(
            "event=habit_create module=service status=ok habit_id={}",
            habit.id
        );
        Ok(habit)
    }

    /// Lists habits in row-render order.
    pub fn habits(&self) -> Result<Vec<Habit>, GridServiceError> {
        Ok(self.habits.list_habits()?)
    }

    /// Builds the full grid snapshot for the selected period.
    pub fn month_grid(
        &self,
        period: Period,
        today: CivilDate,
    ) -> Result<MonthGrid, GridServiceError> {
        validate_month(period.month)?;

        let habits = self.habits.list_habits()?;
        let logs = self.logs.month_logs(period)?;
        Ok(month_grid(&habits, &logs, period, today))
    }

    /// Handles one cell interaction: plans the status cycle and persists it.
    ///
    /// Returns the applied (habit, date, status) triple so callers can
    /// reconcile their rendered state without another query.
    pub fn cycle_cell(
        &self,
        habit_id: &str,
        day: u32,
        period: Period,
    ) -> Result<CellUpdate, GridServiceError> {
        validate_month(period.month)?;
        let month_days = days_in_month(period.year, period.month);
        if !(1..=month_days).contains(&day) {
            return Err(GridServiceError::InvalidDay {
                day,
                days_in_month: month_days,
            });
        }

        if self.habits.get_habit(habit_id)?.is_none() {
            return Err(GridServiceError::HabitNotFound(habit_id.to_string()));
        }

        let logs = self.logs.month_logs(period)?;
        let update = plan_cell_cycle(habit_id, day, period, &logs);
        self.logs
            .set_status(&update.habit_id, &update.date, update.status)?;

        info!(
            "event=cell_cycle module=service status=ok habit_id={} date={} new_status={}",
            update.habit_id,
            update.date,
            update.status.as_str()
        );
        Ok(update)
    }

    /// Deletes one habit and, via cascade, all of its log entries.
    ///
    /// Confirmation is the presentation layer's concern; this entry point
    /// assumes the user already confirmed.
    pub fn delete_habit(&self, habit_id: &str) -> Result<(), GridServiceError> {
        self.habits.delete_habit(habit_id)?;
        info!(
            "event=habit_delete module=service status=ok habit_id={habit_id}"
        );
        Ok(())
    }
}

fn validate_month(month: u32) -> Result<(), GridServiceError> {
    if !(1..=12).contains(&month) {
        return Err(GridServiceError::InvalidMonth(month));
    }
    Ok(())
}
