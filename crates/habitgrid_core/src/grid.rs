//! Status resolution and streak computation for the monthly grid.
//!
//! # Responsibility
//! - Resolve cell statuses from caller-supplied log snapshots.
//! - Compute the running streak ending at the current day.
//! - Plan cell interactions without performing any mutation.
//!
//! # Invariants
//! - Every function is pure over its inputs; nothing is cached between
//!   calls.
//! - Duplicate (habit, date) records resolve to the first match in
//!   collection order.
//! - Streaks are nonzero only when the selected period contains `today`.

use crate::calendar::{day_numbers, CivilDate, Period};
use crate::model::habit::{Habit, HabitId};
use crate::model::habit_log::{date_key, HabitLog, Status};

/// Planned outcome of one cell interaction.
///
/// Carries exactly the (habit, date, status) triple the presentation layer
/// forwards to the mutation path; building it performs no writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub habit_id: HabitId,
    pub date: String,
    pub status: Status,
}

/// One habit row of a rendered month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub habit: Habit,
    /// Streak ending at `today`; zero outside the live month.
    pub streak: u32,
    /// Cell statuses indexed by day-of-month minus one.
    pub cells: Vec<Status>,
}

/// Full render-pass snapshot of one selected month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub days: Vec<u32>,
    pub rows: Vec<GridRow>,
}

/// Resolves the status of one habit on one date key.
///
/// Scans the snapshot in collection order; the first matching record wins
/// and a missing record reads as `Status::Empty`.
pub fn status_of(habit_id: &str, date: &str, logs: &[HabitLog]) -> Status {
    logs.iter()
        .find(|entry| entry.habit_id == habit_id && entry.date == date)
        .map_or(Status::Empty, |entry| entry.status)
}

/// Counts consecutive completions ending at `today` within the selected
/// month.
///
/// Walking backward from `today.day` to day 1: `Done` increments, `Skip` is
/// forgiven without incrementing, `Empty` stops the walk. The walk never
/// leaves the selected month.
///
/// Streaks are meaningful only for the month containing the present day:
/// any other selected period reports zero regardless of its log contents.
pub fn streak(habit_id: &str, logs: &[HabitLog], period: Period, today: CivilDate) -> u32 {
    if period != today.period() {
        return 0;
    }

    let mut count = 0;
    for day in (1..=today.day).rev() {
        match status_of(habit_id, &date_key(period, day), logs) {
            Status::Done => count += 1,
            Status::Skip => continue,
            Status::Empty => break,
        }
    }
    count
}

/// Plans one cell interaction for `day` of the selected period.
///
/// Resolves the cell's current status and returns the cycled triple for the
/// caller to persist; the engine itself never touches the store.
pub fn plan_cell_cycle(habit_id: &str, day: u32, period: Period, logs: &[HabitLog]) -> CellUpdate {
    let date = date_key(period, day);
    let status = status_of(habit_id, &date, logs).cycle();
    CellUpdate {
        habit_id: habit_id.to_string(),
        date,
        status,
    }
}

/// Builds the full grid snapshot for one selected month.
///
/// Rows preserve the habit collection order; each row carries the habit's
/// streak and one status per day of the month.
pub fn month_grid(
    habits: &[Habit],
    logs: &[HabitLog],
    period: Period,
    today: CivilDate,
) -> MonthGrid {
    let days = day_numbers(period.year, period.month);
    let rows = habits
        .iter()
        .map(|habit| GridRow {
            streak: streak(&habit.id, logs, period, today),
            cells: days
                .iter()
                .map(|&day| status_of(&habit.id, &date_key(period, day), logs))
                .collect(),
            habit: habit.clone(),
        })
        .collect();

    MonthGrid { days, rows }
}
