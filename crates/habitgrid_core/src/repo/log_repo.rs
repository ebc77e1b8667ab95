//! Habit log repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist per-day status entries keyed by (habit_id, date).
//! - Hand the engine deterministic month snapshots.
//!
//! # Invariants
//! - At most one row exists per (habit_id, date); upserts replace in place.
//! - `Status::Empty` is never persisted: clearing a cell deletes its row,
//!   so absence stays the single representation of the default state.
//! - Unrecognized stored status text normalizes to `Empty` on read.

use crate::calendar::Period;
use crate::model::habit_log::{HabitLog, Status};
use crate::repo::habit_repo::{ensure_grid_schema, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the external log store.
pub trait HabitLogRepository {
    /// Applies one status to one (habit, date) cell.
    ///
    /// `Status::Empty` clears the cell; other values insert or replace.
    fn set_status(&self, habit_id: &str, date: &str, status: Status) -> RepoResult<()>;
    /// Resolves the stored status of one cell, `Empty` when absent.
    fn status_at(&self, habit_id: &str, date: &str) -> RepoResult<Status>;
    /// Lists all entries whose date falls inside the selected period.
    fn month_logs(&self, period: Period) -> RepoResult<Vec<HabitLog>>;
}

/// SQLite-backed habit log repository.
pub struct SqliteHabitLogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHabitLogRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_grid_schema(conn)?;
        Ok(Self { conn })
    }
}

impl HabitLogRepository for SqliteHabitLogRepository<'_> {
    fn set_status(&self, habit_id: &str, date: &str, status: Status) -> RepoResult<()> {
        if status == Status::Empty {
            // Clearing an already-absent cell is a no-op, not an error.
            self.conn.execute(
                "DELETE FROM habit_logs WHERE habit_id = ?1 AND date = ?2;",
                params![habit_id, date],
            )?;
            return Ok(());
        }

        self.conn.execute(
            "INSERT INTO habit_logs (habit_id, date, status)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (habit_id, date) DO UPDATE SET
                status = excluded.status,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![habit_id, date, status.as_str()],
        )?;

        Ok(())
    }

    fn status_at(&self, habit_id: &str, date: &str) -> RepoResult<Status> {
        let mut stmt = self.conn.prepare(
            "SELECT status FROM habit_logs WHERE habit_id = ?1 AND date = ?2;",
        )?;

        let mut rows = stmt.query(params![habit_id, date])?;
        if let Some(row) = rows.next()? {
            let text: String = row.get(0)?;
            return Ok(Status::from_db(&text));
        }

        Ok(Status::Empty)
    }

    fn month_logs(&self, period: Period) -> RepoResult<Vec<HabitLog>> {
        let prefix = format!("{}-{:02}-%", period.year, period.month);
        let mut stmt = self.conn.prepare(
            "SELECT habit_id, date, status FROM habit_logs
             WHERE date LIKE ?1
             ORDER BY date ASC, habit_id ASC;",
        )?;

        let mut rows = stmt.query([prefix])?;
        let mut logs = Vec::new();
        while let Some(row) = rows.next()? {
            logs.push(parse_log_row(row)?);
        }

        Ok(logs)
    }
}

fn parse_log_row(row: &Row<'_>) -> RepoResult<HabitLog> {
    let status_text: String = row.get("status")?;

    Ok(HabitLog {
        habit_id: row.get("habit_id")?,
        date: row.get("date")?,
        status: Status::from_db(&status_text),
    })
}
