//! Habit repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `habits` table.
//! - Guard against connections that skipped schema bootstrap.
//!
//! # Invariants
//! - Write paths call `Habit::validate()` before SQL mutations.
//! - Habit deletion is a hard delete; log rows follow via cascade.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::habit::{Habit, HabitId, HabitValidationError, Priority};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for habit and log persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(HabitValidationError),
    Db(DbError),
    NotFound(HabitId),
    InvalidData(String),
    /// Connection has not been migrated to the supported schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "habit not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted habit data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it via db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HabitValidationError> for RepoError {
    fn from(value: HabitValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the external habit store.
pub trait HabitRepository {
    fn create_habit(&self, habit: &Habit) -> RepoResult<HabitId>;
    fn get_habit(&self, id: &str) -> RepoResult<Option<Habit>>;
    fn list_habits(&self) -> RepoResult<Vec<Habit>>;
    fn delete_habit(&self, id: &str) -> RepoResult<()>;
}

/// SQLite-backed habit repository.
pub struct SqliteHabitRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHabitRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_grid_schema(conn)?;
        Ok(Self { conn })
    }
}

impl HabitRepository for SqliteHabitRepository<'_> {
    fn create_habit(&self, habit: &Habit) -> RepoResult<HabitId> {
        habit.validate()?;

        self.conn.execute(
            "INSERT INTO habits (id, name, priority) VALUES (?1, ?2, ?3);",
            params![
                habit.id.as_str(),
                habit.name.as_str(),
                habit.priority.ordinal()
            ],
        )?;

        Ok(habit.id.clone())
    }

    fn get_habit(&self, id: &str) -> RepoResult<Option<Habit>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, priority FROM habits WHERE id = ?1;")?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_habit_row(row)?));
        }

        Ok(None)
    }

    fn list_habits(&self) -> RepoResult<Vec<Habit>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, priority FROM habits ORDER BY created_at ASC, id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut habits = Vec::new();
        while let Some(row) = rows.next()? {
            habits.push(parse_habit_row(row)?);
        }

        Ok(habits)
    }

    fn delete_habit(&self, id: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM habits WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

fn parse_habit_row(row: &Row<'_>) -> RepoResult<Habit> {
    let id: String = row.get("id")?;
    let name: String = row.get("name")?;
    if name.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "blank name in habits row `{id}`"
        )));
    }

    // Unknown ordinals normalize instead of failing the whole grid query.
    let priority = Priority::from_ordinal(row.get::<_, i64>("priority")?);

    Ok(Habit { id, name, priority })
}

/// Verifies the connection carries the migrated grid schema.
pub(crate) fn ensure_grid_schema(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in ["habits", "habit_logs"] {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}
