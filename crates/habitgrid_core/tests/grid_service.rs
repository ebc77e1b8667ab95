use habitgrid_core::db::open_db_in_memory;
use habitgrid_core::{
    CivilDate, GridService, GridServiceError, Habit, HabitRepository, Period, Priority,
    SqliteHabitLogRepository, SqliteHabitRepository, Status,
};
use rusqlite::Connection;

fn service(conn: &Connection) -> GridService<SqliteHabitRepository<'_>, SqliteHabitLogRepository<'_>> {
    GridService::new(
        SqliteHabitRepository::try_new(conn).unwrap(),
        SqliteHabitLogRepository::try_new(conn).unwrap(),
    )
}

#[test]
fn cell_interactions_walk_the_status_cycle() {
    let conn = open_db_in_memory().unwrap();
    SqliteHabitRepository::try_new(&conn)
        .unwrap()
        .create_habit(&Habit::with_id("h2", "Stretch", Priority::Normal))
        .unwrap();
    let service = service(&conn);
    let period = Period::new(2024, 6);

    let first = service.cycle_cell("h2", 5, period).unwrap();
    assert_eq!(first.habit_id, "h2");
    assert_eq!(first.date, "2024-06-05");
    assert_eq!(first.status, Status::Done);

    let second = service.cycle_cell("h2", 5, period).unwrap();
    assert_eq!(second.date, "2024-06-05");
    assert_eq!(second.status, Status::Skip);

    let third = service.cycle_cell("h2", 5, period).unwrap();
    assert_eq!(third.status, Status::Empty);

    // A full cycle clears the cell back to its default state.
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM habit_logs;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn cycle_cell_rejects_out_of_range_months_and_days() {
    let conn = open_db_in_memory().unwrap();
    SqliteHabitRepository::try_new(&conn)
        .unwrap()
        .create_habit(&Habit::with_id("h1", "Read", Priority::Normal))
        .unwrap();
    let service = service(&conn);

    let err = service.cycle_cell("h1", 5, Period::new(2024, 13)).unwrap_err();
    assert!(matches!(err, GridServiceError::InvalidMonth(13)));

    let err = service.cycle_cell("h1", 0, Period::new(2024, 6)).unwrap_err();
    assert!(matches!(err, GridServiceError::InvalidDay { day: 0, .. }));

    let err = service.cycle_cell("h1", 31, Period::new(2024, 6)).unwrap_err();
    assert!(matches!(
        err,
        GridServiceError::InvalidDay {
            day: 31,
            days_in_month: 30
        }
    ));

    // February 29 is only valid in leap years.
    assert!(service.cycle_cell("h1", 29, Period::new(2024, 2)).is_ok());
    let err = service.cycle_cell("h1", 29, Period::new(2023, 2)).unwrap_err();
    assert!(matches!(err, GridServiceError::InvalidDay { day: 29, .. }));
}

#[test]
fn cycle_cell_for_unknown_habit_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service
        .cycle_cell("ghost", 5, Period::new(2024, 6))
        .unwrap_err();
    assert!(matches!(err, GridServiceError::HabitNotFound(id) if id == "ghost"));
}

#[test]
fn create_habit_validates_the_display_name() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let habit = service.create_habit("Meditate", Priority::Medium).unwrap();
    assert!(!habit.id.is_empty());
    assert_eq!(habit.priority, Priority::Medium);

    let err = service.create_habit("   ", Priority::Normal).unwrap_err();
    assert!(matches!(err, GridServiceError::InvalidHabitName));
}

#[test]
fn month_grid_reflects_persisted_interactions() {
    let conn = open_db_in_memory().unwrap();
    SqliteHabitRepository::try_new(&conn)
        .unwrap()
        .create_habit(&Habit::with_id("h1", "Read", Priority::Normal))
        .unwrap();
    let service = service(&conn);
    let period = Period::new(2024, 6);
    let today = CivilDate::new(2024, 6, 5);

    service.cycle_cell("h1", 4, period).unwrap();
    service.cycle_cell("h1", 5, period).unwrap();

    let grid = service.month_grid(period, today).unwrap();
    assert_eq!(grid.days.len(), 30);
    assert_eq!(grid.rows.len(), 1);
    assert_eq!(grid.rows[0].cells[3], Status::Done);
    assert_eq!(grid.rows[0].cells[4], Status::Done);
    assert_eq!(grid.rows[0].streak, 2);

    let err = service
        .month_grid(Period::new(2024, 0), today)
        .unwrap_err();
    assert!(matches!(err, GridServiceError::InvalidMonth(0)));
}

#[test]
fn delete_habit_removes_its_row_from_the_grid() {
    let conn = open_db_in_memory().unwrap();
    SqliteHabitRepository::try_new(&conn)
        .unwrap()
        .create_habit(&Habit::with_id("h1", "Read", Priority::Normal))
        .unwrap();
    let service = service(&conn);
    let period = Period::new(2024, 6);
    let today = CivilDate::new(2024, 6, 5);

    service.cycle_cell("h1", 5, period).unwrap();
    service.delete_habit("h1").unwrap();

    let grid = service.month_grid(period, today).unwrap();
    assert!(grid.rows.is_empty());

    let err = service.delete_habit("h1").unwrap_err();
    assert!(matches!(err, GridServiceError::HabitNotFound(id) if id == "h1"));
}
