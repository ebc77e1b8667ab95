use habitgrid_core::{
    date_key, month_grid, plan_cell_cycle, status_of, CivilDate, Habit, HabitLog, Period,
    Priority, Status,
};

fn log(habit_id: &str, date: &str, status: Status) -> HabitLog {
    HabitLog {
        habit_id: habit_id.to_string(),
        date: date.to_string(),
        status,
    }
}

#[test]
fn status_cycle_closes_after_three_steps() {
    for status in [Status::Empty, Status::Done, Status::Skip] {
        assert_eq!(status.cycle().cycle().cycle(), status);
    }
    assert_eq!(Status::Empty.cycle(), Status::Done);
    assert_eq!(Status::Done.cycle(), Status::Skip);
    assert_eq!(Status::Skip.cycle(), Status::Empty);
}

#[test]
fn status_of_reads_empty_when_no_record_matches() {
    let logs = vec![log("h1", "2024-06-04", Status::Done)];

    assert_eq!(status_of("h1", "2024-06-05", &logs), Status::Empty);
    assert_eq!(status_of("h2", "2024-06-04", &logs), Status::Empty);
    assert_eq!(status_of("h1", "2024-06-04", &logs), Status::Done);
}

#[test]
fn duplicate_records_resolve_to_first_match_in_collection_order() {
    let logs = vec![
        log("h1", "2024-06-04", Status::Skip),
        log("h1", "2024-06-04", Status::Done),
    ];

    assert_eq!(status_of("h1", "2024-06-04", &logs), Status::Skip);
}

#[test]
fn unpadded_date_never_joins_against_padded_keys() {
    // The zero-padded key is load-bearing: a non-padded lookup must miss.
    let logs = vec![log("h1", &date_key(Period::new(2024, 6), 5), Status::Done)];

    assert_eq!(status_of("h1", "2024-06-05", &logs), Status::Done);
    assert_eq!(status_of("h1", "2024-6-5", &logs), Status::Empty);
}

#[test]
fn plan_cell_cycle_produces_the_interaction_triple() {
    let period = Period::new(2024, 6);

    let first = plan_cell_cycle("h2", 5, period, &[]);
    assert_eq!(first.habit_id, "h2");
    assert_eq!(first.date, "2024-06-05");
    assert_eq!(first.status, Status::Done);

    let logs = vec![log("h2", "2024-06-05", first.status)];
    let second = plan_cell_cycle("h2", 5, period, &logs);
    assert_eq!(second.date, "2024-06-05");
    assert_eq!(second.status, Status::Skip);
}

#[test]
fn month_grid_snapshot_aligns_rows_and_days() {
    let period = Period::new(2024, 6);
    let today = CivilDate::new(2024, 6, 5);
    let habits = vec![
        Habit::with_id("h1", "Read", Priority::High),
        Habit::with_id("h2", "Run", Priority::Normal),
    ];
    let logs = vec![
        log("h1", "2024-06-04", Status::Skip),
        log("h1", "2024-06-05", Status::Done),
        log("h2", "2024-06-01", Status::Done),
    ];

    let grid = month_grid(&habits, &logs, period, today);

    assert_eq!(grid.days.len(), 30);
    assert_eq!(grid.rows.len(), 2);

    let row_h1 = &grid.rows[0];
    assert_eq!(row_h1.habit.id, "h1");
    assert_eq!(row_h1.cells.len(), 30);
    assert_eq!(row_h1.cells[3], Status::Skip);
    assert_eq!(row_h1.cells[4], Status::Done);
    assert_eq!(row_h1.cells[5], Status::Empty);
    assert_eq!(row_h1.streak, 1);

    let row_h2 = &grid.rows[1];
    assert_eq!(row_h2.cells[0], Status::Done);
    // Day 5 and day 4 are empty for h2, so its streak is broken at today.
    assert_eq!(row_h2.streak, 0);
}

#[test]
fn month_grid_for_another_period_reports_zero_streaks() {
    let habits = vec![Habit::with_id("h1", "Read", Priority::Normal)];
    let logs = vec![log("h1", "2024-05-31", Status::Done)];

    let grid = month_grid(
        &habits,
        &logs,
        Period::new(2024, 5),
        CivilDate::new(2024, 6, 5),
    );

    assert_eq!(grid.days.len(), 31);
    assert_eq!(grid.rows[0].cells[30], Status::Done);
    assert_eq!(grid.rows[0].streak, 0);
}
