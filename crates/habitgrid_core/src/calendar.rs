//! Month calendar resolution for the habit grid.
//!
//! # Responsibility
//! - Resolve the ordered day sequence of a selected (year, month) pair.
//! - Carry the selected-period and current-date value types consumed by the
//!   streak engine.
//!
//! # Invariants
//! - `day_numbers` is strictly ascending and gap-free, starting at 1.
//! - Month lengths follow the Gregorian leap rule arithmetically; there is
//!   no lookup table.

use serde::{Deserialize, Serialize};

/// Externally selected (year, 1-based month) pair.
///
/// The core never caches a period; every query receives it fresh from the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    /// 1-based calendar month, caller-validated to 1..=12.
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// Calendar date used as the externally supplied "now" reference.
///
/// Streak queries take this as an input instead of reading the clock, so
/// behavior stays reproducible under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Reads today's date from the local wall clock.
    pub fn today() -> Self {
        use chrono::Datelike;

        let now = chrono::Local::now().date_naive();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    /// Returns the (year, month) component as a selected-period value.
    pub fn period(self) -> Period {
        Period::new(self.year, self.month)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Contract
/// - `month` must already be validated to 1..=12 by the caller; service
///   entry points reject out-of-range months before resolution.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");

    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns the ordered day numbers `1..=days_in_month(year, month)`.
pub fn day_numbers(year: i32, month: u32) -> Vec<u32> {
    (1..=days_in_month(year, month)).collect()
}
