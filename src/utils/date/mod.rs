// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

pub fn is_same_day(datetime: NaiveDateTime, date: NaiveDate) -> bool {
    datetime.date() == date
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// The `count` consecutive days beginning at `start`.
pub fn week_days(start: NaiveDate, count: u8) -> Vec<NaiveDate> {
    (0..count as i64).map(|i| start + Duration::days(i)).collect()
}
