use chrono::{Duration, Local, NaiveDate};

use crate::models::settings::Settings;
use crate::utils::date::{week_days, week_start};

/// Which week the grid is showing.
///
/// Holds a single anchor date; the visible window is always derived from it
/// via the settings, so paging and "today" never disagree about alignment.
pub struct WeekNavigator {
    current_date: NaiveDate,
}

impl WeekNavigator {
    pub fn new(date: NaiveDate) -> Self {
        Self { current_date: date }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn go_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }

    pub fn go_to_previous_week(&mut self) {
        self.current_date -= Duration::weeks(1);
    }

    pub fn go_to_next_week(&mut self) {
        self.current_date += Duration::weeks(1);
    }

    /// First visible day of the current window.
    pub fn week_start(&self, settings: &Settings) -> NaiveDate {
        week_start(self.current_date, settings.first_day_of_week)
    }

    /// The visible days, in order.
    pub fn week_days(&self, settings: &Settings) -> Vec<NaiveDate> {
        week_days(self.week_start(settings), settings.visible_days)
    }

    /// Header title like "June 3 - 7, 2024", spanning months and years when
    /// the window does.
    pub fn week_title(&self, settings: &Settings) -> String {
        let days = self.week_days(settings);
        let first = days[0];
        let last = days[days.len() - 1];

        if first.format("%Y%m").to_string() == last.format("%Y%m").to_string() {
            format!(
                "{} {} - {}, {}",
                first.format("%B"),
                first.format("%-d"),
                last.format("%-d"),
                first.format("%Y")
            )
        } else if first.format("%Y").to_string() == last.format("%Y").to_string() {
            format!(
                "{} {} - {} {}, {}",
                first.format("%B"),
                first.format("%-d"),
                last.format("%B"),
                last.format("%-d"),
                first.format("%Y")
            )
        } else {
            format!(
                "{} {}, {} - {} {}, {}",
                first.format("%B"),
                first.format("%-d"),
                first.format("%Y"),
                last.format("%B"),
                last.format("%-d"),
                last.format("%Y")
            )
        }
    }
}
