// Settings module
// User-facing calendar preferences, persisted as TOML by the settings service

use serde::{Deserialize, Serialize};

/// Timezone labels offered in the top bar selector.
///
/// The label is cosmetic: stored timestamps are naive wall-clock values and
/// grid placement never re-projects them into the selected zone.
pub const AVAILABLE_TIMEZONES: [&str; 5] = [
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "UTC",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday. The week window is Monday-anchored by default.
    pub first_day_of_week: u8,
    /// Number of columns in the week window: 5 (work week) or 7.
    pub visible_days: u8,
    /// First visible hour of the timed grid (inclusive).
    pub day_start_hour: u32,
    /// Last visible hour of the timed grid (exclusive).
    pub day_end_hour: u32,
    /// Pixel height of one hour row. Fixed at runtime, not user-adjustable.
    pub hour_row_height: f32,
    /// Default start time for events created without a slot, "HH:MM".
    pub default_event_start_time: String,
    /// Default duration in minutes for newly created events.
    pub default_event_duration: u32,
    /// Display-only timezone label shown in the top bar.
    pub timezone: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 1, // Monday
            visible_days: 5,
            day_start_hour: 5,
            day_end_hour: 23,
            hour_row_height: 56.0,
            default_event_start_time: "09:00".to_string(),
            default_event_duration: 60,
            timezone: "America/New_York".to_string(),
        }
    }
}

impl Settings {
    /// Clamp loaded values to ranges the grid can actually render.
    pub fn sanitize(mut self) -> Self {
        if self.visible_days != 7 {
            self.visible_days = 5;
        }
        if self.first_day_of_week > 6 {
            self.first_day_of_week = 1;
        }
        if self.day_start_hour >= self.day_end_hour || self.day_end_hour > 24 {
            self.day_start_hour = 5;
            self.day_end_hour = 23;
        }
        if !self.hour_row_height.is_finite() || self.hour_row_height < 20.0 {
            self.hour_row_height = 56.0;
        }
        if !is_known_timezone(&self.timezone) {
            self.timezone = Settings::default().timezone;
        }
        self
    }
}

/// Whether the label names a real IANA zone.
pub fn is_known_timezone(name: &str) -> bool {
    name.parse::<chrono_tz::Tz>().is_ok()
}

/// Short label for the top bar selector ("ET", "CT", ... or the city name).
pub fn timezone_label(tz: &str) -> String {
    match tz {
        "UTC" => "UTC".to_string(),
        _ if tz.contains("New_York") => "ET".to_string(),
        _ if tz.contains("Chicago") => "CT".to_string(),
        _ if tz.contains("Denver") => "MT".to_string(),
        _ if tz.contains("Los_Angeles") => "PT".to_string(),
        _ => tz
            .rsplit('/')
            .next()
            .unwrap_or(tz)
            .replace('_', " "),
    }
}
