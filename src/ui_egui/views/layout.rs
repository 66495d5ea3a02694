//! Grid geometry for the week view.
//!
//! Pure bidirectional mapping between calendar time and vertical pixels,
//! kept separate from rendering so lane packing for overlapping events could
//! be added later without touching the event store or the painter code.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::event::CalendarEvent;
use crate::models::settings::Settings;

/// Floor applied to event blocks so sub-30-minute events stay clickable.
pub const MIN_EVENT_BLOCK_HEIGHT: f32 = 20.0;

/// Geometry of an event block inside a day column, relative to the grid top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBlock {
    pub top: f32,
    pub height: f32,
}

/// Position of the now line: which visible day column, and how far down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowMarker {
    pub day_index: usize,
    pub y_offset: f32,
}

/// Fixed geometry of the timed grid. Row height and hour range come from
/// settings at construction and do not change at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    start_hour: u32,
    end_hour: u32,
    hour_height: f32,
}

impl GridMetrics {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            start_hour: settings.day_start_hour,
            end_hour: settings.day_end_hour,
            hour_height: settings.hour_row_height,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn visible_hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    pub fn grid_height(&self) -> f32 {
        self.visible_hours() as f32 * self.hour_height
    }

    /// Reverse mapping: wall-clock time to vertical offset from the grid top.
    pub fn y_offset(&self, time: NaiveTime) -> f32 {
        let hours_from_start = time.hour() as f32 - self.start_hour as f32;
        hours_from_start * self.hour_height + time.minute() as f32 / 60.0 * self.hour_height
    }

    /// Forward mapping: vertical offset to wall-clock time, quantized to the
    /// half hour (minute 0 or 30 depending on which half of the row was hit).
    pub fn time_at_offset(&self, offset: f32) -> NaiveTime {
        let clamped = offset.clamp(0.0, self.grid_height() - 0.001);
        let rows = clamped / self.hour_height;
        let hour = self.start_hour + rows.floor() as u32;
        let minute = if rows.fract() >= 0.5 { 30 } else { 0 };
        // clamp covers float edge cases at the bottom boundary
        let hour = hour.min(self.end_hour - 1);
        NaiveTime::from_hms_opt(hour, minute, 0).expect("hour within 0..24")
    }

    /// Block geometry for a timed event, anchored to its own start offset.
    ///
    /// Overlapping events keep overlapping; there is no side-by-side lane
    /// packing. All-day events have no block; they render in the ribbon.
    pub fn event_block(&self, event: &CalendarEvent) -> Option<EventBlock> {
        if event.all_day {
            return None;
        }

        let top = self.y_offset(event.start.time());
        let duration_minutes = (event.end - event.start).num_minutes().max(0) as f32;
        let height = (duration_minutes / 60.0 * self.hour_height).max(MIN_EVENT_BLOCK_HEIGHT);
        Some(EventBlock { top, height })
    }

    /// Now-line position, or `None` while the indicator is hidden: outside
    /// the visible hour range, or when today is not a visible column.
    pub fn now_marker(&self, now: NaiveDateTime, week_days: &[NaiveDate]) -> Option<NowMarker> {
        let hour = now.time().hour();
        if hour < self.start_hour || hour >= self.end_hour {
            return None;
        }

        let day_index = week_days.iter().position(|d| *d == now.date())?;
        Some(NowMarker {
            day_index,
            y_offset: self.y_offset(now.time()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::week_days;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;
    use test_case::test_case;

    fn metrics() -> GridMetrics {
        GridMetrics::from_settings(&Settings::default())
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn grid_covers_eighteen_hours() {
        let m = metrics();
        assert_eq!(m.visible_hours(), 18);
        assert_eq!(m.grid_height(), 18.0 * 56.0);
    }

    #[test_case(5, 0, 0.0; "top of grid")]
    #[test_case(8, 0, 3.0 * 56.0; "eight am")]
    #[test_case(9, 30, 4.5 * 56.0; "half hour adds half a row")]
    #[test_case(22, 0, 17.0 * 56.0; "last visible hour")]
    fn reverse_mapping(hour: u32, minute: u32, expected: f32) {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        assert!((metrics().y_offset(time) - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn forward_mapping_quantizes_to_half_hours() {
        let m = metrics();
        // A click 10px into the first row lands on the hour.
        assert_eq!(
            m.time_at_offset(10.0),
            NaiveTime::from_hms_opt(5, 0, 0).unwrap()
        );
        // The lower half of the row lands on the half hour.
        assert_eq!(
            m.time_at_offset(40.0),
            NaiveTime::from_hms_opt(5, 30, 0).unwrap()
        );
    }

    #[test]
    fn forward_mapping_clamps_to_grid_bounds() {
        let m = metrics();
        assert_eq!(
            m.time_at_offset(-15.0),
            NaiveTime::from_hms_opt(5, 0, 0).unwrap()
        );
        assert_eq!(
            m.time_at_offset(m.grid_height() + 100.0),
            NaiveTime::from_hms_opt(22, 30, 0).unwrap()
        );
    }

    #[test]
    fn short_events_keep_a_minimum_height() {
        let start = day().and_hms_opt(9, 0, 0).unwrap();
        let event =
            CalendarEvent::new("Check-in", start, start + Duration::minutes(10)).unwrap();
        let block = metrics().event_block(&event).unwrap();
        assert_eq!(block.height, MIN_EVENT_BLOCK_HEIGHT);
    }

    #[test]
    fn hour_long_event_fills_one_row() {
        let start = day().and_hms_opt(9, 0, 0).unwrap();
        let event = CalendarEvent::new("Standup", start, start + Duration::hours(1)).unwrap();
        let block = metrics().event_block(&event).unwrap();
        assert_eq!(block.top, 4.0 * 56.0);
        assert_eq!(block.height, 56.0);
    }

    #[test]
    fn all_day_events_have_no_block() {
        let start = day().and_hms_opt(0, 0, 0).unwrap();
        let event = CalendarEvent::builder()
            .title("Career Fair")
            .start(start)
            .end(start)
            .all_day(true)
            .build()
            .unwrap();
        assert!(metrics().event_block(&event).is_none());
    }

    #[test]
    fn now_marker_hidden_outside_visible_hours() {
        let days = week_days(day(), 5);
        let four_am = day().and_hms_opt(4, 0, 0).unwrap();
        assert_eq!(metrics().now_marker(four_am, &days), None);

        let eleven_pm = day().and_hms_opt(23, 0, 0).unwrap();
        assert_eq!(metrics().now_marker(eleven_pm, &days), None);
    }

    #[test]
    fn now_marker_hidden_when_today_not_visible() {
        let days = week_days(day(), 5);
        let other_week = NaiveDate::from_ymd_opt(2024, 6, 17)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(metrics().now_marker(other_week, &days), None);
    }

    #[test]
    fn now_marker_tracks_today_column_and_offset() {
        let days = week_days(day(), 5);
        let wednesday_nine_thirty = NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let marker = metrics().now_marker(wednesday_nine_thirty, &days).unwrap();
        assert_eq!(marker.day_index, 2);
        assert!((marker.y_offset - 4.5 * 56.0).abs() < f32::EPSILON);
    }

    #[test]
    fn placement_ignores_the_timezone_label() {
        let eastern = Settings::default();
        let utc = Settings {
            timezone: "UTC".to_string(),
            ..Settings::default()
        };
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(
            GridMetrics::from_settings(&eastern).y_offset(time),
            GridMetrics::from_settings(&utc).y_offset(time)
        );
    }

    proptest! {
        // Forward mapping is a left-inverse of the reverse mapping for
        // on-the-hour and on-the-half-hour times.
        #[test]
        fn slot_mapping_round_trips(hour in 5u32..23, half in 0u32..2) {
            let m = metrics();
            let time = NaiveTime::from_hms_opt(hour, half * 30, 0).unwrap();
            let offset = m.y_offset(time);
            prop_assert_eq!(m.time_at_offset(offset), time);
            // Mapping back to pixels reproduces the offset within a row.
            prop_assert!((m.y_offset(m.time_at_offset(offset)) - offset).abs() < m.hour_height());
        }
    }
}
