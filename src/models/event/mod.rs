// Event module
// Calendar event model shared by the store, the week grid and the editor

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique event identifier, assigned at creation time.
///
/// UUIDs rather than timestamps so rapid successive creates (or a batch
/// import) can never collide within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Display color for an event block.
///
/// The palette is a closed set; rendering maps each variant to a concrete
/// egui color in the views layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl EventColor {
    pub const ALL: [EventColor; 6] = [
        EventColor::Blue,
        EventColor::Red,
        EventColor::Green,
        EventColor::Yellow,
        EventColor::Purple,
        EventColor::Orange,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventColor::Blue => "Blue",
            EventColor::Red => "Red",
            EventColor::Green => "Green",
            EventColor::Yellow => "Yellow",
            EventColor::Purple => "Purple",
            EventColor::Orange => "Orange",
        }
    }
}

/// Calendar event with minute precision.
///
/// Timestamps are naive local wall-clock times; the timezone setting is a
/// display label and never re-projects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: EventColor,
    pub all_day: bool,
}

impl CalendarEvent {
    /// Create a new event with required fields and a fresh id.
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Returns
    /// Returns `Result<CalendarEvent, String>` with validation
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if end <= start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(Self {
            id: EventId::new(),
            title,
            description: None,
            location: None,
            start,
            end,
            color: EventColor::default(),
            all_day: false,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        // All-day events are date-only in effect; equal timestamps are fine.
        if !self.all_day && self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    color: EventColor,
    all_day: bool,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            location: None,
            start: None,
            end: None,
            color: EventColor::default(),
            all_day: false,
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the event location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the display color
    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = CalendarEvent {
            id: EventId::new(),
            title,
            description: self.description,
            location: self.location,
            start,
            end,
            color: self.color,
            all_day: self.all_day,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn sample_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn sample_end() -> NaiveDateTime {
        sample_start() + Duration::hours(1)
    }

    #[test]
    fn test_new_event_success() {
        let start = sample_start();
        let end = sample_end();
        let result = CalendarEvent::new("Meeting", start, end);

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.title, "Meeting");
        assert_eq!(event.start, start);
        assert_eq!(event.end, end);
        assert_eq!(event.color, EventColor::Blue);
        assert!(!event.all_day);
        assert!(event.description.is_none());
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = CalendarEvent::new("", sample_start(), sample_end());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title cannot be empty");
    }

    #[test]
    fn test_new_event_whitespace_title() {
        let result = CalendarEvent::new("   ", sample_start(), sample_end());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_event_invalid_times() {
        let start = sample_start();
        let end = start - Duration::hours(1);
        let result = CalendarEvent::new("Meeting", start, end);

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Event end time must be after start time"
        );
    }

    #[test]
    fn test_new_event_equal_times() {
        let start = sample_start();
        let result = CalendarEvent::new("Meeting", start, start);
        assert!(result.is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = CalendarEvent::new("A", sample_start(), sample_end()).unwrap();
        let b = CalendarEvent::new("B", sample_start(), sample_end()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_builder_basic() {
        let event = CalendarEvent::builder()
            .title("Mock Interview")
            .start(sample_start())
            .end(sample_end())
            .build()
            .unwrap();

        assert_eq!(event.title, "Mock Interview");
        assert_eq!(event.start, sample_start());
        assert_eq!(event.end, sample_end());
    }

    #[test]
    fn test_builder_with_optional_fields() {
        let event = CalendarEvent::builder()
            .title("Advisor 1:1")
            .description("Resume walkthrough")
            .location("Office 204")
            .start(sample_start())
            .end(sample_end())
            .color(EventColor::Purple)
            .build()
            .unwrap();

        assert_eq!(event.description, Some("Resume walkthrough".to_string()));
        assert_eq!(event.location, Some("Office 204".to_string()));
        assert_eq!(event.color, EventColor::Purple);
    }

    #[test]
    fn test_builder_missing_title() {
        let result = CalendarEvent::builder()
            .start(sample_start())
            .end(sample_end())
            .build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title is required");
    }

    #[test]
    fn test_builder_missing_start() {
        let result = CalendarEvent::builder()
            .title("Meeting")
            .end(sample_end())
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_all_day_event_allows_equal_times() {
        let event = CalendarEvent::builder()
            .title("Career Fair")
            .start(sample_start())
            .end(sample_start())
            .all_day(true)
            .build()
            .unwrap();

        assert!(event.all_day);
    }

    #[test]
    fn test_duration() {
        let start = sample_start();
        let end = start + Duration::hours(2);
        let event = CalendarEvent::new("Meeting", start, end).unwrap();

        assert_eq!(event.duration(), Duration::hours(2));
    }

    #[test]
    fn test_color_round_trips_through_json() {
        let event = CalendarEvent::builder()
            .title("Standup")
            .start(sample_start())
            .end(sample_end())
            .color(EventColor::Orange)
            .build()
            .unwrap();

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"orange\""));
        let back: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
