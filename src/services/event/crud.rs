use super::EventStore;
use crate::models::event::{CalendarEvent, EventColor, EventId};
use chrono::NaiveDateTime;

/// Partial update for a stored event.
///
/// Outer `Option` means "field provided"; for `description` and `location`
/// the inner `Option` distinguishes setting a value from clearing it.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub color: Option<EventColor>,
    pub all_day: Option<bool>,
}

impl EventPatch {
    /// Full overwrite of every editable field, the shape the editor saves.
    pub fn replacing(event: &CalendarEvent) -> Self {
        Self {
            title: Some(event.title.clone()),
            description: Some(event.description.clone()),
            location: Some(event.location.clone()),
            start: Some(event.start),
            end: Some(event.end),
            color: Some(event.color),
            all_day: Some(event.all_day),
        }
    }
}

impl EventStore {
    /// Append an event to the collection.
    ///
    /// No dedup by id is performed; the caller guarantees uniqueness (ids are
    /// UUIDs, so fresh events cannot collide).
    pub fn add(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    /// Merge partial fields into the matching event.
    ///
    /// Returns `false` without touching the collection when the id is stale.
    pub fn update(&mut self, id: EventId, patch: EventPatch) -> bool {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return false;
        };

        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(location) = patch.location {
            event.location = location;
        }
        if let Some(start) = patch.start {
            event.start = start;
        }
        if let Some(end) = patch.end {
            event.end = end;
        }
        if let Some(color) = patch.color {
            event.color = color;
        }
        if let Some(all_day) = patch.all_day {
            event.all_day = all_day;
        }

        true
    }

    /// Remove the matching event. Returns `false` when the id is stale.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }
}
