use super::EventStore;
use crate::models::event::CalendarEvent;
use crate::utils::date::is_same_day;
use chrono::{NaiveDate, Timelike};

impl EventStore {
    /// Events whose start falls on the given local calendar day.
    ///
    /// Date equality on the start timestamp, not an interval query; an event
    /// that runs past midnight is listed only under its start day.
    pub fn events_for_day(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|e| is_same_day(e.start, date))
            .collect()
    }

    /// Day events starting in the given hour, excluding all-day events.
    /// Used by single-hour-bucket views.
    pub fn events_for_slot(&self, date: NaiveDate, hour: u32) -> Vec<&CalendarEvent> {
        self.events_for_day(date)
            .into_iter()
            .filter(|e| e.start.hour() == hour && !e.all_day)
            .collect()
    }

    /// Day events for the timed grid (all-day events go to the ribbon lane).
    pub fn timed_events_for_day(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events_for_day(date)
            .into_iter()
            .filter(|e| !e.all_day)
            .collect()
    }

    /// Day events for the all-day lane.
    pub fn all_day_events_for_day(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events_for_day(date)
            .into_iter()
            .filter(|e| e.all_day)
            .collect()
    }

    /// Look up a single event by id.
    pub fn get(&self, id: crate::models::event::EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }
}
