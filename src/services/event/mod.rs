//! Calendar event store entry point.
//! Single source of truth for the active session's events, with mutation and
//! query helpers organized across focused submodules.

use crate::models::event::CalendarEvent;
use crate::services::storage::EventStorage;
use anyhow::Result;

pub mod crud;
pub mod queries;

pub use crud::EventPatch;

/// In-memory, single-writer collection of calendar events.
///
/// Constructed explicitly and passed where needed; there is no global
/// instance, so tests can run against isolated stores. The store performs no
/// validation of its own; the editor owns the form boundary.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing collection.
    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    /// Load the collection from a storage backend.
    pub fn load_from(storage: &dyn EventStorage) -> Result<Self> {
        Ok(Self {
            events: storage.load()?,
        })
    }

    /// Write the full collection to a storage backend.
    pub fn persist_to(&self, storage: &dyn EventStorage) -> Result<()> {
        storage.persist(&self.events)
    }

    /// All events, in insertion order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
