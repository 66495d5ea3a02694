//! Persistence boundary for calendar events.
//!
//! The event store itself is purely in-memory; anything that wants events to
//! survive a restart goes through [`EventStorage`]. The desktop app uses the
//! JSON snapshot implementation, tests use [`MemoryStorage`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::models::event::CalendarEvent;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to deserialize events from {path}")]
    CorruptSnapshot {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load/persist boundary so the store can be backed by real storage without
/// changing its contract.
pub trait EventStorage {
    fn load(&self) -> Result<Vec<CalendarEvent>>;
    fn persist(&self, events: &[CalendarEvent]) -> Result<()>;
}

/// JSON snapshot of the full event collection on disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<CalendarEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read events from {}", self.path.display()))?;
        let events = serde_json::from_str(&data).map_err(|source| StorageError::CorruptSnapshot {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(events)
    }

    fn persist(&self, events: &[CalendarEvent]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(events)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write events to {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory storage for tests and for running without a profile directory.
#[derive(Default)]
pub struct MemoryStorage {
    events: Mutex<Vec<CalendarEvent>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<CalendarEvent>> {
        Ok(self.events.lock().expect("storage lock poisoned").clone())
    }

    fn persist(&self, events: &[CalendarEvent]) -> Result<()> {
        *self.events.lock().expect("storage lock poisoned") = events.to_vec();
        Ok(())
    }
}
