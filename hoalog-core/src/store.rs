//! The read-only event store.
//!
//! The store is loaded once at startup, either from the dataset bundled into
//! the binary or from a JSON file named in the config. Loading validates the
//! whole document up front: a bad date or a duplicated id rejects the load,
//! so every `EventStore` that exists is internally consistent.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{TimelineError, TimelineResult};
use crate::event::{Event, EventDate, EventType};
use crate::site_config::SiteConfig;

/// Dataset compiled into the binary, used when no data file is configured.
static BUNDLED_TIMELINE: &str = include_str!("../data/timeline.json");

#[derive(Deserialize)]
struct TimelineDocument {
    events: Vec<RawEvent>,
}

/// An event as it appears in the document, before its date is validated.
#[derive(Deserialize)]
struct RawEvent {
    id: String,
    date: String,
    title: String,
    description: String,
    #[serde(default)]
    images: Vec<String>,
    #[serde(rename = "type")]
    event_type: EventType,
}

impl TryFrom<RawEvent> for Event {
    type Error = TimelineError;

    fn try_from(raw: RawEvent) -> TimelineResult<Self> {
        let Some(date) = EventDate::parse(&raw.date) else {
            return Err(TimelineError::InvalidDate {
                id: raw.id,
                value: raw.date,
            });
        };

        Ok(Event {
            id: raw.id,
            date,
            title: raw.title,
            description: raw.description,
            images: raw.images,
            event_type: raw.event_type,
        })
    }
}

/// Outcome of looking up a single event by id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Event),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a Event> {
        match self {
            Lookup::Found(event) => Some(event),
            Lookup::NotFound => None,
        }
    }
}

/// Ordered, immutable collection of events with unique ids.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(events: Vec<Event>) -> TimelineResult<Self> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(TimelineError::DuplicateId(event.id.clone()));
            }
        }

        Ok(EventStore { events })
    }

    /// Parse a `{ "events": [...] }` document.
    pub fn from_json(content: &str) -> TimelineResult<Self> {
        let document: TimelineDocument = serde_json::from_str(content)?;

        let events = document
            .events
            .into_iter()
            .map(Event::try_from)
            .collect::<TimelineResult<Vec<_>>>()?;

        Self::new(events)
    }

    pub fn load(path: &Path) -> TimelineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;

        tracing::info!(path = %path.display(), events = store.len(), "loaded timeline");
        Ok(store)
    }

    /// Load the dataset bundled into the binary.
    pub fn bundled() -> TimelineResult<Self> {
        let store = Self::from_json(BUNDLED_TIMELINE)?;

        tracing::info!(events = store.len(), "loaded bundled timeline");
        Ok(store)
    }

    /// Load from the configured data file, falling back to the bundled dataset.
    pub fn from_config(config: &SiteConfig) -> TimelineResult<Self> {
        match config.data_path() {
            Some(path) => Self::load(&path),
            None => Self::bundled(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn lookup(&self, id: &str) -> Lookup<'_> {
        match self.events.iter().find(|e| e.id == id) {
            Some(event) => Lookup::Found(event),
            None => Lookup::NotFound,
        }
    }

    /// Number of events in each category, in [`EventType::ALL`] order.
    pub fn counts_by_type(&self) -> Vec<(EventType, usize)> {
        EventType::ALL
            .into_iter()
            .map(|t| (t, self.events.iter().filter(|e| e.event_type == t).count()))
            .collect()
    }
}
