//! Append-only event store
//!
//! Events are indexed twice: an ordered time index (insertion order kept
//! within a timestamp bucket) and a content-id index used for
//! de-duplication and integrity checking. Nothing is mutated or removed
//! after insertion, so a built store can be read concurrently without
//! locking.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use airtight_core::{AirtightError, AirtightResult, ContentId, EventKind, LogTime};
use tracing::debug;

use crate::{read_log_file, read_log_folder, Event, EventView};

/// The AirTight event log
#[derive(Debug, Default)]
pub struct EventLog {
    by_time: BTreeMap<LogTime, Vec<Event>>,
    by_id: HashMap<ContentId, (LogTime, usize)>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog::default()
    }

    /// Insert an event.
    ///
    /// A content-identical repeat is a no-op; a repeated id with differing
    /// content is an integrity violation.
    pub fn insert(&mut self, event: Event) -> AirtightResult<()> {
        self.insert_with_id(event.content_id(), event)
    }

    fn insert_with_id(&mut self, id: ContentId, event: Event) -> AirtightResult<()> {
        if let Some(existing) = self.get(id) {
            if existing.time == event.time && existing.value == event.value {
                return Ok(());
            }
            return Err(AirtightError::DuplicateIdConflict(id));
        }

        let bucket = self.by_time.entry(event.time).or_default();
        self.by_id.insert(id, (event.time, bucket.len()));
        bucket.push(event);
        Ok(())
    }

    /// Look up the canonical event for an id.
    pub fn get(&self, id: ContentId) -> Option<&Event> {
        let (time, index) = self.by_id.get(&id)?;
        self.by_time.get(time)?.get(*index)
    }

    /// Number of distinct events held.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Events flattened by ascending time, insertion order within a
    /// timestamp.
    pub fn timeline(&self) -> impl Iterator<Item = &Event> {
        self.by_time.values().flatten()
    }

    /// Direct view of the time index.
    pub fn time_index(&self) -> &BTreeMap<LogTime, Vec<Event>> {
        &self.by_time
    }

    /// Timeline restricted to one event kind.
    pub fn events_of_kind(&self, kind: EventKind) -> impl Iterator<Item = &Event> {
        self.timeline().filter(move |e| e.kind == kind)
    }

    /// Timeline restricted to `from..=to`.
    pub fn events_in_range(&self, from: LogTime, to: LogTime) -> impl Iterator<Item = &Event> {
        self.by_time.range(from..=to).flat_map(|(_, events)| events)
    }

    /// Build a log from a single file.
    pub fn from_file(path: &Path) -> AirtightResult<EventLog> {
        let mut log = EventLog::new();
        for record in read_log_file(path)? {
            log.insert(Event::interpret(record?)?)?;
        }
        debug!(path = %path.display(), events = log.len(), "event log loaded");
        Ok(log)
    }

    /// Build a log from every matching file in a folder.
    pub fn from_folder(path: &Path, extension: &str) -> AirtightResult<EventLog> {
        let mut log = EventLog::new();
        for record in read_log_folder(path, extension)? {
            log.insert(Event::interpret(record?)?)?;
        }
        debug!(path = %path.display(), events = log.len(), "event log loaded");
        Ok(log)
    }

    /// Flattened timeline as serializable views.
    pub fn timeline_view(&self) -> Vec<EventView> {
        self.timeline().map(Event::to_view).collect()
    }

    /// Time-indexed serializable views, keyed by the canonical timestamp
    /// text.
    pub fn time_index_view(&self) -> BTreeMap<String, Vec<EventView>> {
        self.by_time
            .iter()
            .map(|(time, events)| {
                (time.to_string(), events.iter().map(Event::to_view).collect())
            })
            .collect()
    }
}
