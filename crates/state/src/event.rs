use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CatalogEntry, TimeValue};
use crate::level::Level;

/// Stable event key: the authored index, or `-1` for a synthetic row filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub i32);

impl EventId {
    pub const PLACEHOLDER: EventId = EventId(-1);

    pub fn from_index(index: usize) -> Self {
        Self(i32::try_from(index).unwrap_or(i32::MAX))
    }

    pub fn is_placeholder(self) -> bool {
        self == Self::PLACEHOLDER
    }

    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEvent {
    pub id: EventId,
    pub level: Level,
    pub start: u32,
    pub end: u32,
    pub preview: u32,
    pub keywords: String,
}

impl NormalizedEvent {
    pub fn placeholder(level: Level) -> Self {
        Self {
            id: EventId::PLACEHOLDER,
            level,
            start: 0,
            end: 0,
            preview: 0,
            keywords: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_placeholder()
    }

    pub fn duration(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
    Preview,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeField::Start => "start",
            TimeField::End => "end",
            TimeField::Preview => "preview",
        })
    }
}

/// Authored data that was accepted as-is but looks wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataWarning {
    #[error("event {id}: malformed {field} time {raw:?}, using 0")]
    MalformedTime {
        id: EventId,
        field: TimeField,
        raw: String,
    },
    #[error("malformed entry duration {raw:?}, using 0")]
    MalformedDuration { raw: String },
    #[error("event {id}: ends at {end}s before it starts at {start}s")]
    EndBeforeStart { id: EventId, start: u32, end: u32 },
    #[error("event {id}: preview at {preview}s lies outside {start}s..{end}s")]
    PreviewOutsideInterval {
        id: EventId,
        preview: u32,
        start: u32,
        end: u32,
    },
    #[error("event {id}: ends at {end}s, past the {duration}s entry duration")]
    ExceedsDuration { id: EventId, end: u32, duration: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedCatalog {
    pub events: Vec<NormalizedEvent>,
    pub warnings: Vec<DataWarning>,
}

impl NormalizedCatalog {
    /// Looks up a real event. Placeholders share an id, so they are never
    /// returned here; use [`NormalizedCatalog::placeholder`] instead.
    pub fn get(&self, id: EventId) -> Option<&NormalizedEvent> {
        if id.is_placeholder() {
            return None;
        }
        self.events.iter().find(|e| e.id == id)
    }

    pub fn placeholder(&self, level: Level) -> Option<&NormalizedEvent> {
        self.events
            .iter()
            .find(|e| e.is_placeholder() && e.level == level)
    }

    pub fn real_events(&self) -> impl Iterator<Item = &NormalizedEvent> {
        self.events.iter().filter(|e| !e.is_placeholder())
    }
}

pub fn normalize(entry: &CatalogEntry) -> Vec<NormalizedEvent> {
    normalize_with_report(entry).events
}

/// Builds the event list for one entry: authored events first, in order, then
/// one placeholder per severity nobody authored. Nothing is dropped; odd data
/// is reported through `warnings`.
pub fn normalize_with_report(entry: &CatalogEntry) -> NormalizedCatalog {
    let mut warnings = Vec::new();
    let mut events = Vec::with_capacity(entry.events.len() + Level::ALL.len());

    let duration = match entry.duration.try_seconds() {
        Ok(seconds) => Some(seconds),
        Err(_) => {
            warnings.push(DataWarning::MalformedDuration {
                raw: entry.duration.raw(),
            });
            None
        }
    };

    for (index, raw) in entry.events.iter().enumerate() {
        let id = EventId::from_index(index);
        let mut seconds = |field: TimeField, value: &TimeValue| match value.try_seconds() {
            Ok(s) => s,
            Err(_) => {
                warnings.push(DataWarning::MalformedTime {
                    id,
                    field,
                    raw: value.raw(),
                });
                0
            }
        };
        let start = seconds(TimeField::Start, &raw.start);
        let end = seconds(TimeField::End, &raw.end);
        let preview = seconds(TimeField::Preview, &raw.preview);

        if end < start {
            warnings.push(DataWarning::EndBeforeStart { id, start, end });
        } else if preview < start || preview > end {
            warnings.push(DataWarning::PreviewOutsideInterval {
                id,
                preview,
                start,
                end,
            });
        }
        if let Some(duration) = duration.filter(|d| end > *d) {
            warnings.push(DataWarning::ExceedsDuration { id, end, duration });
        }

        events.push(NormalizedEvent {
            id,
            level: raw.level,
            start,
            end,
            preview,
            keywords: raw.keywords.clone(),
        });
    }

    for level in Level::ALL {
        if !events.iter().any(|e| e.level == level) {
            events.push(NormalizedEvent::placeholder(level));
        }
    }

    NormalizedCatalog { events, warnings }
}
