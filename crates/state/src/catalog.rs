use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::time::{self, TimeParseError};

/// A point in time as authored: either whole seconds or a clock string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Seconds(u32),
    Text(String),
}

impl TimeValue {
    pub fn seconds(&self) -> u32 {
        self.try_seconds().unwrap_or(0)
    }

    pub fn try_seconds(&self) -> Result<u32, TimeParseError> {
        match self {
            TimeValue::Seconds(s) => Ok(*s),
            TimeValue::Text(raw) => time::try_parse(raw),
        }
    }

    pub fn raw(&self) -> String {
        match self {
            TimeValue::Seconds(s) => s.to_string(),
            TimeValue::Text(raw) => raw.clone(),
        }
    }
}

impl From<u32> for TimeValue {
    fn from(seconds: u32) -> Self {
        TimeValue::Seconds(seconds)
    }
}

impl From<&str> for TimeValue {
    fn from(raw: &str) -> Self {
        TimeValue::Text(raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub start: TimeValue,
    pub end: TimeValue,
    pub level: Level,
    #[serde(default)]
    pub keywords: String,
    /// Representative instant used to name the preview clip.
    pub preview: TimeValue,
}

impl RawEvent {
    pub fn new(
        start: impl Into<TimeValue>,
        end: impl Into<TimeValue>,
        level: Level,
        preview: impl Into<TimeValue>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            level,
            keywords: String::new(),
            preview: preview.into(),
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    pub duration: TimeValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_prefix: Option<String>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, duration: impl Into<TimeValue>) -> Self {
        Self {
            name: name.into(),
            summary: String::new(),
            duration: duration.into(),
            media_prefix: None,
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: RawEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration.seconds()
    }

    /// Prefix used in preview file names. Falls back to the first word of the
    /// entry name, which is how existing caches were named.
    pub fn media_prefix(&self) -> &str {
        if let Some(prefix) = self.media_prefix.as_deref().filter(|p| !p.trim().is_empty()) {
            return prefix.trim();
        }
        self.name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn first(&self) -> Option<&CatalogEntry> {
        self.entries.first()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_defaults_to_first_word() {
        let entry = CatalogEntry::new("Red Dead Redemption 2", "01:00:00");
        assert_eq!(entry.media_prefix(), "Red");

        let mut explicit = entry.clone();
        explicit.media_prefix = Some("RDR2".to_string());
        assert_eq!(explicit.media_prefix(), "RDR2");

        let mut blank = entry;
        blank.media_prefix = Some("  ".to_string());
        assert_eq!(blank.media_prefix(), "Red");
    }

    #[test]
    fn time_values_accept_seconds_or_text() {
        assert_eq!(TimeValue::from(90).seconds(), 90);
        assert_eq!(TimeValue::from("01:30").seconds(), 90);
        assert_eq!(TimeValue::from("garbage").seconds(), 0);
        assert!(TimeValue::from("garbage").try_seconds().is_err());
    }

    #[test]
    fn lookup_by_name_keeps_authoring_order() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("Hades", "60:00"),
            CatalogEntry::new("Detroit: Become Human", "30:00"),
        ]);
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Hades", "Detroit: Become Human"]);
        assert_eq!(catalog.get("Hades").map(|e| e.duration_seconds()), Some(3600));
        assert!(catalog.get("Portal").is_none());
    }
}
