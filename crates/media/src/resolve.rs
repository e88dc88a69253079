use std::path::{Path, PathBuf};

use reelmark_state::catalog::CatalogEntry;
use reelmark_state::event::{EventId, NormalizedCatalog, NormalizedEvent};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ASSET_ROOT: &str = "gif_cache";
pub const DEFAULT_EXTENSION: &str = "gif";

/// Answers whether a resolved asset is actually there. The resolver never
/// reads asset bytes itself.
pub trait AssetStore {
    fn exists(&self, path: &Path) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetStore;

impl AssetStore for FsAssetStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSettings {
    pub root: PathBuf,
    pub extension: String,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ASSET_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl MediaSettings {
    pub fn extension(&self) -> &str {
        self.extension.trim().trim_start_matches('.')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub path: PathBuf,
    pub exists: bool,
}

impl ResolvedAsset {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("placeholder rows have no media")]
    Placeholder,
    #[error("event {0} is not part of this entry")]
    UnknownEvent(EventId),
}

pub fn asset_file_name(prefix: &str, id: EventId, preview_seconds: u32, extension: &str) -> String {
    format!("{prefix}_evt_{}_{preview_seconds}s.{extension}", id.0)
}

#[derive(Debug, Clone)]
pub struct MediaResolver<S = FsAssetStore> {
    settings: MediaSettings,
    store: S,
}

impl MediaResolver<FsAssetStore> {
    pub fn new(settings: MediaSettings) -> Self {
        Self::with_store(settings, FsAssetStore)
    }
}

impl<S: AssetStore> MediaResolver<S> {
    pub fn with_store(settings: MediaSettings, store: S) -> Self {
        Self { settings, store }
    }

    pub fn settings(&self) -> &MediaSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn file_name(&self, entry: &CatalogEntry, event: &NormalizedEvent) -> String {
        asset_file_name(
            entry.media_prefix(),
            event.id,
            event.preview,
            self.settings.extension(),
        )
    }

    /// `{root}/{prefix}_evt_{id}_{preview}s.{ext}`. On a miss the attempted path
    /// is still returned so the caller can show it.
    pub fn resolve(
        &self,
        entry: &CatalogEntry,
        event: &NormalizedEvent,
    ) -> Result<ResolvedAsset, ResolveError> {
        if event.is_placeholder() {
            return Err(ResolveError::Placeholder);
        }
        let path = self.settings.root.join(self.file_name(entry, event));
        let exists = self.store.exists(&path);
        Ok(ResolvedAsset { path, exists })
    }

    pub fn resolve_id(
        &self,
        entry: &CatalogEntry,
        events: &NormalizedCatalog,
        id: EventId,
    ) -> Result<ResolvedAsset, ResolveError> {
        if id.is_placeholder() {
            return Err(ResolveError::Placeholder);
        }
        let event = events.get(id).ok_or(ResolveError::UnknownEvent(id))?;
        self.resolve(entry, event)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use reelmark_state::catalog::RawEvent;
    use reelmark_state::event::normalize_with_report;
    use reelmark_state::level::Level;

    use super::*;

    struct KnownPaths(HashSet<PathBuf>);

    impl AssetStore for KnownPaths {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }
    }

    fn entry() -> CatalogEntry {
        let mut entry = CatalogEntry::new("Test Game", "00:05:00").with_event(RawEvent::new(
            "00:01:00",
            "00:02:00",
            Level::Medium,
            "00:01:30",
        ));
        entry.media_prefix = Some("TG".to_string());
        entry
    }

    #[test]
    fn builds_the_documented_template() {
        let entry = entry();
        let events = normalize_with_report(&entry);
        let resolver = MediaResolver::with_store(
            MediaSettings::default(),
            KnownPaths(HashSet::new()),
        );

        let asset = resolver.resolve_id(&entry, &events, EventId(0)).unwrap();
        assert_eq!(asset.path, Path::new("gif_cache").join("TG_evt_0_90s.gif"));
        assert_eq!(asset.file_name(), "TG_evt_0_90s.gif");
        assert!(!asset.exists);
    }

    #[test]
    fn resolution_is_deterministic() {
        let entry = entry();
        let events = normalize_with_report(&entry);
        let resolver = MediaResolver::new(MediaSettings::default());
        let a = resolver.resolve_id(&entry, &events, EventId(0)).unwrap();
        let b = resolver.resolve_id(&entry, &events, EventId(0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn existence_comes_from_the_store() {
        let entry = entry();
        let events = normalize_with_report(&entry);
        let settings = MediaSettings {
            root: PathBuf::from("video_cache"),
            extension: ".mp4".to_string(),
        };
        let expected = PathBuf::from("video_cache/TG_evt_0_90s.mp4");
        let resolver =
            MediaResolver::with_store(settings, KnownPaths(HashSet::from([expected.clone()])));

        let asset = resolver.resolve_id(&entry, &events, EventId(0)).unwrap();
        assert_eq!(asset, ResolvedAsset { path: expected, exists: true });
    }

    #[test]
    fn placeholders_and_unknown_ids_do_not_resolve() {
        let entry = entry();
        let events = normalize_with_report(&entry);
        let resolver = MediaResolver::new(MediaSettings::default());

        assert_eq!(
            resolver.resolve_id(&entry, &events, EventId::PLACEHOLDER),
            Err(ResolveError::Placeholder)
        );
        assert_eq!(
            resolver.resolve_id(&entry, &events, EventId(9)),
            Err(ResolveError::UnknownEvent(EventId(9)))
        );
        let filler = events.placeholder(Level::Low).unwrap();
        assert_eq!(resolver.resolve(&entry, filler), Err(ResolveError::Placeholder));
    }

    #[test]
    fn default_prefix_is_the_first_word() {
        let entry = CatalogEntry::new("Red Dead Redemption 2", "01:00:00")
            .with_event(RawEvent::new("07:30", "11:23", Level::High, "09:29"));
        let events = normalize_with_report(&entry);
        let resolver = MediaResolver::new(MediaSettings::default());
        let asset = resolver.resolve_id(&entry, &events, EventId(0)).unwrap();
        assert_eq!(asset.file_name(), "Red_evt_0_569s.gif");
    }

    #[test]
    fn filesystem_store_sees_real_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.gif");
        assert!(!FsAssetStore.exists(&path));
        std::fs::write(&path, b"GIF89a").unwrap();
        assert!(FsAssetStore.exists(&path));
        assert!(!FsAssetStore.exists(dir.path()));
    }
}
