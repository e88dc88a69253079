use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use reelmark_media::import::{scan_assets, AssetName};
use reelmark_media::metadata::{probe_asset, AssetMetadata};
use reelmark_media::resolve::MediaSettings;
use tracing::{debug, warn};

/// Cached listing of the clip folder, refreshed when the folder changes.
pub struct AssetIndex {
    settings: MediaSettings,
    assets: Vec<(PathBuf, AssetName)>,
    metadata: HashMap<PathBuf, AssetMetadata>,
    change_rx: mpsc::Receiver<()>,
    watcher: Option<RecommendedWatcher>,
    /// False until the clip folder exists and the watch was attempted on it.
    root_present: bool,
}

impl AssetIndex {
    /// `on_change` runs on the watcher thread; use it to wake the UI.
    pub fn new(settings: MediaSettings, on_change: impl Fn() + Send + 'static) -> Self {
        let (tx, change_rx) = mpsc::channel();
        let watcher = notify::recommended_watcher(
            move |res: Result<notify::Event, notify::Error>| {
                let Ok(event) = res else { return };
                if matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(_)
                ) && tx.send(()).is_ok()
                {
                    on_change();
                }
            },
        );
        let watcher = match watcher {
            Ok(w) => Some(w),
            Err(err) => {
                warn!(%err, "file watcher unavailable");
                None
            }
        };

        let mut index = Self {
            settings,
            assets: Vec::new(),
            metadata: HashMap::new(),
            change_rx,
            watcher,
            root_present: false,
        };
        if index.settings.root.is_dir() {
            index.attach_watch();
        } else {
            debug!(
                root = %index.settings.root.display(),
                "clip folder does not exist yet, waiting for it"
            );
        }
        index.rescan();
        index
    }

    pub fn assets(&self) -> &[(PathBuf, AssetName)] {
        &self.assets
    }

    pub fn metadata(&self, path: &Path) -> Option<&AssetMetadata> {
        self.metadata.get(path)
    }

    /// Probes `path` once; later calls hit the cache until the folder changes.
    pub fn ensure_metadata(&mut self, path: &Path) {
        if !self.metadata.contains_key(path) {
            self.metadata.insert(path.to_path_buf(), probe_asset(path));
        }
    }

    /// Drains pending change notifications. Returns `true` if a rescan ran.
    ///
    /// While the clip folder is missing this also checks whether it has been
    /// created, and starts watching it once it has.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        if !self.root_present && self.settings.root.is_dir() {
            self.attach_watch();
            changed = true;
        }
        while self.change_rx.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.rescan();
        }
        changed
    }

    fn attach_watch(&mut self) {
        self.root_present = true;
        let Some(watcher) = self.watcher.as_mut() else {
            return;
        };
        let root = &self.settings.root;
        match watcher.watch(root, RecursiveMode::NonRecursive) {
            Ok(()) => debug!(root = %root.display(), "watching clip folder"),
            Err(err) => warn!(root = %root.display(), %err, "clip folder is not watched"),
        }
    }

    fn rescan(&mut self) {
        self.assets = scan_assets(&self.settings.root, self.settings.extension());
        self.metadata.clear();
        debug!(
            root = %self.settings.root.display(),
            clips = self.assets.len(),
            "clip folder scanned"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_and_probes_clip_folder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Red_evt_0_569s.gif"), b"not really a gif").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let settings = MediaSettings {
            root: dir.path().to_path_buf(),
            extension: "gif".to_string(),
        };
        let mut index = AssetIndex::new(settings, || {});
        assert_eq!(index.assets().len(), 1);
        assert_eq!(index.assets()[0].1.preview_seconds, 569);

        let clip = dir.path().join("Red_evt_0_569s.gif");
        assert!(index.metadata(&clip).is_none());
        index.ensure_metadata(&clip);
        assert_eq!(index.metadata(&clip).and_then(|m| m.size_bytes), Some(16));
    }

    #[test]
    fn missing_folder_is_empty_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let settings = MediaSettings {
            root: dir.path().join("gif_cache"),
            extension: "gif".to_string(),
        };
        let mut index = AssetIndex::new(settings, || {});
        assert!(index.assets().is_empty());
        assert!(!index.poll());
    }

    #[test]
    fn picks_up_a_folder_created_after_startup() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("gif_cache");
        let settings = MediaSettings {
            root: root.clone(),
            extension: "gif".to_string(),
        };
        let mut index = AssetIndex::new(settings, || {});
        assert!(!index.poll());

        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("Hades_evt_0_314s.gif"), b"x").unwrap();
        assert!(index.poll());
        assert_eq!(index.assets().len(), 1);
        assert!(index.root_present);
    }
}
