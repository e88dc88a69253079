use std::collections::HashSet;
use std::path::{Path, PathBuf};

use reelmark_state::event::{EventId, NormalizedEvent};

use crate::resolve::asset_file_name;

/// A cache file whose name follows `{prefix}_evt_{id}_{preview}s.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetName {
    pub prefix: String,
    pub id: EventId,
    pub preview_seconds: u32,
}

/// Accepts only names the resolver would build itself, so the extension is
/// matched case-sensitively and padded or signed numbers are rejected.
pub fn parse_asset_name(file_name: &str, extension: &str) -> Option<AssetName> {
    let extension = extension.trim().trim_start_matches('.');
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;
    let split_at = stem.rfind("_evt_")?;
    let prefix = &stem[..split_at];
    let rest = &stem[split_at + "_evt_".len()..];
    let (id, preview) = rest.split_once('_')?;
    let preview = preview.strip_suffix('s')?;
    if prefix.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let name = AssetName {
        prefix: prefix.to_string(),
        id: EventId(id.parse().ok()?),
        preview_seconds: preview.parse().ok()?,
    };
    let rebuilt = asset_file_name(&name.prefix, name.id, name.preview_seconds, extension);
    (rebuilt == file_name).then_some(name)
}

/// Lists the cache files directly under `root` that follow the naming template.
pub fn scan_assets(root: &Path, extension: &str) -> Vec<(PathBuf, AssetName)> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };
    let mut results: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .filter_map(|p| {
            let name = p.file_name()?.to_str()?;
            let parsed = parse_asset_name(name, extension)?;
            Some((p, parsed))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coverage {
    pub available: usize,
    pub total: usize,
}

/// How many real events of one entry have a matching cache file.
pub fn coverage(
    prefix: &str,
    events: &[NormalizedEvent],
    assets: &[(PathBuf, AssetName)],
) -> Coverage {
    let present: HashSet<(EventId, u32)> = assets
        .iter()
        .filter(|(_, a)| a.prefix == prefix)
        .map(|(_, a)| (a.id, a.preview_seconds))
        .collect();
    let real: Vec<_> = events.iter().filter(|e| !e.is_placeholder()).collect();
    Coverage {
        available: real
            .iter()
            .filter(|e| present.contains(&(e.id, e.preview)))
            .count(),
        total: real.len(),
    }
}
