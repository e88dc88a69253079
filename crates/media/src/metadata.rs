use std::path::Path;

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMetadata {
    pub resolution: Option<(u32, u32)>,
    pub size_bytes: Option<u64>,
}

/// Reads only the image header; unknown formats leave `resolution` empty.
pub fn probe_asset(path: &Path) -> AssetMetadata {
    let size_bytes = std::fs::metadata(path).ok().map(|m| m.len());
    let resolution = match image::image_dimensions(path) {
        Ok(dims) => Some(dims),
        Err(err) => {
            debug!(path = %path.display(), %err, "could not read asset dimensions");
            None
        }
    };
    AssetMetadata {
        resolution,
        size_bytes,
    }
}
