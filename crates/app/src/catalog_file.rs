use std::collections::HashSet;
use std::path::{Path, PathBuf};

use reelmark_state::catalog::Catalog;
use thiserror::Error;
use tracing::info;

const DEMO_CATALOG: &str = include_str!("../../../demos/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog {origin} lists entry {name:?} more than once")]
    DuplicateEntry { origin: String, name: String },
}

pub fn parse_catalog(raw: &str, origin: &str) -> Result<Catalog, CatalogLoadError> {
    let catalog: Catalog = serde_json::from_str(raw).map_err(|source| CatalogLoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    if let Some(name) = first_duplicate(&catalog) {
        return Err(CatalogLoadError::DuplicateEntry {
            origin: origin.to_string(),
            name,
        });
    }
    Ok(catalog)
}

fn first_duplicate(catalog: &Catalog) -> Option<String> {
    let mut seen = HashSet::new();
    catalog
        .names()
        .find(|name| !seen.insert(*name))
        .map(str::to_string)
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&raw, &path.display().to_string())?;
    info!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

pub fn demo_catalog() -> Result<Catalog, CatalogLoadError> {
    parse_catalog(DEMO_CATALOG, "<demo>")
}

#[cfg(test)]
mod tests {
    use reelmark_state::event::normalize;
    use reelmark_state::level::Level;

    use super::*;

    #[test]
    fn demo_catalog_parses() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            ["Red Dead Redemption 2", "Detroit: Become Human", "Hades"]
        );

        let rdr = catalog.get("Red Dead Redemption 2").unwrap();
        assert_eq!(rdr.media_prefix(), "Red");
        assert_eq!(rdr.events.len(), 5);
        assert_eq!(rdr.events[0].preview.seconds(), 569);

        let hades = normalize(catalog.get("Hades").unwrap());
        assert_eq!(hades.len(), 8);
        assert!(hades.iter().any(|e| e.is_placeholder() && e.level == Level::High));
    }

    #[test]
    fn accepts_seconds_and_optional_fields() {
        let raw = r#"{"entries": [{
            "name": "Clip",
            "duration": 300,
            "media_prefix": "CL",
            "events": [{"start": 60, "end": "02:00", "level": "medium", "preview": 90}]
        }]}"#;
        let catalog = parse_catalog(raw, "inline").unwrap();
        let entry = catalog.first().unwrap();
        assert_eq!(entry.duration_seconds(), 300);
        assert_eq!(entry.media_prefix(), "CL");
        assert!(entry.summary.is_empty());
        assert_eq!(entry.events[0].end.seconds(), 120);
        assert!(entry.events[0].keywords.is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let raw = r#"{"entries": [
            {"name": "A", "duration": "01:00"},
            {"name": "A", "duration": "02:00"}
        ]}"#;
        let err = parse_catalog(raw, "dup.json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::DuplicateEntry { ref name, .. } if name == "A"));
    }

    #[test]
    fn unknown_levels_fail_to_parse() {
        let raw = r#"{"entries": [{"name": "A", "duration": "01:00",
            "events": [{"start": 0, "end": 1, "level": "extreme", "preview": 0}]}]}"#;
        assert!(matches!(
            parse_catalog(raw, "bad"),
            Err(CatalogLoadError::Parse { .. })
        ));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        std::fs::write(&path, r#"{"entries": [{"name": "Solo", "duration": "00:30"}]}"#).unwrap();
        assert_eq!(load_catalog(&path).unwrap().len(), 1);

        let err = load_catalog(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Read { .. }));
    }
}
