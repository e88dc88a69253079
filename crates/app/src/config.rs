use std::path::{Path, PathBuf};

use reelmark_media::resolve::MediaSettings;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "reelmark.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub catalog: Option<PathBuf>,
    pub media: MediaSettings,
}

impl FileConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Reads a config file. Relative paths inside it are taken relative to
    /// the file's own directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        if let Some(catalog) = config.catalog.take() {
            config.catalog = Some(rebase(base, catalog));
        }
        config.media.root = rebase(base, std::mem::take(&mut config.media.root));
        Ok(config)
    }
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog: Option<PathBuf>,
    pub media: MediaSettings,
}

impl Settings {
    /// Config file first, command line on top.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    FileConfig::load(default)?
                } else {
                    FileConfig::default()
                }
            }
        };
        let settings = Self::merge(file, cli);
        info!(
            catalog = ?settings.catalog,
            assets = %settings.media.root.display(),
            extension = settings.media.extension(),
            "settings resolved"
        );
        Ok(settings)
    }

    pub fn merge(file: FileConfig, cli: &Cli) -> Self {
        let mut media = file.media;
        if let Some(root) = &cli.assets {
            media.root = root.clone();
        }
        if let Some(ext) = &cli.extension {
            media.extension = ext.clone();
        }
        Self {
            catalog: cli.catalog.clone().or(file.catalog),
            media,
        }
    }
}
