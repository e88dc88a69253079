pub mod assets;
pub mod catalog_file;
pub mod cli;
pub mod config;
pub mod logging;

use std::path::{Path, PathBuf};

use reelmark_media::import::{coverage, Coverage};
use reelmark_media::metadata::AssetMetadata;
use reelmark_media::preview::{preview_for, PreviewState};
use reelmark_media::resolve::MediaResolver;
use reelmark_state::catalog::Catalog;
use reelmark_state::project::{AppState, Interaction};
use reelmark_ui::browser::BrowserAction;
use reelmark_ui::MediaLookup;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::assets::AssetIndex;
use crate::catalog_file::{demo_catalog, load_catalog, CatalogLoadError};
use crate::cli::Cli;
use crate::config::{ConfigError, Settings};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
}

pub fn startup(cli: &Cli) -> Result<(Settings, Catalog), StartupError> {
    let settings = Settings::resolve(cli)?;
    let catalog = match &settings.catalog {
        Some(path) => load_catalog(path)?,
        None => {
            info!("no catalog given, using the bundled demo catalog");
            demo_catalog()?
        }
    };
    Ok((settings, catalog))
}

/// Loads `path` into `state`. A failed load keeps the current catalog and
/// returns the message for the browser panel.
fn reload_catalog(state: &mut AppState, path: &Path) -> Option<String> {
    match load_catalog(path) {
        Ok(catalog) => {
            state.replace_catalog(catalog);
            None
        }
        Err(err) => {
            error!("{err}");
            Some(err.to_string())
        }
    }
}

pub struct ViewerApp {
    state: AppState,
    resolver: MediaResolver,
    assets: AssetIndex,
    last_missing: Option<PathBuf>,
    load_error: Option<String>,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, catalog: Catalog) -> Self {
        reelmark_ui::theme::apply_theme(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let ctx = cc.egui_ctx.clone();
        let assets = AssetIndex::new(settings.media.clone(), move || ctx.request_repaint());
        Self {
            state: AppState::new(catalog),
            resolver: MediaResolver::new(settings.media),
            assets,
            last_missing: None,
            load_error: None,
        }
    }

    fn open_catalog(&mut self, path: &Path) {
        self.load_error = reload_catalog(&mut self.state, path);
    }

    /// Probes the selected clip and reports a miss once per attempted path.
    fn refresh_selected_asset(&mut self) {
        let (path, exists) = match preview_for(&self.state, &self.resolver).asset() {
            Some(asset) => (asset.path.clone(), asset.exists),
            None => {
                self.last_missing = None;
                return;
            }
        };
        if exists {
            self.last_missing = None;
            self.assets.ensure_metadata(&path);
        } else if self.last_missing.as_ref() != Some(&path) {
            warn!(path = %path.display(), "preview clip not found");
            self.last_missing = Some(path);
        }
    }
}

struct Lookup<'a> {
    resolver: &'a MediaResolver,
    assets: &'a AssetIndex,
}

impl MediaLookup for Lookup<'_> {
    fn preview<'s>(&self, state: &'s AppState) -> PreviewState<'s> {
        preview_for(state, self.resolver)
    }

    fn metadata(&self, path: &Path) -> Option<&AssetMetadata> {
        self.assets.metadata(path)
    }

    fn coverage(&self, state: &AppState) -> Option<Coverage> {
        let entry = state.active_entry()?;
        let active = state.active()?;
        Some(coverage(
            entry.media_prefix(),
            &active.normalized.events,
            self.assets.assets(),
        ))
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.assets.poll();

        let action = egui::SidePanel::left("browser_panel")
            .width_range(180.0..=600.0)
            .default_width(280.0)
            .show(ctx, |ui| {
                let lookup = Lookup {
                    resolver: &self.resolver,
                    assets: &self.assets,
                };
                reelmark_ui::browser::browser_panel(
                    ui,
                    &self.state,
                    &lookup,
                    self.load_error.as_deref(),
                )
            })
            .inner;

        match action {
            BrowserAction::None => {}
            BrowserAction::SwitchEntry(name) => {
                self.state.apply(Interaction::SwitchEntry(name));
            }
            BrowserAction::OpenCatalog(path) => self.open_catalog(&path),
        }

        let payload = egui::TopBottomPanel::bottom("timeline_panel")
            .resizable(true)
            .height_range(120.0..=320.0)
            .default_height(190.0)
            .show(ctx, |ui| reelmark_ui::timeline::timeline_panel(ui, &self.state))
            .inner;
        // The timeline was painted with the old selection; paint again so the
        // outline follows the click.
        if self.state.apply(Interaction::Frame { payload }) {
            ctx.request_repaint();
        }
        self.refresh_selected_asset();

        let lookup = Lookup {
            resolver: &self.resolver,
            assets: &self.assets,
        };

        egui::SidePanel::right("inspector_panel")
            .width_range(200.0..=500.0)
            .default_width(280.0)
            .show(ctx, |ui| {
                reelmark_ui::inspector::inspector_panel(ui, &self.state, &lookup);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            reelmark_ui::preview::preview_panel(ui, &self.state, &lookup);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_reload_keeps_catalog_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(demo_catalog().unwrap());
        let before = state.catalog().len();

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let message = reload_catalog(&mut state, &broken).unwrap();
        assert!(message.contains("broken.json"), "{message}");
        assert_eq!(state.catalog().len(), before);

        let missing = reload_catalog(&mut state, &dir.path().join("absent.json"));
        assert!(missing.is_some());

        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"{"entries": [{"name": "Solo", "duration": "00:30"}]}"#).unwrap();
        assert_eq!(reload_catalog(&mut state, &good), None);
        assert_eq!(state.active_entry().map(|e| e.name.as_str()), Some("Solo"));
    }
}
