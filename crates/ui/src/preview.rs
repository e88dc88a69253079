use std::path::Path;

use reelmark_media::preview::PreviewState;
use reelmark_state::project::AppState;

use crate::constants;
use crate::theme;
use crate::MediaLookup;

pub fn preview_panel(ui: &mut egui::Ui, state: &AppState, media: &dyn MediaLookup) {
    let available = ui.available_size();

    match media.preview(state) {
        PreviewState::Hint => centered(ui, available.y, |ui| {
            ui.colored_label(
                theme::TEXT_DIM,
                "Click a colored interval on the timeline to preview its clip",
            );
        }),
        PreviewState::NoEventInBand(level) => centered(ui, available.y, |ui| {
            ui.colored_label(
                theme::TEXT_PRIMARY,
                format!("No {} events in this recording", level.label().to_lowercase()),
            );
            ui.colored_label(theme::TEXT_DIM, "This row is shown so every severity is visible");
        }),
        PreviewState::Missing { asset, .. } => centered(ui, available.y, |ui| {
            ui.colored_label(theme::ERROR, "Clip not found");
            ui.label(egui::RichText::new(asset.path.display().to_string()).monospace());
        }),
        PreviewState::Ready { event, asset } => {
            ui.vertical_centered(|ui| {
                if is_displayable(&asset.path) {
                    let max = available.min(constants::PREVIEW_MAX_SIZE);
                    ui.add(
                        egui::Image::from_uri(file_uri(&asset.path))
                            .max_size(max)
                            .maintain_aspect_ratio(true),
                    );
                } else {
                    ui.colored_label(theme::TEXT_DIM, "Open this clip in an external player:");
                }
                ui.add_space(4.0);
                ui.colored_label(
                    theme::TEXT_DIM,
                    format!("Event {}: {}", event.id, asset.path.display()),
                );
            });
        }
    }
}

fn centered(ui: &mut egui::Ui, height: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space((height / 2.0 - 30.0).max(0.0));
        add_contents(ui);
    });
}

fn is_displayable(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            constants::PREVIEW_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
        })
}

fn file_uri(path: &Path) -> String {
    let abs = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", abs.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_image_formats_are_painted_inline() {
        assert!(is_displayable(Path::new("gif_cache/Red_evt_0_569s.gif")));
        assert!(is_displayable(Path::new("x/Y_evt_1_2s.GIF")));
        assert!(!is_displayable(Path::new("video_cache/Red_evt_0_569s.mp4")));
        assert!(!is_displayable(Path::new("no_extension")));
    }
}
