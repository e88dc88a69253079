use reelmark_media::preview::PreviewState;
use reelmark_state::event::NormalizedEvent;
use reelmark_state::project::AppState;
use reelmark_state::time::format_hms;

use crate::constants;
use crate::theme;
use crate::MediaLookup;

pub fn inspector_panel(ui: &mut egui::Ui, state: &AppState, media: &dyn MediaLookup) {
    ui.heading("Inspector");
    ui.separator();

    let preview = media.preview(state);
    match &preview {
        PreviewState::Hint => {
            ui.colored_label(theme::TEXT_DIM, "Select an interval on the timeline");
        }
        PreviewState::NoEventInBand(level) => {
            ui.label(egui::RichText::new(format!("{level} band")).strong());
            ui.colored_label(theme::TEXT_DIM, "No events of this severity were tagged");
        }
        PreviewState::Ready { event, asset } | PreviewState::Missing { event, asset } => {
            show_event(ui, event);
            ui.separator();
            ui.label("Clip");
            row(ui, "File", &asset.file_name());
            row(ui, "Status", if asset.exists { "cached" } else { "missing" });
            if let Some(meta) = media.metadata(&asset.path) {
                if let Some((w, h)) = meta.resolution {
                    row(ui, "Size", &format!("{w}x{h}"));
                }
                if let Some(bytes) = meta.size_bytes {
                    row(ui, "Bytes", &format!("{:.1} KiB", bytes as f64 / 1024.0));
                }
            }
        }
    }

    let Some(active) = state.active() else {
        return;
    };
    if active.normalized.warnings.is_empty() {
        return;
    }
    ui.separator();
    ui.colored_label(
        theme::WARNING,
        format!("Data warnings ({})", active.normalized.warnings.len()),
    );
    egui::ScrollArea::vertical()
        .id_salt("data_warnings")
        .show(ui, |ui| {
            for warning in &active.normalized.warnings {
                ui.colored_label(theme::TEXT_DIM, warning.to_string());
            }
        });
}

fn show_event(ui: &mut egui::Ui, event: &NormalizedEvent) {
    ui.label(egui::RichText::new(format!("Event {}", event.id)).strong());
    row(ui, "Level", event.level.label());
    if !event.keywords.is_empty() {
        row(ui, "Keywords", &event.keywords);
    }
    row(ui, "Start", &format_hms(event.start));
    row(ui, "End", &format_hms(event.end));
    row(ui, "Preview", &format!("{} ({}s)", format_hms(event.preview), event.preview));
}

fn row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [constants::INSPECTOR_LABEL_WIDTH, 16.0],
            egui::Label::new(egui::RichText::new(label).color(theme::TEXT_DIM)),
        );
        ui.label(value);
    });
}
