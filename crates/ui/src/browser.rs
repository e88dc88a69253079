use std::path::PathBuf;

use reelmark_state::project::AppState;
use reelmark_state::time::format_hms;

use crate::theme;
use crate::MediaLookup;

pub enum BrowserAction {
    None,
    SwitchEntry(String),
    OpenCatalog(PathBuf),
}

pub fn browser_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    media: &dyn MediaLookup,
    load_error: Option<&str>,
) -> BrowserAction {
    let mut action = BrowserAction::None;

    ui.horizontal(|ui| {
        ui.heading("Catalog");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Open Catalog").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Catalog", &["json"])
                    .pick_file()
                {
                    action = BrowserAction::OpenCatalog(path);
                }
            }
        });
    });
    if let Some(err) = load_error {
        ui.colored_label(theme::ERROR, err);
    }
    ui.separator();

    if state.catalog().is_empty() {
        ui.colored_label(theme::TEXT_DIM, "This catalog has no entries");
        return action;
    }

    let active_name = state.active_entry().map(|e| e.name.as_str());
    egui::ScrollArea::vertical()
        .id_salt("catalog_entries")
        .max_height(ui.available_height() * 0.45)
        .show(ui, |ui| {
            for name in state.catalog().names() {
                let is_active = active_name == Some(name);
                if ui.selectable_label(is_active, name).clicked() && !is_active {
                    action = BrowserAction::SwitchEntry(name.to_string());
                }
            }
        });

    let Some(entry) = state.active_entry() else {
        return action;
    };

    ui.separator();
    ui.label(egui::RichText::new(&entry.name).strong());
    ui.colored_label(
        theme::TEXT_DIM,
        format!("Length: {}", format_hms(entry.duration_seconds())),
    );
    ui.colored_label(
        theme::TEXT_DIM,
        format!("Media prefix: {}", entry.media_prefix()),
    );
    if let Some(coverage) = media.coverage(state) {
        let color = if coverage.available < coverage.total {
            theme::WARNING
        } else {
            theme::TEXT_DIM
        };
        ui.colored_label(
            color,
            format!("Clips cached: {} of {}", coverage.available, coverage.total),
        );
    }
    if !entry.summary.is_empty() {
        ui.add_space(6.0);
        ui.label(&entry.summary);
    }

    action
}
