mod interaction;
mod layout;
mod rendering;

use egui::{vec2, Rect, Sense};
use reelmark_state::project::AppState;
use reelmark_state::timeline::InteractionPayload;
use tracing::debug;

use crate::theme;

use layout::*;
use rendering::*;

/// Draws the severity timeline for the active entry. Returns the payload of
/// the bar clicked during this pass, if any; the caller feeds it to the state.
pub fn timeline_panel(ui: &mut egui::Ui, state: &AppState) -> Option<InteractionPayload> {
    ui.set_min_width(0.0);
    ui.set_min_height(0.0);

    let Some(active) = state.active() else {
        ui.colored_label(theme::TEXT_DIM, "Open a catalog to see its timeline");
        return None;
    };
    let model = &active.model;

    let available = ui.available_rect_before_wrap();
    let content_height = RULER_HEIGHT + model.rows.len() as f32 * (ROW_HEIGHT + ROW_GAP);
    let timeline_rect =
        Rect::from_min_size(available.min, vec2(available.width(), content_height));
    ui.allocate_rect(timeline_rect, Sense::hover());

    let geometry = TimelineGeometry {
        content_left: timeline_rect.min.x + ROW_HEADER_WIDTH,
        content_width: (timeline_rect.width() - ROW_HEADER_WIDTH - 8.0).max(0.0),
        rows_top: timeline_rect.min.y + RULER_HEIGHT,
        duration: model.duration(),
    };

    let painter = ui.painter_at(timeline_rect);
    draw_ruler(&painter, &geometry, timeline_rect.min.y);
    draw_rows(&painter, &geometry, &model.rows, timeline_rect.min.x);

    let selection = state.selection();
    let selected_level = state.tracker().selected_level();
    let mut clicked = None;

    for (bar_index, bar) in model.bars.iter().enumerate() {
        let Some(rect) = geometry.bar_rect(model, bar) else {
            continue;
        };
        let response = interaction::bar_response(ui, rect, active.index, bar_index)
            .on_hover_text(interaction::hover_text(bar));
        let is_selected = selection.is_selected(bar.id())
            && (!bar.is_placeholder() || selected_level == Some(bar.level));
        draw_bar(&painter, rect, bar, is_selected, response.hovered());

        if response.clicked() {
            debug!(id = %bar.id(), level = %bar.level, "interval clicked");
            clicked = Some(bar.payload);
        }
    }

    draw_domain_end(
        &painter,
        &geometry,
        timeline_rect.min.y,
        geometry.rows_bottom(model.rows.len()),
    );

    clicked
}
