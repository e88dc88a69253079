use egui::{pos2, vec2, Align2, CornerRadius, FontId, Painter, Rect, Stroke, StrokeKind};
use reelmark_state::level::Level;
use reelmark_state::time::format_clock;
use reelmark_state::timeline::IntervalBar;

use crate::theme;

use super::layout::*;

pub fn draw_ruler(painter: &Painter, geometry: &TimelineGeometry, top: f32) {
    let ruler_rect = Rect::from_min_size(
        pos2(geometry.content_left, top),
        vec2(geometry.content_width, RULER_HEIGHT),
    );
    painter.rect_filled(ruler_rect, CornerRadius::ZERO, theme::RULER_BG);

    let step = tick_step(geometry);
    let mut t = 0;
    while t <= geometry.duration {
        let x = geometry.time_to_x(t);
        painter.line_segment(
            [pos2(x, top + RULER_HEIGHT - 8.0), pos2(x, top + RULER_HEIGHT)],
            Stroke::new(1.0, theme::TEXT_DIM),
        );
        painter.text(
            pos2(x + 2.0, top + 2.0),
            Align2::LEFT_TOP,
            format_clock(t),
            FontId::monospace(9.0),
            theme::TEXT_DIM,
        );

        for sub in 1..4 {
            let sub_t = t + step * sub / 4;
            if sub_t < geometry.duration && step >= 4 {
                let sub_x = geometry.time_to_x(sub_t);
                painter.line_segment(
                    [pos2(sub_x, top + RULER_HEIGHT - 4.0), pos2(sub_x, top + RULER_HEIGHT)],
                    Stroke::new(0.5, theme::RULER_TICK),
                );
            }
        }

        let Some(next) = t.checked_add(step) else {
            break;
        };
        t = next;
    }
}

pub fn draw_rows(painter: &Painter, geometry: &TimelineGeometry, rows: &[Level], left: f32) {
    for (i, level) in rows.iter().enumerate() {
        let row = geometry.row_rect(i);
        let header = Rect::from_min_max(pos2(left, row.min.y), pos2(row.min.x, row.max.y));
        painter.rect_filled(header, CornerRadius::ZERO, theme::TRACK_HEADER_BG);
        painter.text(
            header.center(),
            Align2::CENTER_CENTER,
            level.label(),
            FontId::proportional(12.0),
            level.color(),
        );
        painter.rect_filled(row, CornerRadius::ZERO, theme::TRACK_BG);
        painter.line_segment(
            [pos2(left, row.max.y), pos2(row.max.x, row.max.y)],
            Stroke::new(1.0, theme::BORDER),
        );
    }
}

pub fn draw_bar(painter: &Painter, rect: Rect, bar: &IntervalBar, selected: bool, hovered: bool) {
    let fill = if bar.is_placeholder() {
        bar.color.gamma_multiply(0.35)
    } else {
        bar.color
    };
    painter.rect_filled(rect, theme::ROUNDING_SM, fill);

    if selected {
        painter.rect_stroke(
            rect,
            theme::ROUNDING_SM,
            Stroke::new(2.0, theme::SELECTED_OUTLINE),
            StrokeKind::Outside,
        );
    } else if hovered {
        painter.rect_stroke(
            rect,
            theme::ROUNDING_SM,
            Stroke::new(1.0, theme::TEXT_PRIMARY),
            StrokeKind::Outside,
        );
    }

    if !bar.is_placeholder() && rect.width() > 60.0 {
        painter.with_clip_rect(rect).text(
            rect.left_center() + vec2(4.0, 0.0),
            Align2::LEFT_CENTER,
            &bar.keywords,
            FontId::proportional(10.0),
            theme::BG_DARK,
        );
    }
}

pub fn draw_domain_end(painter: &Painter, geometry: &TimelineGeometry, top: f32, bottom: f32) {
    let x = geometry.time_to_x(geometry.duration);
    painter.line_segment([pos2(x, top), pos2(x, bottom)], Stroke::new(1.0, theme::ACCENT));
}
