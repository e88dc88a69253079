use egui::{pos2, vec2, Rect};
use reelmark_state::timeline::{IntervalBar, RenderModel};

pub const ROW_HEIGHT: f32 = 44.0;
pub const ROW_GAP: f32 = 2.0;
pub const ROW_HEADER_WIDTH: f32 = 70.0;
pub const RULER_HEIGHT: f32 = 24.0;
pub const MIN_BAR_WIDTH: f32 = 4.0;
pub const MIN_TICK_SPACING_PX: f32 = 70.0;

const TICK_STEPS: &[u32] = &[1, 5, 10, 15, 30, 60, 120, 300, 600, 900, 1800, 3600];

#[derive(Debug, Clone, Copy)]
pub struct TimelineGeometry {
    pub content_left: f32,
    pub content_width: f32,
    pub rows_top: f32,
    pub duration: u32,
}

impl TimelineGeometry {
    pub fn pixels_per_second(&self) -> f32 {
        self.content_width.max(0.0) / self.duration.max(1) as f32
    }

    pub fn time_to_x(&self, seconds: u32) -> f32 {
        self.content_left + seconds.min(self.duration) as f32 * self.pixels_per_second()
    }

    pub fn row_rect(&self, row: usize) -> Rect {
        let y = self.rows_top + row as f32 * (ROW_HEIGHT + ROW_GAP);
        Rect::from_min_size(pos2(self.content_left, y), vec2(self.content_width, ROW_HEIGHT))
    }

    pub fn rows_bottom(&self, rows: usize) -> f32 {
        self.rows_top + rows as f32 * (ROW_HEIGHT + ROW_GAP)
    }

    /// Screen rect for a bar, widened to stay clickable and pinned inside the
    /// content area. `None` for bars that start past the end of the domain.
    pub fn bar_rect(&self, model: &RenderModel, bar: &IntervalBar) -> Option<Rect> {
        let (start, end) = model.visible_span(bar)?;
        let row = self.row_rect(model.row_of(bar.level)).shrink2(vec2(0.0, 4.0));
        let right_edge = self.content_left + self.content_width;

        let mut x0 = self.time_to_x(start);
        let mut x1 = self.time_to_x(end).max(x0 + MIN_BAR_WIDTH);
        if x1 > right_edge {
            x1 = right_edge;
            x0 = x0.min(x1 - MIN_BAR_WIDTH);
        }
        Some(Rect::from_x_y_ranges(x0..=x1, row.y_range()))
    }
}

/// Smallest step whose ticks sit at least `MIN_TICK_SPACING_PX` apart.
pub fn tick_step(geometry: &TimelineGeometry) -> u32 {
    let pps = geometry.pixels_per_second();
    TICK_STEPS
        .iter()
        .copied()
        .find(|step| *step as f32 * pps >= MIN_TICK_SPACING_PX)
        .unwrap_or(3600)
}
