use egui::Color32;

use crate::event::{EventId, NormalizedEvent};
use crate::level::Level;

/// What a clicked bar reports back. Carries everything the selection needs so
/// nothing has to be recovered from pixel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionPayload {
    pub id: EventId,
    pub level: Level,
    pub preview_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalBar {
    pub payload: InteractionPayload,
    pub level: Level,
    pub start: u32,
    pub end: u32,
    pub color: Color32,
    pub keywords: String,
}

impl IntervalBar {
    pub fn id(&self) -> EventId {
        self.payload.id
    }

    pub fn is_placeholder(&self) -> bool {
        self.payload.id.is_placeholder()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    /// Always `(0, total_duration)`, whatever the events span.
    pub domain: (u32, u32),
    pub rows: [Level; 3],
    pub bars: Vec<IntervalBar>,
}

impl RenderModel {
    pub fn duration(&self) -> u32 {
        self.domain.1 - self.domain.0
    }

    pub fn row_of(&self, level: Level) -> usize {
        self.rows.iter().position(|l| *l == level).unwrap_or(0)
    }

    /// Part of `bar` inside the domain, or `None` if it lies entirely past the end.
    pub fn visible_span(&self, bar: &IntervalBar) -> Option<(u32, u32)> {
        let (lo, hi) = self.domain;
        if bar.start > hi {
            return None;
        }
        let start = bar.start.clamp(lo, hi);
        let end = bar.end.clamp(start, hi);
        Some((start, end))
    }

    pub fn bar(&self, id: EventId) -> Option<&IntervalBar> {
        if id.is_placeholder() {
            return None;
        }
        self.bars.iter().find(|b| b.id() == id)
    }
}

pub fn project(events: &[NormalizedEvent], total_duration: u32) -> RenderModel {
    let bars = events
        .iter()
        .map(|event| IntervalBar {
            payload: InteractionPayload {
                id: event.id,
                level: event.level,
                preview_seconds: (!event.is_placeholder()).then_some(event.preview),
            },
            level: event.level,
            start: event.start,
            end: event.end,
            color: event.level.color(),
            keywords: event.keywords.clone(),
        })
        .collect();

    RenderModel {
        domain: (0, total_duration),
        rows: Level::ALL,
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, RawEvent};
    use crate::event::normalize;

    fn model_for(entry: &CatalogEntry) -> RenderModel {
        project(&normalize(entry), entry.duration_seconds())
    }

    #[test]
    fn every_bar_carries_its_event_id() {
        let entry = CatalogEntry::new("Detroit", "20:00")
            .with_event(RawEvent::new("02:20", "09:29", Level::Low, "02:27"))
            .with_event(RawEvent::new("15:13", "16:45", Level::Low, "16:09"));
        let model = model_for(&entry);

        assert_eq!(model.bars.len(), 4);
        assert_eq!(model.bars[0].payload.id, EventId(0));
        assert_eq!(model.bars[0].payload.preview_seconds, Some(147));
        assert_eq!(model.bars[1].payload.id, EventId(1));
        assert_eq!(model.bars[1].payload.preview_seconds, Some(969));
        assert!(model.bars[2..].iter().all(|b| b.is_placeholder()));
        assert!(model.bars[2..].iter().all(|b| b.payload.preview_seconds.is_none()));
    }

    #[test]
    fn domain_is_clamped_to_entry_duration() {
        let entry = CatalogEntry::new("Short", "00:05:00")
            .with_event(RawEvent::new("00:04:00", "00:09:00", Level::High, "00:04:30"))
            .with_event(RawEvent::new("00:07:00", "00:08:00", Level::Low, "00:07:30"));
        let model = model_for(&entry);

        assert_eq!(model.domain, (0, 300));
        assert_eq!(model.visible_span(&model.bars[0]), Some((240, 300)));
        assert_eq!(model.visible_span(&model.bars[1]), None);
    }

    #[test]
    fn domain_ignores_events_that_do_not_reach_the_edges() {
        let entry = CatalogEntry::new("Long", "01:00:00")
            .with_event(RawEvent::new("10:00", "11:00", Level::Medium, "10:30"));
        assert_eq!(model_for(&entry).domain, (0, 3600));
    }

    #[test]
    fn rows_and_colors_follow_level_order() {
        let model = model_for(&CatalogEntry::new("Empty", "01:00"));
        assert_eq!(model.rows, Level::ALL);
        assert_eq!(model.row_of(Level::High), 2);
        for bar in &model.bars {
            assert_eq!(bar.color, bar.level.color());
            assert_eq!(model.visible_span(bar), Some((0, 0)));
        }
    }

    #[test]
    fn bar_lookup_skips_placeholders() {
        let model = model_for(
            &CatalogEntry::new("One", "05:00")
                .with_event(RawEvent::new("00:10", "00:20", Level::Low, "00:15")),
        );
        assert_eq!(model.bar(EventId(0)).map(|b| b.start), Some(10));
        assert!(model.bar(EventId::PLACEHOLDER).is_none());
        assert!(model.bar(EventId(7)).is_none());
    }
}
