use egui::{Id, Rect, Response, Sense};
use reelmark_state::time::format_clock;
use reelmark_state::timeline::IntervalBar;

/// Registers a click target for one bar. The id is derived from the entry and
/// the bar's position in the model so it survives repaints unchanged.
pub fn bar_response(ui: &egui::Ui, rect: Rect, entry_index: usize, bar_index: usize) -> Response {
    ui.interact(
        rect,
        Id::new(("interval_bar", entry_index, bar_index)),
        Sense::click(),
    )
}

pub fn hover_text(bar: &IntervalBar) -> String {
    if bar.is_placeholder() {
        return format!("No {} events in this recording", bar.level.label().to_lowercase());
    }
    let mut text = format!(
        "Event {}  {} - {}\n{}",
        bar.id(),
        format_clock(bar.start),
        format_clock(bar.end),
        bar.level.label(),
    );
    if !bar.keywords.is_empty() {
        text.push_str(": ");
        text.push_str(&bar.keywords);
    }
    text
}

#[cfg(test)]
mod tests {
    use reelmark_state::event::EventId;
    use reelmark_state::level::Level;
    use reelmark_state::timeline::InteractionPayload;

    use super::*;

    fn bar(id: i32, keywords: &str) -> IntervalBar {
        IntervalBar {
            payload: InteractionPayload {
                id: EventId(id),
                level: Level::High,
                preview_seconds: None,
            },
            level: Level::High,
            start: 450,
            end: 683,
            color: Level::High.color(),
            keywords: keywords.to_string(),
        }
    }

    #[test]
    fn hover_text_describes_the_event() {
        assert_eq!(hover_text(&bar(0, "gunfight")), "Event #0  7:30 - 11:23\nHigh: gunfight");
        assert_eq!(hover_text(&bar(2, "")), "Event #2  7:30 - 11:23\nHigh");
        assert_eq!(hover_text(&bar(-1, "")), "No high events in this recording");
    }
}
