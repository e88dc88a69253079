use tracing::debug;

use crate::event::EventId;
use crate::level::Level;
use crate::timeline::InteractionPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(EventId),
}

impl Selection {
    pub fn id(self) -> Option<EventId> {
        match self {
            Selection::Idle => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(self, id: EventId) -> bool {
        self == Selection::Selected(id)
    }
}

/// Remembers the last clicked bar across render passes.
///
/// Chart widgets only report a click on the pass it happens; every later pass
/// arrives with no payload. The tracker therefore treats a missing payload as
/// "nothing new" and keeps what it has. Only [`SelectionTracker::reset`]
/// returns it to `Idle`.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    current: Selection,
    last_payload: Option<InteractionPayload>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_selection(&self) -> Selection {
        self.current
    }

    /// Severity band of the selected bar. Needed for placeholders, which all
    /// share the same id.
    pub fn selected_level(&self) -> Option<Level> {
        self.last_payload.map(|p| p.level)
    }

    /// Returns `true` when the selection changed.
    pub fn on_interaction(&mut self, payload: Option<&InteractionPayload>) -> bool {
        let Some(payload) = payload else {
            return false;
        };
        if self.last_payload.as_ref() == Some(payload) {
            return false;
        }

        let previous = self.current;
        self.current = Selection::Selected(payload.id);
        self.last_payload = Some(*payload);
        debug!(?previous, current = ?self.current, level = %payload.level, "selection changed");
        true
    }

    pub fn reset(&mut self) {
        if self.current != Selection::Idle {
            debug!(previous = ?self.current, "selection reset");
        }
        self.current = Selection::Idle;
        self.last_payload = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(id: i32, level: Level) -> InteractionPayload {
        InteractionPayload {
            id: EventId(id),
            level,
            preview_seconds: (id >= 0).then_some(90),
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(SelectionTracker::new().current_selection(), Selection::Idle);
    }

    #[test]
    fn click_selects_and_replaces() {
        let mut tracker = SelectionTracker::new();
        assert!(tracker.on_interaction(Some(&click(0, Level::Low))));
        assert_eq!(tracker.current_selection(), Selection::Selected(EventId(0)));

        assert!(tracker.on_interaction(Some(&click(3, Level::High))));
        assert_eq!(tracker.current_selection(), Selection::Selected(EventId(3)));
    }

    #[test]
    fn repeated_click_is_idempotent() {
        let mut tracker = SelectionTracker::new();
        let payload = click(2, Level::Medium);
        assert!(tracker.on_interaction(Some(&payload)));
        assert!(!tracker.on_interaction(Some(&payload)));
        assert_eq!(tracker.current_selection(), Selection::Selected(EventId(2)));
    }

    #[test]
    fn empty_passes_keep_the_selection() {
        let mut tracker = SelectionTracker::new();
        tracker.on_interaction(Some(&click(1, Level::Low)));
        for _ in 0..5 {
            assert!(!tracker.on_interaction(None));
        }
        assert_eq!(tracker.current_selection(), Selection::Selected(EventId(1)));
    }

    #[test]
    fn placeholders_remember_their_band() {
        let mut tracker = SelectionTracker::new();
        tracker.on_interaction(Some(&click(-1, Level::Low)));
        assert_eq!(tracker.selected_level(), Some(Level::Low));

        assert!(tracker.on_interaction(Some(&click(-1, Level::High))));
        assert_eq!(tracker.current_selection(), Selection::Selected(EventId::PLACEHOLDER));
        assert_eq!(tracker.selected_level(), Some(Level::High));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut tracker = SelectionTracker::new();
        tracker.on_interaction(Some(&click(0, Level::Low)));
        tracker.reset();
        assert_eq!(tracker.current_selection(), Selection::Idle);
        assert_eq!(tracker.selected_level(), None);
    }
}
