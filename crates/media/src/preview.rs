use reelmark_state::event::NormalizedEvent;
use reelmark_state::level::Level;
use reelmark_state::project::AppState;
use reelmark_state::selection::Selection;

use crate::resolve::{AssetStore, MediaResolver, ResolvedAsset};

/// What the preview area should show for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState<'a> {
    /// Nothing selected yet.
    Hint,
    /// A placeholder row was clicked; that band has no authored event.
    NoEventInBand(Level),
    Ready {
        event: &'a NormalizedEvent,
        asset: ResolvedAsset,
    },
    Missing {
        event: &'a NormalizedEvent,
        asset: ResolvedAsset,
    },
}

impl PreviewState<'_> {
    pub fn asset(&self) -> Option<&ResolvedAsset> {
        match self {
            PreviewState::Ready { asset, .. } | PreviewState::Missing { asset, .. } => Some(asset),
            PreviewState::Hint | PreviewState::NoEventInBand(_) => None,
        }
    }

    pub fn event(&self) -> Option<&NormalizedEvent> {
        match self {
            PreviewState::Ready { event, .. } | PreviewState::Missing { event, .. } => Some(event),
            PreviewState::Hint | PreviewState::NoEventInBand(_) => None,
        }
    }
}

pub fn preview_for<'a, S: AssetStore>(
    state: &'a AppState,
    resolver: &MediaResolver<S>,
) -> PreviewState<'a> {
    if state.selection() == Selection::Idle {
        return PreviewState::Hint;
    }
    let (Some(entry), Some(event)) = (state.active_entry(), state.selected_event()) else {
        return PreviewState::Hint;
    };
    if event.is_placeholder() {
        return PreviewState::NoEventInBand(event.level);
    }
    match resolver.resolve(entry, event) {
        Ok(asset) if asset.exists => PreviewState::Ready { event, asset },
        Ok(asset) => PreviewState::Missing { event, asset },
        Err(_) => PreviewState::NoEventInBand(event.level),
    }
}
