use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogEntry};
use crate::event::{normalize_with_report, NormalizedCatalog, NormalizedEvent};
use crate::selection::{Selection, SelectionTracker};
use crate::timeline::{project, InteractionPayload, RenderModel};

/// Everything derived from the entry being viewed. Rebuilt only on switch.
#[derive(Debug, Clone)]
pub struct ActiveEntry {
    pub index: usize,
    pub normalized: NormalizedCatalog,
    pub model: RenderModel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    SwitchEntry(String),
    /// One render pass. `payload` is `Some` only on the pass the chart saw a click.
    Frame { payload: Option<InteractionPayload> },
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    catalog: Catalog,
    active: Option<ActiveEntry>,
    selection: SelectionTracker,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let mut state = Self {
            catalog,
            active: None,
            selection: SelectionTracker::new(),
        };
        state.activate(0);
        state
    }

    /// Swaps in a freshly loaded catalog and shows its first entry.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        info!(entries = catalog.len(), "catalog replaced");
        self.catalog = catalog;
        self.active = None;
        self.selection.reset();
        self.activate(0);
    }

    pub fn reduce(mut self, interaction: Interaction) -> Self {
        self.apply(interaction);
        self
    }

    /// Returns `true` when the active entry or the selection changed, so a
    /// caller that already painted this frame knows to paint again.
    pub fn apply(&mut self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::SwitchEntry(name) => self.switch_entry(&name),
            Interaction::Frame { payload } => {
                let payload = payload.filter(|p| self.accepts(p));
                self.selection.on_interaction(payload.as_ref())
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active(&self) -> Option<&ActiveEntry> {
        self.active.as_ref()
    }

    pub fn active_entry(&self) -> Option<&CatalogEntry> {
        self.active
            .as_ref()
            .and_then(|a| self.catalog.entries.get(a.index))
    }

    pub fn selection(&self) -> Selection {
        self.selection.current_selection()
    }

    pub fn tracker(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selected_event(&self) -> Option<&NormalizedEvent> {
        let id = self.selection().id()?;
        let active = self.active.as_ref()?;
        if id.is_placeholder() {
            let level = self.selection.selected_level()?;
            return active.normalized.placeholder(level);
        }
        active.normalized.get(id)
    }

    fn switch_entry(&mut self, name: &str) -> bool {
        if self.active_entry().is_some_and(|e| e.name == name) {
            return false;
        }
        let Some(index) = self.catalog.entries.iter().position(|e| e.name == name) else {
            warn!(entry = name, "switch to unknown catalog entry ignored");
            return false;
        };
        self.selection.reset();
        self.activate(index);
        true
    }

    fn activate(&mut self, index: usize) {
        let Some(entry) = self.catalog.entries.get(index) else {
            self.active = None;
            return;
        };
        let normalized = normalize_with_report(entry);
        for warning in &normalized.warnings {
            warn!(entry = %entry.name, "{warning}");
        }
        let model = project(&normalized.events, entry.duration_seconds());
        debug!(
            entry = %entry.name,
            events = normalized.real_events().count(),
            duration = model.duration(),
            "entry activated"
        );
        self.active = Some(ActiveEntry {
            index,
            normalized,
            model,
        });
    }

    /// Payloads must point at something on the current timeline; anything
    /// else is stale and must not disturb the selection.
    fn accepts(&self, payload: &InteractionPayload) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let known = if payload.id.is_placeholder() {
            active.normalized.placeholder(payload.level).is_some()
        } else {
            active
                .normalized
                .get(payload.id)
                .is_some_and(|e| e.level == payload.level)
        };
        if !known {
            debug!(id = %payload.id, level = %payload.level, "stale interaction payload ignored");
        }
        known
    }
}
