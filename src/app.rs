//! Host application state.
//!
//! Owns the track designer and the track selection. Saved designs become the
//! active custom track; a catalog pick, when present, takes precedence for
//! downstream consumers.

use pitlane_core::{MessageDispatcher, Result, TrackRecord, TrackSelection, TrackSummary};
use pitlane_designer::TrackDesigner;
use pitlane_settings::DesignerConfig;

/// Track designer plus the host's active track slot
#[derive(Debug)]
pub struct RaceConfigurator {
    designer: TrackDesigner,
    selection: TrackSelection,
    messages: MessageDispatcher,
}

impl RaceConfigurator {
    /// Builds the host with a raster-backed designer sized from `config`.
    pub fn new(config: &DesignerConfig) -> Result<Self> {
        let messages = MessageDispatcher::default();
        let mut designer = TrackDesigner::with_raster(config)?;
        designer.set_dispatcher(messages.clone());
        Ok(Self {
            designer,
            selection: TrackSelection::new(),
            messages,
        })
    }

    pub fn designer(&self) -> &TrackDesigner {
        &self.designer
    }

    pub fn designer_mut(&mut self) -> &mut TrackDesigner {
        &mut self.designer
    }

    pub fn selection(&self) -> &TrackSelection {
        &self.selection
    }

    /// Dispatcher shared with the designer. Subscribe to show toasts.
    pub fn messages(&self) -> &MessageDispatcher {
        &self.messages
    }

    /// Saves the drawing as `name` and makes it the active custom track.
    pub fn save_track(&mut self, name: &str) -> Result<&TrackRecord> {
        let record = self.designer.save(name)?;
        if let Some(previous) = self.selection.set_custom(record) {
            tracing::debug!(id = previous.id(), "Previous custom track released");
        }
        self.selection
            .custom()
            .ok_or_else(|| pitlane_core::Error::other("custom track slot is empty after save"))
    }

    /// Picks a catalog circuit.
    pub fn select_official(&mut self, summary: TrackSummary) {
        self.selection.select_official(summary);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear_selection();
    }

    /// The track downstream consumers should use.
    pub fn active_track(&self) -> Option<TrackSummary> {
        self.selection.active()
    }
}
