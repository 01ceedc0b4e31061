use scheduler_lib::{Id, MergeSelection, Track};

use crate::{UiState, dialog::Dialog};

/// State that only lives as long as the window: the in-progress merge and the open dialog.
#[derive(Debug, Default)]
pub struct EphemeralState {
    pub merge: MergeSelection,
    /// The track `merge` picks cells from.
    merge_track: Option<Id<Track>>,

    pub dialog: Option<Dialog>,
}

impl EphemeralState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_merge(&mut self, track_id: Id<Track>) {
        self.merge.cancel();
        self.merge.begin();
        self.merge_track = Some(track_id);
    }

    pub fn merge_track(&self) -> Option<Id<Track>> {
        self.merge_track.filter(|_| self.merge.is_selecting())
    }

    pub fn cancel_merge(&mut self) {
        self.merge.cancel();
        self.merge_track = None;
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        if let Some(old) = self.dialog.replace(dialog) {
            tracing::debug!("replacing open dialog {old:?}");
        }
    }

    pub fn on_frame_end(&mut self, ui_state: &UiState) {
        // a selection can't outlive the table it was made in
        if self.merge.is_selecting() && self.merge_track != ui_state.selected_track {
            tracing::debug!("selected track changed during a merge, cancelling it");
            self.cancel_merge();
        }
    }
}
