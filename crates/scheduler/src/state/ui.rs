use scheduler_lib::{HeaderSettings, Id, State, Track};

/// Editor state that isn't part of the document: which track is open and how the table looks.
#[derive(Debug, Default)]
pub struct UiState {
    pub selected_track: Option<Id<Track>>,
    pub headers: HeaderSettings,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_frame_end(&mut self, state: &State) {
        let Some(track_id) = self.selected_track else {
            return;
        };
        if state.track(track_id).is_none() {
            tracing::debug!("selected track {track_id:?} no longer exists, deselecting");
            self.selected_track = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use scheduler_lib::{Id, State};

    use super::UiState;

    #[test]
    fn test_stale_track_is_deselected() {
        let mut state = State::new();
        let track_id = state.add_track("Main hall");

        let mut ui_state = UiState::new();
        ui_state.selected_track = Some(track_id);
        ui_state.on_frame_end(&state);
        assert_eq!(ui_state.selected_track, Some(track_id));

        ui_state.selected_track = Some(Id::arbitrary());
        ui_state.on_frame_end(&state);
        assert_eq!(ui_state.selected_track, None);
    }
}
