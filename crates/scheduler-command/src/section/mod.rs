use scheduler_lib::{EditOutcome, Id, Section, SectionDraft, SectionPatch, State, Track};

use crate::StateCommand;

fn track_mut<'a>(state: &'a mut State, id: Id<Track>, command: &str) -> Option<&'a mut Track> {
    let track = state.track_mut(id);
    if track.is_none() {
        tracing::warn!("no track {id:?} for {command}");
    }
    track
}

/// Appends a top-level section to a track.
pub struct SectionAdd {
    track_id: Id<Track>,
    draft: Option<SectionDraft>,
}

impl SectionAdd {
    pub fn new(track_id: Id<Track>, draft: SectionDraft) -> Self {
        Self {
            track_id,
            draft: Some(draft),
        }
    }
}

impl StateCommand for SectionAdd {
    fn execute(&mut self, state: &mut State) {
        let Some(draft) = self.draft.take() else {
            tracing::warn!("SectionAdd executed twice");
            return;
        };
        if let Some(track) = track_mut(state, self.track_id, "SectionAdd") {
            track.push_section(draft);
        }
    }
}

/// Appends a subsection to a section at any depth.
pub struct SubsectionAdd {
    track_id: Id<Track>,
    parent_id: Id<Section>,
    draft: Option<SectionDraft>,
}

impl SubsectionAdd {
    pub fn new(track_id: Id<Track>, parent_id: Id<Section>, draft: SectionDraft) -> Self {
        Self {
            track_id,
            parent_id,
            draft: Some(draft),
        }
    }
}

impl StateCommand for SubsectionAdd {
    fn execute(&mut self, state: &mut State) {
        let Some(draft) = self.draft.take() else {
            tracing::warn!("SubsectionAdd executed twice");
            return;
        };
        if let Some(track) = track_mut(state, self.track_id, "SubsectionAdd") {
            // a missing parent is logged by the track
            track.add_subsection(self.parent_id, draft);
        }
    }
}

pub struct SectionUpdate {
    track_id: Id<Track>,
    section_id: Id<Section>,
    patch: SectionPatch,
}

impl SectionUpdate {
    pub fn new(track_id: Id<Track>, section_id: Id<Section>, patch: SectionPatch) -> Self {
        Self {
            track_id,
            section_id,
            patch,
        }
    }
}

impl StateCommand for SectionUpdate {
    fn execute(&mut self, state: &mut State) {
        if let Some(track) = track_mut(state, self.track_id, "SectionUpdate") {
            track.update_section(self.section_id, core::mem::take(&mut self.patch));
        }
    }
}

pub struct SectionRemove {
    track_id: Id<Track>,
    section_id: Id<Section>,
}

impl SectionRemove {
    pub fn new(track_id: Id<Track>, section_id: Id<Section>) -> Self {
        Self {
            track_id,
            section_id,
        }
    }
}

impl StateCommand for SectionRemove {
    fn execute(&mut self, state: &mut State) {
        if let Some(track) = track_mut(state, self.track_id, "SectionRemove") {
            if let EditOutcome::Removed(section) = track.remove_section(self.section_id) {
                tracing::debug!(
                    "removed section {:?} ({} section(s) in subtree)",
                    self.section_id,
                    section.subtree_len()
                );
            }
        }
    }
}
