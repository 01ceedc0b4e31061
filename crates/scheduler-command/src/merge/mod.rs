use scheduler_lib::{Id, MergedFieldsPatch, Section, SectionPatch, State, Track};

use crate::{StateCommand, section::SectionUpdate};

/// Applies the patches produced by [`scheduler_lib::MergeSelection::apply`] to one track.
pub struct MergeApply {
    updates: Vec<SectionUpdate>,
}

impl MergeApply {
    pub fn new(track_id: Id<Track>, patches: Vec<(Id<Section>, MergedFieldsPatch)>) -> Self {
        Self {
            updates: patches
                .into_iter()
                .map(|(section_id, patch)| {
                    SectionUpdate::new(track_id, section_id, SectionPatch::merged(patch))
                })
                .collect(),
        }
    }
}

impl StateCommand for MergeApply {
    fn execute(&mut self, state: &mut State) {
        tracing::debug!("merging {} section(s)", self.updates.len());
        for update in &mut self.updates {
            update.execute(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use scheduler_lib::{
        ColumnType, MergeColor, MergeSelection, MergedColumns, SectionDraft, State,
    };

    use crate::StateCommand;

    use super::MergeApply;

    #[test]
    fn test_merge_across_sections() {
        let mut state = State::new();
        let track_id = state.add_track("Main hall");
        let track = state.track_mut(track_id).unwrap();
        let s1 = track.push_section(SectionDraft::default());
        let s2 = track.push_section(SectionDraft::default());
        let s3 = track.push_section(SectionDraft::default());
        let sub = track.add_subsection(s3, SectionDraft::default()).unwrap();

        let mut selection = MergeSelection::new();
        selection.begin();
        selection.toggle(s1, ColumnType::Role);
        selection.toggle(sub, ColumnType::Role);
        selection.toggle(sub, ColumnType::TimeSlot);

        let mut command = MergeApply::new(track_id, selection.apply(MergeColor::Green, "Panel"));
        command.execute(&mut state);

        let track = state.track(track_id).unwrap();
        assert_eq!(
            track.section(s1).unwrap().merged.columns,
            MergedColumns::ROLE
        );
        let sub = &track.section(sub).unwrap().merged;
        assert_eq!(sub.columns, MergedColumns::ROLE | MergedColumns::TIME_SLOT);
        assert_eq!(sub.color, Some(MergeColor::Green));
        assert_eq!(sub.name.as_deref(), Some("Panel"));
        assert!(track.section(s2).unwrap().merged.color.is_none());
    }
}
