use smallvec::SmallVec;

use crate::{ColumnType, Id, MergeColor, MergedColumns, MergedFieldsPatch, Section};

/// Cells picked for a cross-section merge, and whether picking is in progress at all.
///
/// The selection is a set of `(section, column)` pairs kept in the order they were first picked.
/// It's never part of the document.
#[derive(Debug, Default)]
pub struct MergeSelection {
    selecting: bool,
    selected: Vec<(Id<Section>, ColumnType)>,
    color: MergeColor,
}

impl MergeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn begin(&mut self) {
        self.selecting = true;
    }

    /// Adds the pair if it isn't selected, removes it if it is. Does nothing unless selecting.
    ///
    /// Returns whether the pair is selected afterwards.
    pub fn toggle(&mut self, section: Id<Section>, column: ColumnType) -> bool {
        if !self.selecting {
            return false;
        }
        match self.selected.iter().position(|&p| p == (section, column)) {
            Some(index) => {
                self.selected.remove(index);
                false
            }
            None => {
                self.selected.push((section, column));
                true
            }
        }
    }

    pub fn is_selected(&self, section: Id<Section>, column: ColumnType) -> bool {
        self.selected.contains(&(section, column))
    }

    pub fn selected(&self) -> &[(Id<Section>, ColumnType)] {
        &self.selected
    }

    /// Highlight used for selected cells.
    pub fn color(&self) -> MergeColor {
        self.color
    }
    pub fn set_color(&mut self, color: MergeColor) {
        self.color = color;
    }

    /// Drops the selection and goes back to idle.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Turns the selection into one patch per selected section, then goes back to idle.
    ///
    /// Each patch sets exactly the columns selected for that section and clears the other merge
    /// flags, so re-merging a section forgets its earlier merged columns.
    pub fn apply(&mut self, color: MergeColor, label: &str) -> Vec<(Id<Section>, MergedFieldsPatch)> {
        let selected = std::mem::take(&mut self.selected);
        self.cancel();

        let mut sections: SmallVec<[(Id<Section>, MergedColumns); 8]> = SmallVec::new();
        for (section, column) in selected {
            match sections.iter_mut().find(|(id, _)| *id == section) {
                Some((_, columns)) => *columns |= column.merge_flag(),
                None => sections.push((section, column.merge_flag())),
            }
        }

        sections
            .into_iter()
            .map(|(section, columns)| {
                let patch = MergedFieldsPatch {
                    speaker: Some(columns.contains(MergedColumns::SPEAKER)),
                    role: Some(columns.contains(MergedColumns::ROLE)),
                    time_slot: Some(columns.contains(MergedColumns::TIME_SLOT)),
                    color: Some(color),
                    name: Some(label.to_owned()),
                };
                (section, patch)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ColumnType, Id, MergeColor, MergedColumns, SectionDraft, Track};

    use super::MergeSelection;

    #[test]
    fn test_toggle_is_set_like() {
        let mut selection = MergeSelection::new();
        let s1 = Id::arbitrary();

        // idle: clicks are ignored
        assert!(!selection.toggle(s1, ColumnType::Speaker));
        assert!(selection.selected().is_empty());

        selection.begin();
        assert!(selection.toggle(s1, ColumnType::Speaker));
        assert!(selection.toggle(s1, ColumnType::Role));
        assert!(!selection.toggle(s1, ColumnType::Speaker));
        assert!(selection.toggle(s1, ColumnType::Speaker));
        assert_eq!(
            selection.selected(),
            &[(s1, ColumnType::Role), (s1, ColumnType::Speaker)]
        );
        assert!(selection.is_selected(s1, ColumnType::Speaker));
        assert!(!selection.is_selected(s1, ColumnType::TimeSlot));
    }

    #[test]
    fn test_apply_to_track() {
        let mut track = Track::new(Id::arbitrary(), "Main hall");
        let s1 = track.push_section(SectionDraft::default());
        let s2 = track.push_section(SectionDraft::default());
        let untouched = track.section(s2).unwrap().clone();

        let mut selection = MergeSelection::new();
        selection.begin();
        selection.set_color(MergeColor::Purple);
        selection.toggle(s1, ColumnType::Speaker);
        selection.toggle(s1, ColumnType::Role);

        let patches = selection.apply(MergeColor::Green, "L");
        assert_eq!(patches.len(), 1);
        for (id, patch) in patches {
            track.update_section(id, crate::SectionPatch::merged(patch));
        }

        let merged = &track.section(s1).unwrap().merged;
        assert_eq!(merged.columns, MergedColumns::SPEAKER | MergedColumns::ROLE);
        assert_eq!(merged.color.map(MergeColor::class_name), Some("bg-green-100"));
        assert_eq!(merged.name.as_deref(), Some("L"));
        assert_eq!(track.section(s2).unwrap(), &untouched);

        // back to idle with the default highlight
        assert!(!selection.is_selecting());
        assert!(selection.selected().is_empty());
        assert_eq!(selection.color(), MergeColor::Blue);
    }

    #[test]
    fn test_apply_groups_by_section_in_pick_order() {
        let (s1, s2) = (Id::arbitrary(), Id::arbitrary());
        let mut selection = MergeSelection::new();
        selection.begin();
        selection.toggle(s2, ColumnType::TimeSlot);
        selection.toggle(s1, ColumnType::Name);
        selection.toggle(s2, ColumnType::Role);

        let patches = selection.apply(MergeColor::Orange, "");
        let ids: Vec<_> = patches.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, [s2, s1]);

        let (_, p2) = &patches[0];
        assert_eq!(
            (p2.speaker, p2.role, p2.time_slot),
            (Some(false), Some(true), Some(true))
        );
        // a name-only pick still stamps colour and label, with every flag cleared
        let (_, p1) = &patches[1];
        assert_eq!(
            (p1.speaker, p1.role, p1.time_slot),
            (Some(false), Some(false), Some(false))
        );
        assert_eq!(p1.color, Some(MergeColor::Orange));
    }

    #[test]
    fn test_reapply_clears_earlier_columns() {
        let mut track = Track::new(Id::arbitrary(), "Main hall");
        let s1 = track.push_section(SectionDraft::default());

        let mut selection = MergeSelection::new();
        for column in [ColumnType::TimeSlot, ColumnType::Speaker] {
            selection.begin();
            selection.toggle(s1, column);
            for (id, patch) in selection.apply(MergeColor::Blue, "x") {
                track.update_section(id, crate::SectionPatch::merged(patch));
            }
        }

        assert_eq!(
            track.section(s1).unwrap().merged.columns,
            MergedColumns::SPEAKER
        );
    }

    #[test]
    fn test_empty_and_cancel() {
        let mut selection = MergeSelection::new();
        selection.begin();
        assert!(selection.apply(MergeColor::Pink, "x").is_empty());

        selection.begin();
        selection.set_color(MergeColor::Pink);
        selection.toggle(Id::arbitrary(), ColumnType::Role);
        selection.cancel();
        assert!(!selection.is_selecting());
        assert!(selection.selected().is_empty());
        assert_eq!(selection.color(), MergeColor::Blue);
    }
}
