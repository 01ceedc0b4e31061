use std::sync::Arc;

use smallvec::SmallVec;

use crate::Section;

/// Sibling sections that share a speaker and role, displayed with one speaker/role cell.
#[derive(Debug)]
pub struct SectionGroup<'a> {
    pub speaker: &'a str,
    pub role: &'a str,
    pub sections: SmallVec<[&'a Section; 4]>,
}

impl SectionGroup<'_> {
    fn first(&self) -> &Section {
        // groups are only ever created with one section in them
        self.sections[0]
    }
}

/// Groups `sections` by `(speaker, role)` wherever they appear in the list, then orders the groups
/// by the start time of each group's first section.
///
/// Sections keep their relative order inside a group. `sections` itself is left alone.
pub fn group_by_speaker_role(sections: &[Arc<Section>]) -> Vec<SectionGroup<'_>> {
    let mut groups: Vec<SectionGroup<'_>> = Vec::new();

    for section in sections {
        match groups
            .iter_mut()
            .find(|g| g.speaker == section.speaker && g.role == section.role)
        {
            Some(group) => group.sections.push(section),
            None => groups.push(SectionGroup {
                speaker: &section.speaker,
                role: &section.role,
                sections: smallvec::smallvec![&**section],
            }),
        }
    }

    // stable, so groups starting at the same time keep first-appearance order
    groups.sort_by_key(|g| g.first().time_slot.start);
    groups
}
