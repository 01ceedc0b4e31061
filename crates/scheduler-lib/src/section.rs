use std::sync::Arc;

use crate::{Id, TimeSlot};

bitflags::bitflags! {
    /// Columns of a section that are visually merged with neighbouring sections.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MergedColumns: u8 {
        const SPEAKER = 1 << 0;
        const ROLE = 1 << 1;
        const TIME_SLOT = 1 << 2;
    }
}

/// A cell column of the section table.
///
/// `Name` can be picked while selecting cells for a merge but has no merge flag of its own; the
/// merge label is stored separately in [`MergedFields::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    TimeSlot,
    Name,
    Speaker,
    Role,
}

impl ColumnType {
    pub const ALL: [Self; 4] = [Self::TimeSlot, Self::Name, Self::Speaker, Self::Role];

    pub const fn merge_flag(self) -> MergedColumns {
        match self {
            Self::TimeSlot => MergedColumns::TIME_SLOT,
            Self::Name => MergedColumns::empty(),
            Self::Speaker => MergedColumns::SPEAKER,
            Self::Role => MergedColumns::ROLE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MergeColor {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
}

impl MergeColor {
    pub const ALL: [Self; 5] = [
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
        Self::Pink,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
        }
    }

    /// Stable style name, e.g. `bg-green-100`.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100",
            Self::Green => "bg-green-100",
            Self::Purple => "bg-purple-100",
            Self::Orange => "bg-orange-100",
            Self::Pink => "bg-pink-100",
        }
    }

    /// Light tint as sRGB.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Blue => [0xdb, 0xea, 0xfe],
            Self::Green => [0xdc, 0xfc, 0xe7],
            Self::Purple => [0xf3, 0xe8, 0xff],
            Self::Orange => [0xff, 0xed, 0xd5],
            Self::Pink => [0xfc, 0xe7, 0xf3],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedFields {
    pub columns: MergedColumns,
    pub color: Option<MergeColor>,
    pub name: Option<String>,
}

impl MergedFields {
    pub fn is_merged(&self, column: ColumnType) -> bool {
        let flag = column.merge_flag();
        !flag.is_empty() && self.columns.contains(flag)
    }

    /// The colour a cell in `column` should be tinted with, if any.
    pub fn tint(&self, column: ColumnType) -> Option<MergeColor> {
        self.color.filter(|_| self.is_merged(column))
    }

    pub fn apply(&mut self, patch: &MergedFieldsPatch) {
        for (flag, value) in [
            (MergedColumns::SPEAKER, patch.speaker),
            (MergedColumns::ROLE, patch.role),
            (MergedColumns::TIME_SLOT, patch.time_slot),
        ] {
            if let Some(value) = value {
                self.columns.set(flag, value);
            }
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(ref name) = patch.name {
            self.name = Some(name.clone());
        }
    }
}

/// A partial update of [`MergedFields`]. `None` leaves the field as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedFieldsPatch {
    pub speaker: Option<bool>,
    pub role: Option<bool>,
    pub time_slot: Option<bool>,
    pub color: Option<MergeColor>,
    pub name: Option<String>,
}

/// A partial update of a [`Section`]. Never touches the section's id or subsections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionPatch {
    pub name: Option<String>,
    pub time_slot: Option<TimeSlot>,
    pub speaker: Option<String>,
    pub role: Option<String>,
    pub merged: Option<MergedFieldsPatch>,
}

impl SectionPatch {
    pub fn merged(patch: MergedFieldsPatch) -> Self {
        Self {
            merged: Some(patch),
            ..Default::default()
        }
    }
}

/// User-supplied data for a section that doesn't exist yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionDraft {
    pub name: String,
    pub time_slot: Option<TimeSlot>,
    pub speaker: String,
    pub role: String,
    /// For subsections: which fields are copied from the parent instead of taken from the draft.
    pub inherit: MergedColumns,
}

impl SectionDraft {
    pub fn into_patch(self) -> SectionPatch {
        SectionPatch {
            name: Some(self.name),
            time_slot: self.time_slot,
            speaker: Some(self.speaker),
            role: Some(self.role),
            merged: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    id: Id<Section>,
    pub name: String,
    pub time_slot: TimeSlot,
    pub speaker: String,
    pub role: String,
    pub merged: MergedFields,

    // Arc so that editing one branch of a cloned tree leaves the rest shared.
    pub(crate) subsections: Vec<Arc<Section>>,
}

impl Section {
    /// A top-level section built from a draft. Top-level sections never start out merged.
    pub fn from_draft(id: Id<Section>, draft: SectionDraft, sibling_count: usize) -> Self {
        let name = if draft.name.is_empty() {
            format!("Section {}", sibling_count + 1)
        } else {
            draft.name
        };
        Self {
            id,
            name,
            time_slot: draft.time_slot.unwrap_or_default(),
            speaker: draft.speaker,
            role: draft.role,
            merged: MergedFields::default(),
            subsections: Vec::new(),
        }
    }

    /// A child of `self` built from a draft. Fields the draft marks as inherited are copied from
    /// `self` as they are right now; later edits to `self` don't propagate.
    pub fn child_from_draft(&self, id: Id<Section>, draft: SectionDraft) -> Self {
        let inherit = draft.inherit;
        let name = if draft.name.is_empty() {
            format!("Subsection {}", self.subsections.len() + 1)
        } else {
            draft.name
        };
        Self {
            id,
            name,
            time_slot: if inherit.contains(MergedColumns::TIME_SLOT) {
                self.time_slot
            } else {
                draft.time_slot.unwrap_or_default()
            },
            speaker: if inherit.contains(MergedColumns::SPEAKER) {
                self.speaker.clone()
            } else {
                draft.speaker
            },
            role: if inherit.contains(MergedColumns::ROLE) {
                self.role.clone()
            } else {
                draft.role
            },
            merged: MergedFields {
                columns: inherit,
                color: None,
                name: None,
            },
            subsections: Vec::new(),
        }
    }

    pub fn id(&self) -> Id<Section> {
        self.id
    }

    pub fn subsections(&self) -> &[Arc<Section>] {
        &self.subsections
    }

    pub fn apply(&mut self, patch: &SectionPatch) {
        if let Some(ref name) = patch.name {
            self.name.clone_from(name);
        }
        if let Some(time_slot) = patch.time_slot {
            self.time_slot = time_slot;
        }
        if let Some(ref speaker) = patch.speaker {
            self.speaker.clone_from(speaker);
        }
        if let Some(ref role) = patch.role {
            self.role.clone_from(role);
        }
        if let Some(ref merged) = patch.merged {
            self.merged.apply(merged);
        }
    }

    /// Number of sections in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .subsections
            .iter()
            .map(|s| s.subtree_len())
            .sum::<usize>()
    }
}

/// Fixture builders.
#[cfg(test)]
impl Section {
    pub(crate) fn new(id: Id<Section>, name: impl Into<String>, time_slot: TimeSlot) -> Self {
        Self {
            id,
            name: name.into(),
            time_slot,
            speaker: String::new(),
            role: String::new(),
            merged: MergedFields::default(),
            subsections: Vec::new(),
        }
    }

    pub(crate) fn with_speaker(
        mut self,
        speaker: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        self.speaker = speaker.into();
        self.role = role.into();
        self
    }

    pub(crate) fn with_subsection(mut self, subsection: Section) -> Self {
        self.subsections.push(Arc::new(subsection));
        self
    }
}
