use std::sync::Arc;

use crate::{
    Id, Section, SectionDraft, SectionPatch,
    tree::{self, EditOutcome, SectionEdit},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    id: Id<Track>,
    pub name: String,

    sections: Vec<Arc<Section>>,
}

impl Track {
    pub fn new(id: Id<Track>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sections: Vec::new(),
        }
    }

    pub fn id(&self) -> Id<Track> {
        self.id
    }

    /// Top-level sections, in display order.
    pub fn sections(&self) -> &[Arc<Section>] {
        &self.sections
    }

    pub fn section(&self, id: Id<Section>) -> Option<&Section> {
        tree::find(&self.sections, id)
    }

    pub fn push_section(&mut self, draft: SectionDraft) -> Id<Section> {
        let id = Id::arbitrary();
        let section = Section::from_draft(id, draft, self.sections.len());
        self.sections.push(Arc::new(section));
        id
    }

    pub fn add_subsection(&mut self, parent: Id<Section>, draft: SectionDraft) -> Option<Id<Section>> {
        let id = tree::add_child(&mut self.sections, parent, draft);
        if id.is_none() {
            tracing::warn!("parent section {parent:?} not found in track {:?}", self.id);
        }
        id
    }

    pub fn update_section(&mut self, id: Id<Section>, patch: SectionPatch) -> EditOutcome {
        self.edit_section(id, SectionEdit::Patch(patch))
    }

    pub fn remove_section(&mut self, id: Id<Section>) -> EditOutcome {
        self.edit_section(id, SectionEdit::Delete)
    }

    pub fn edit_section(&mut self, id: Id<Section>, change: SectionEdit) -> EditOutcome {
        let outcome = tree::edit(&mut self.sections, id, change);
        if !outcome.is_found() {
            tracing::warn!("section with id {id:?} not found in track {:?}", self.id);
        }
        outcome
    }
}
