//! Recursive edits of a section tree.
//!
//! A tree is a list of sibling `Arc<Section>`s. Every edit copies only the sections on the path from
//! the root to its target (via [`Arc::make_mut`]); everything else stays shared with whatever other
//! copies of the tree exist.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::{Id, Section, SectionDraft, SectionPatch};

/// Indices from the root list down to a section. Trees are rarely deeper than a handful of levels.
pub type SectionPath = SmallVec<[usize; 8]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionEdit {
    Patch(SectionPatch),
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    Removed(Arc<Section>),
    NotFound,
}

impl EditOutcome {
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

pub fn path_to(sections: &[Arc<Section>], target: Id<Section>) -> Option<SectionPath> {
    fn walk(sections: &[Arc<Section>], target: Id<Section>, path: &mut SectionPath) -> bool {
        for (i, section) in sections.iter().enumerate() {
            path.push(i);
            if section.id() == target || walk(&section.subsections, target, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = SectionPath::new();
    walk(sections, target, &mut path).then_some(path)
}

pub fn find(sections: &[Arc<Section>], target: Id<Section>) -> Option<&Section> {
    for section in sections {
        if section.id() == target {
            return Some(section);
        }
        if let Some(found) = find(&section.subsections, target) {
            return Some(found);
        }
    }
    None
}

/// The sibling list containing the section at `path`, plus the section's index in it.
/// Every list on the way down is made unique.
fn siblings_mut<'a>(
    sections: &'a mut Vec<Arc<Section>>,
    path: &[usize],
) -> (&'a mut Vec<Arc<Section>>, usize) {
    let (&last, ancestors) = path
        .split_last()
        .unwrap_or_else(|| unreachable!("empty section path"));

    let mut list = sections;
    for &index in ancestors {
        list = &mut Arc::make_mut(&mut list[index]).subsections;
    }
    (list, last)
}

/// Finds `target` anywhere in the tree and applies `change` to it.
///
/// Doesn't log anything itself; callers decide how loud a [`EditOutcome::NotFound`] should be.
pub fn edit(
    sections: &mut Vec<Arc<Section>>,
    target: Id<Section>,
    change: SectionEdit,
) -> EditOutcome {
    let Some(path) = path_to(sections, target) else {
        return EditOutcome::NotFound;
    };

    let (list, index) = siblings_mut(sections, &path);
    match change {
        SectionEdit::Patch(patch) => {
            Arc::make_mut(&mut list[index]).apply(&patch);
            EditOutcome::Updated
        }
        SectionEdit::Delete => EditOutcome::Removed(list.remove(index)),
    }
}

/// Appends a subsection built from `draft` to `parent`, wherever `parent` is in the tree.
pub fn add_child(
    sections: &mut Vec<Arc<Section>>,
    parent: Id<Section>,
    draft: SectionDraft,
) -> Option<Id<Section>> {
    let path = path_to(sections, parent)?;

    let (list, index) = siblings_mut(sections, &path);
    let parent = Arc::make_mut(&mut list[index]);

    let id = Id::arbitrary();
    let child = parent.child_from_draft(id, draft);
    parent.subsections.push(Arc::new(child));
    Some(id)
}
