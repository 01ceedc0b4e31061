//! Document model for the scheduler: tracks of nested, timed sections.

mod id;
pub use id::{Id, IdMap};
mod time;
pub use time::{ClockTime, ClockTimeParseError, ClockTimeParseErrorKind, TimeSlot, TimeSlotError};
mod section;
pub use section::{
    ColumnType, MergeColor, MergedColumns, MergedFields, MergedFieldsPatch, Section, SectionDraft,
    SectionPatch,
};
pub mod tree;
pub use tree::{EditOutcome, SectionEdit};
mod track;
pub use track::Track;
mod state;
pub use state::State;
mod group;
pub use group::{SectionGroup, group_by_speaker_role};
mod merge;
pub use merge::MergeSelection;
mod header;
pub use header::{HeaderKind, HeaderSettings, TableHeader};
mod form;
pub use form::{FormError, SectionForm, TimeField};
