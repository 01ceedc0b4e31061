use crate::{ColumnType, Id};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    Time,
    Name,
    Speaker,
    Role,
    Actions,
}

impl HeaderKind {
    /// Kinds a user may add a header for. Actions is built in.
    pub const ADDABLE: [Self; 4] = [Self::Name, Self::Time, Self::Speaker, Self::Role];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Name => "Name",
            Self::Speaker => "Speaker",
            Self::Role => "Role",
            Self::Actions => "Actions",
        }
    }

    /// The section column this header shows, if it shows one.
    pub const fn column(self) -> Option<ColumnType> {
        match self {
            Self::Time => Some(ColumnType::TimeSlot),
            Self::Name => Some(ColumnType::Name),
            Self::Speaker => Some(ColumnType::Speaker),
            Self::Role => Some(ColumnType::Role),
            Self::Actions => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableHeader {
    pub id: Id<TableHeader>,
    pub label: String,
    pub kind: HeaderKind,
    pub visible: bool,
}

impl TableHeader {
    pub fn new(label: impl Into<String>, kind: HeaderKind) -> Self {
        Self {
            id: Id::arbitrary(),
            label: label.into(),
            kind,
            visible: true,
        }
    }
}

/// The section table's columns, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderSettings {
    headers: Vec<TableHeader>,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            headers: vec![
                TableHeader::new("Time", HeaderKind::Time),
                TableHeader::new("Section", HeaderKind::Name),
                TableHeader::new("Speaker", HeaderKind::Speaker),
                TableHeader::new("Role", HeaderKind::Role),
                TableHeader::new("Actions", HeaderKind::Actions),
            ],
        }
    }
}

impl HeaderSettings {
    pub fn headers(&self) -> &[TableHeader] {
        &self.headers
    }

    pub fn visible(&self) -> impl Iterator<Item = &TableHeader> {
        self.headers.iter().filter(|h| h.visible)
    }

    fn get_mut(&mut self, id: Id<TableHeader>) -> Option<&mut TableHeader> {
        self.headers.iter_mut().find(|h| h.id == id)
    }

    /// Returns `false` if there's no such header.
    pub fn toggle_visibility(&mut self, id: Id<TableHeader>) -> bool {
        match self.get_mut(id) {
            Some(header) => {
                header.visible = !header.visible;
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, id: Id<TableHeader>, label: &str) -> bool {
        match self.get_mut(id) {
            Some(header) => {
                label.clone_into(&mut header.label);
                true
            }
            None => false,
        }
    }

    /// Appends a visible header. Blank labels are rejected.
    pub fn add(&mut self, label: &str, kind: HeaderKind) -> Option<Id<TableHeader>> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        let header = TableHeader::new(label, kind);
        let id = header.id;
        self.headers.push(header);
        Some(id)
    }
}
