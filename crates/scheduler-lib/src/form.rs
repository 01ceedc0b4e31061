use core::fmt;

use crate::{
    ClockTime, ClockTimeParseErrorKind, MergedColumns, Section, SectionDraft, TimeSlot,
    TimeSlotError,
};

/// Which of the two time inputs a parse error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    InvalidTime {
        field: TimeField,
        kind: ClockTimeParseErrorKind,
    },
    TimeSlot(TimeSlotError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("Please enter a name"),
            Self::InvalidTime { field, kind } => {
                let field = match field {
                    TimeField::Start => "Start time",
                    TimeField::End => "End time",
                };
                write!(f, "{field}: {kind}")
            }
            Self::TimeSlot(err) => fmt::Display::fmt(err, f),
        }
    }
}
impl std::error::Error for FormError {}

impl From<TimeSlotError> for FormError {
    fn from(value: TimeSlotError) -> Self {
        Self::TimeSlot(value)
    }
}

/// Text-level contents of the add/edit section dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionForm {
    pub name: String,
    pub speaker: String,
    pub role: String,
    pub start: String,
    pub end: String,
    /// Only offered for subsections.
    pub inherit: MergedColumns,
}

impl Default for SectionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            speaker: String::new(),
            role: String::new(),
            start: TimeSlot::DEFAULT.start.to_string(),
            end: TimeSlot::DEFAULT.end.to_string(),
            inherit: MergedColumns::empty(),
        }
    }

    pub fn from_section(section: &Section) -> Self {
        Self {
            name: section.name.clone(),
            speaker: section.speaker.clone(),
            role: section.role.clone(),
            start: section.time_slot.start.to_string(),
            end: section.time_slot.end.to_string(),
            inherit: section.merged.columns,
        }
    }

    pub fn time_slot(&self) -> Result<TimeSlot, FormError> {
        let parse = |str: &str, field| {
            ClockTime::parse(str).map_err(|err| FormError::InvalidTime {
                field,
                kind: err.kind,
            })
        };
        Ok(TimeSlot::new(
            parse(&self.start, TimeField::Start)?,
            parse(&self.end, TimeField::End)?,
        ))
    }

    /// Validates the form. The dialog should stay open and show the error if this fails.
    ///
    /// An inherited time slot isn't checked, since the parent's slot replaces it anyway.
    pub fn submit(&self) -> Result<SectionDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let inherits_time = self.inherit.contains(MergedColumns::TIME_SLOT);
        let time_slot = if inherits_time {
            None
        } else {
            let time_slot = self.time_slot()?;
            time_slot.validate()?;
            Some(time_slot)
        };

        Ok(SectionDraft {
            name: name.to_owned(),
            time_slot,
            speaker: self.speaker.trim().to_owned(),
            role: self.role.trim().to_owned(),
            inherit: self.inherit,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ClockTime, ClockTimeParseErrorKind, Id, MergedColumns, Section, TimeSlot, TimeSlotError,
    };

    use super::{FormError, SectionForm, TimeField};

    fn form(start: &str, end: &str) -> SectionForm {
        SectionForm {
            name: "Opening".into(),
            start: start.into(),
            end: end.into(),
            ..SectionForm::new()
        }
    }

    #[test]
    fn test_time_validation() {
        let err = form("10:00", "09:00").submit().unwrap_err();
        assert!(matches!(
            err,
            FormError::TimeSlot(TimeSlotError::EndNotAfterStart { .. })
        ));
        assert_eq!(err.to_string(), "End time must be after start time");

        let draft = form("09:00", "10:00").submit().unwrap();
        assert_eq!(draft.time_slot, Some(TimeSlot::DEFAULT));
        assert_eq!(draft.name, "Opening");
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(
            form("9", "10:00").submit(),
            Err(FormError::InvalidTime {
                field: TimeField::Start,
                kind: ClockTimeParseErrorKind::NoColon,
            })
        );
        assert_eq!(
            form("09:00", "25:00").submit(),
            Err(FormError::InvalidTime {
                field: TimeField::End,
                kind: ClockTimeParseErrorKind::InvalidHour,
            })
        );
        let unnamed = SectionForm {
            name: "  ".into(),
            ..SectionForm::new()
        };
        assert_eq!(unnamed.submit(), Err(FormError::MissingName));
    }

    #[test]
    fn test_inherited_time_skips_validation() {
        let mut inherited = form("10:00", "09:00");
        inherited.inherit = MergedColumns::TIME_SLOT;
        let draft = inherited.submit().unwrap();
        assert_eq!(draft.time_slot, None);
        assert_eq!(draft.inherit, MergedColumns::TIME_SLOT);
    }

    #[test]
    fn test_prefill_from_section() {
        let slot = TimeSlot::new(
            ClockTime::new(8, 15).unwrap(),
            ClockTime::new(9, 45).unwrap(),
        );
        let section = Section::new(Id::arbitrary(), "Coffee", slot).with_speaker("Ada", "Host");
        let form = SectionForm::from_section(&section);
        assert_eq!((form.start.as_str(), form.end.as_str()), ("08:15", "09:45"));

        let patch = form.submit().unwrap().into_patch();
        assert_eq!(patch.time_slot, Some(slot));
        assert_eq!(patch.speaker.as_deref(), Some("Ada"));
        assert_eq!(patch.merged, None);
    }
}
