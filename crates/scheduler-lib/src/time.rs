use core::fmt;

/// A wall-clock time with minute precision, written `HH:MM`.
///
/// Ordering matches the lexicographic order of the zero-padded text, so sorting by `ClockTime`
/// gives the same result as sorting the displayed strings.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }
    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub fn parse(str: &str) -> Result<Self, ClockTimeParseError<'_>> {
        macro_rules! bail {
            ($kind:expr) => {
                return Err(ClockTimeParseError { str, kind: $kind })
            };
        }

        let trimmed = str.trim();
        let Some((hour_str, minute_str)) = trimmed.split_once(':') else {
            bail!(ClockTimeParseErrorKind::NoColon);
        };

        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(hour_str) || hour_str.len() > 2 {
            bail!(ClockTimeParseErrorKind::InvalidHour);
        }
        if !is_digits(minute_str) || minute_str.len() != 2 {
            bail!(ClockTimeParseErrorKind::InvalidMinute);
        }

        // both are at most two ascii digits, so these can't overflow a u8
        let hour: u8 = hour_str.bytes().fold(0, |acc, b| acc * 10 + (b - b'0'));
        let minute: u8 = minute_str.bytes().fold(0, |acc, b| acc * 10 + (b - b'0'));

        if hour >= 24 {
            bail!(ClockTimeParseErrorKind::InvalidHour);
        }
        if minute >= 60 {
            bail!(ClockTimeParseErrorKind::InvalidMinute);
        }
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTimeParseError<'a> {
    pub str: &'a str,
    pub kind: ClockTimeParseErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTimeParseErrorKind {
    NoColon,
    InvalidHour,
    InvalidMinute,
}

impl fmt::Display for ClockTimeParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoColon => "expected a time of the form HH:MM",
            Self::InvalidHour => "hour must be between 00 and 23",
            Self::InvalidMinute => "minute must be between 00 and 59",
        })
    }
}
impl std::error::Error for ClockTimeParseErrorKind {}

impl fmt::Display for ClockTimeParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time {:?}: {}", self.str, self.kind)
    }
}
impl std::error::Error for ClockTimeParseError<'_> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    /// 09:00 - 10:00
    pub const DEFAULT: Self = Self {
        start: ClockTime { hour: 9, minute: 0 },
        end: ClockTime {
            hour: 10,
            minute: 0,
        },
    };

    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn validate(&self) -> Result<(), TimeSlotError> {
        if self.end <= self.start {
            return Err(TimeSlotError::EndNotAfterStart {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl Default for TimeSlot {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlotError {
    EndNotAfterStart { start: ClockTime, end: ClockTime },
}

impl fmt::Display for TimeSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndNotAfterStart { .. } => f.write_str("End time must be after start time"),
        }
    }
}
impl std::error::Error for TimeSlotError {}

#[cfg(test)]
mod tests {
    use super::{ClockTime, ClockTimeParseError, ClockTimeParseErrorKind, TimeSlot, TimeSlotError};

    fn time(str: &str) -> ClockTime {
        ClockTime::parse(str).unwrap()
    }

    #[test]
    fn test_parsing() {
        assert_eq!(time("09:05"), ClockTime::new(9, 5).unwrap());
        assert_eq!(time("9:05"), ClockTime::new(9, 5).unwrap());
        assert_eq!(time(" 23:59 "), ClockTime::new(23, 59).unwrap());
        assert_eq!(time("00:00").to_string(), "00:00");
        assert_eq!(time("7:30").to_string(), "07:30");

        for (str, kind) in [
            ("0930", ClockTimeParseErrorKind::NoColon),
            ("", ClockTimeParseErrorKind::NoColon),
            ("24:00", ClockTimeParseErrorKind::InvalidHour),
            ("123:00", ClockTimeParseErrorKind::InvalidHour),
            ("ab:00", ClockTimeParseErrorKind::InvalidHour),
            ("10:60", ClockTimeParseErrorKind::InvalidMinute),
            ("10:5", ClockTimeParseErrorKind::InvalidMinute),
            ("10:", ClockTimeParseErrorKind::InvalidMinute),
        ] {
            assert_eq!(
                ClockTime::parse(str),
                Err(ClockTimeParseError { str, kind }),
                "{str:?}"
            );
        }
    }

    #[test]
    fn test_order_matches_padded_text() {
        let mut times = ["10:00", "9:30", "09:05", "23:00", "00:15"].map(time);
        times.sort();
        let texts: Vec<String> = times.iter().map(ToString::to_string).collect();
        let mut sorted_texts = texts.clone();
        sorted_texts.sort();
        assert_eq!(texts, sorted_texts);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            TimeSlot::new(time("10:00"), time("09:00")).validate(),
            Err(TimeSlotError::EndNotAfterStart {
                start: time("10:00"),
                end: time("09:00"),
            })
        );
        assert!(TimeSlot::new(time("09:00"), time("09:00")).validate().is_err());
        assert!(TimeSlot::new(time("09:00"), time("10:00")).validate().is_ok());
        assert_eq!(TimeSlot::DEFAULT.to_string(), "09:00 - 10:00");
    }
}
