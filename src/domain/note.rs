//! Dated notes attached to animal records

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::date::CalendarDate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("Invalid note")]
    Invalid,
}

/// A dated free-text note
///
/// Messages are trimmed, non-empty, and never contain commas or newlines
/// (the record file uses both as separators). Ordering is by date, then
/// message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Note {
    date: CalendarDate,
    message: String,
}

impl Note {
    pub fn new(date: CalendarDate, message: impl AsRef<str>) -> Result<Self, NoteError> {
        let message = message.as_ref();
        if message.contains('\n') || message.contains(',') || message.trim().is_empty() {
            return Err(NoteError::Invalid);
        }

        Ok(Self {
            date,
            message: message.trim().to_string(),
        })
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.message)
    }
}

impl FromStr for Note {
    type Err = NoteError;

    /// Parses `M/D/YYYY message`, splitting on the first space
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, message) = s.split_once(' ').ok_or(NoteError::Invalid)?;
        let date: CalendarDate = date.parse().map_err(|_| NoteError::Invalid)?;
        Self::new(date, message)
    }
}
