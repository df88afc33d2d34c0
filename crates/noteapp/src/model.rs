use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use uuid::Uuid;

/// Row date pattern, renders as "Mon, 3 Jun".
pub const DEFAULT_DATE_FORMAT: &str = "%a, %-d %b";

/// A single user-authored note.
///
/// Notes are never edited in place: removal and upserts replace the whole
/// record, so every field is set once in [`Note::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub entry_date: DateTime<Local>,
}

impl Note {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_entry_date(title, description, Local::now())
    }

    pub fn with_entry_date(
        title: impl Into<String>,
        description: impl Into<String>,
        entry_date: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            entry_date,
        }
    }

    /// Formats the entry date with a chrono strftime pattern.
    /// An unusable pattern falls back to [`DEFAULT_DATE_FORMAT`].
    pub fn format_entry_date(&self, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.entry_date.format(pattern)).is_err() {
            out.clear();
            let _ = write!(out, "{}", self.entry_date.format(DEFAULT_DATE_FORMAT));
        }
        out
    }
}

/// True when chrono can render every item of the pattern.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
