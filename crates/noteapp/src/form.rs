//! # Input Form
//!
//! [`NoteForm`] holds the two text buffers of the note entry form. A UI never
//! edits a buffer directly: it proposes the whole new value, and the value is
//! committed only when every character is a letter or whitespace. A rejected
//! proposal leaves the buffer exactly as it was.
//!
//! Saving needs both buffers non-empty. An incomplete form is not an error,
//! saving it simply does nothing.

use crate::dao::NoteDao;
use crate::model::Note;
use crate::store::NoteStore;

pub const TITLE_LABEL: &str = "Title";
pub const DESCRIPTION_LABEL: &str = "Add a note";
pub const SAVE_LABEL: &str = "Save";

/// Accepts letters and whitespace only. The empty string is accepted.
///
/// Letter-numbers such as `Ⅻ` are alphabetic to Unicode but numeric too,
/// and are refused.
pub fn is_allowed_input(value: &str) -> bool {
    value.chars().all(is_letter_or_whitespace)
}

fn is_letter_or_whitespace(c: char) -> bool {
    c.is_whitespace() || (c.is_alphabetic() && !c.is_numeric())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteForm {
    title: String,
    description: String,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Commits `value` to the field if it passes [`is_allowed_input`].
    /// Returns whether the buffer was replaced.
    pub fn propose(&mut self, field: Field, value: &str) -> bool {
        if !is_allowed_input(value) {
            return false;
        }
        let buffer = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
        };
        *buffer = value.to_string();
        true
    }

    pub fn propose_title(&mut self, value: &str) -> bool {
        self.propose(Field::Title, value)
    }

    pub fn propose_description(&mut self, value: &str) -> bool {
        self.propose(Field::Description, value)
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    /// Adds a new note built from the buffers and clears them.
    /// Does nothing and returns `None` unless both buffers are filled.
    pub fn save<D: NoteDao>(&mut self, store: &mut NoteStore<D>) -> Option<Note> {
        if !self.is_complete() {
            return None;
        }
        let note = Note::new(
            std::mem::take(&mut self.title),
            std::mem::take(&mut self.description),
        );
        store.add(note.clone());
        Some(note)
    }
}
