//! # Row Indexing
//!
//! A terminal has no touch target, so each rendered note gets a 1-based row
//! number and "tapping" a row means naming its number. Numbers are assigned
//! fresh on every listing from the store's current order; they are a view
//! concern and never stored.
//!
//! ```text
//!   1. A good day                                   Mon, 3 Jun
//!      We went on a vacation by the lake
//!   2. Keep at it                                   Mon, 3 Jun
//!      Sometimes things just happen
//! ```
//!
//! Removing row 1 shifts every following row up by one.

use crate::model::Note;
use std::str::FromStr;

/// A user-facing row number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex(pub usize);

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RowIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('.');
        match trimmed.parse::<usize>() {
            Ok(0) => Err("Row numbers start at 1".to_string()),
            Ok(n) => Ok(RowIndex(n)),
            Err(_) => Err(format!("Invalid row number: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub note: Note,
    pub index: RowIndex,
}

/// Numbers notes in the order given.
pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note: note.clone(),
            index: RowIndex(i + 1),
        })
        .collect()
}

/// The note shown at `index`, if the list is that long.
pub fn note_at(notes: &[Note], index: RowIndex) -> Option<&Note> {
    index.0.checked_sub(1).and_then(|i| notes.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_from_one_in_list_order() {
        let notes = vec![Note::new("A", "a"), Note::new("B", "b")];
        let indexed = index_notes(&notes);
        assert_eq!(indexed[0].index, RowIndex(1));
        assert_eq!(indexed[0].note.title, "A");
        assert_eq!(indexed[1].index, RowIndex(2));
    }

    #[test]
    fn parses_row_numbers() {
        assert_eq!("3".parse::<RowIndex>(), Ok(RowIndex(3)));
        assert_eq!(" 12. ".parse::<RowIndex>(), Ok(RowIndex(12)));
        assert!("0".parse::<RowIndex>().is_err());
        assert!("two".parse::<RowIndex>().is_err());
        assert!("-1".parse::<RowIndex>().is_err());
    }

    #[test]
    fn note_at_out_of_range_is_none() {
        let notes = vec![Note::new("A", "a")];
        assert_eq!(note_at(&notes, RowIndex(1)), Some(&notes[0]));
        assert_eq!(note_at(&notes, RowIndex(2)), None);
        assert_eq!(note_at(&notes, RowIndex(0)), None);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(RowIndex(7).to_string(), "7");
    }
}
