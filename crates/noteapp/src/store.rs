//! # Note Store
//!
//! [`NoteStore`] is the single source of truth for the notes of one session.
//! It keeps the ordered list in memory and mirrors every change into a
//! [`NoteDao`].
//!
//! ## Ordering
//!
//! Notes are kept in insertion order: seeded notes first, then every added
//! note at the end. Nothing re-sorts the list.
//!
//! ## Totality
//!
//! `add`, `remove` and `list` never fail. A backend write that fails is
//! logged and the in-memory list stays authoritative for the session.
//!
//! ## Identity
//!
//! Removal matches on [`Note::id`], never on field equality, so two notes
//! with identical text and timestamp are still told apart.

use crate::dao::{upsert_row, NoteDao};
use crate::error::Result;
use crate::model::Note;
use crate::sample::SampleDataSource;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Whether an empty backend gets the demo notes at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    #[default]
    Samples,
    Skip,
}

#[derive(Debug)]
pub struct NoteStore<D: NoteDao> {
    notes: Vec<Note>,
    dao: D,
}

impl<D: NoteDao> NoteStore<D> {
    /// Loads the backend rows. If there are none and `seed` asks for it, the
    /// sample notes are loaded once and written through to the backend.
    pub fn open(dao: D, seed: SeedPolicy) -> Result<Self> {
        let notes = dao.get_all()?;
        let mut store = Self {
            notes: Vec::new(),
            dao,
        };

        if notes.is_empty() && seed == SeedPolicy::Samples {
            let samples = SampleDataSource::new().load_notes();
            info!(count = samples.len(), "seeding store with sample notes");
            for note in samples {
                store.add(note);
            }
        } else {
            debug!(count = notes.len(), "loaded notes from backend");
            store.notes = notes;
        }

        Ok(store)
    }

    /// Current notes, oldest first.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends to the end of the list. A note whose id is already listed
    /// replaces that entry in place, the same upsert the backend applies.
    pub fn add(&mut self, note: Note) {
        if let Err(e) = self.dao.insert(&note) {
            warn!(id = %note.id, error = %e, "backend insert failed, keeping note in memory");
        }
        debug!(id = %note.id, title = %note.title, "note added");
        upsert_row(&mut self.notes, &note);
    }

    /// Removes the note with the same id. Absent notes are ignored.
    pub fn remove(&mut self, note: &Note) {
        self.remove_by_id(&note.id);
    }

    /// Removes and returns the note with this id, `None` if it is not present.
    pub fn remove_by_id(&mut self, id: &Uuid) -> Option<Note> {
        let position = self.notes.iter().position(|note| &note.id == id)?;
        let removed = self.notes.remove(position);
        if let Err(e) = self.dao.delete_one(&removed) {
            warn!(id = %removed.id, error = %e, "backend delete failed");
        }
        debug!(id = %removed.id, title = %removed.title, "note removed");
        Some(removed)
    }

    /// Drops every note, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.notes.len();
        self.notes.clear();
        if let Err(e) = self.dao.delete_all() {
            warn!(error = %e, "backend delete_all failed");
        }
        count
    }

    pub fn dao(&self) -> &D {
        &self.dao
    }
}
