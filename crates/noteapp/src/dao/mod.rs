//! # Note Persistence
//!
//! [`NoteDao`] is the row-level contract a [`crate::store::NoteStore`] delegates
//! to. It mirrors a single `notes` table: ordered rows keyed by note id.
//!
//! ## Implementations
//!
//! - [`memory::MemDao`]: rows live in a `Vec`, gone when the process exits.
//!   This is the default backend.
//! - [`fs::JsonFileDao`]: rows are kept in `notes.json` inside a data directory.
//!
//! ## Upsert Semantics
//!
//! `insert` and `update` behave the same way: a row with the same id is
//! replaced where it stands, otherwise the row is appended. `delete_one` of a
//! missing row is not an error.

use crate::config::StorageKind;
use crate::error::Result;
use crate::model::Note;
use std::path::PathBuf;
use uuid::Uuid;

pub mod fs;
pub mod memory;

pub trait NoteDao {
    /// All rows in insertion order
    fn get_all(&self) -> Result<Vec<Note>>;

    /// A single row, `NoteNotFound` if absent
    fn get_by_id(&self, id: &Uuid) -> Result<Note>;

    /// Upsert
    fn insert(&mut self, note: &Note) -> Result<()>;

    /// Upsert
    fn update(&mut self, note: &Note) -> Result<()>;

    fn delete_all(&mut self) -> Result<()>;

    /// Remove the row with this note's id, no-op if absent
    fn delete_one(&mut self, note: &Note) -> Result<()>;
}

/// Replace-or-append shared by the upsert operations of every backend.
pub(crate) fn upsert_row(rows: &mut Vec<Note>, note: &Note) {
    match rows.iter_mut().find(|row| row.id == note.id) {
        Some(row) => *row = note.clone(),
        None => rows.push(note.clone()),
    }
}

/// Backend picked at runtime from configuration.
#[derive(Debug)]
pub enum AnyDao {
    Memory(memory::MemDao),
    File(fs::JsonFileDao),
}

impl AnyDao {
    pub fn for_storage(kind: StorageKind, data_dir: impl Into<PathBuf>) -> Self {
        match kind {
            StorageKind::Memory => AnyDao::Memory(memory::MemDao::new()),
            StorageKind::File => AnyDao::File(fs::JsonFileDao::new(data_dir)),
        }
    }

    /// True when the backend has never held a table, so seeding is welcome.
    /// A file table that was emptied on purpose is not fresh.
    pub fn is_fresh(&self) -> bool {
        match self {
            AnyDao::Memory(dao) => dao.get_all().map(|rows| rows.is_empty()).unwrap_or(true),
            AnyDao::File(dao) => !dao.notes_path().exists(),
        }
    }

    fn inner(&self) -> &dyn NoteDao {
        match self {
            AnyDao::Memory(dao) => dao,
            AnyDao::File(dao) => dao,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn NoteDao {
        match self {
            AnyDao::Memory(dao) => dao,
            AnyDao::File(dao) => dao,
        }
    }
}

impl NoteDao for AnyDao {
    fn get_all(&self) -> Result<Vec<Note>> {
        self.inner().get_all()
    }

    fn get_by_id(&self, id: &Uuid) -> Result<Note> {
        self.inner().get_by_id(id)
    }

    fn insert(&mut self, note: &Note) -> Result<()> {
        self.inner_mut().insert(note)
    }

    fn update(&mut self, note: &Note) -> Result<()> {
        self.inner_mut().update(note)
    }

    fn delete_all(&mut self) -> Result<()> {
        self.inner_mut().delete_all()
    }

    fn delete_one(&mut self, note: &Note) -> Result<()> {
        self.inner_mut().delete_one(note)
    }
}
