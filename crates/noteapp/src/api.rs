//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for a UI. A [`NotesApi`] is one session: it owns the
//! [`NoteStore`] and the [`NoteForm`] whose buffers the user is typing into.
//!
//! The API does not render, print, or decide what a screen looks like. It
//! returns [`CmdResult`] values and leaves presentation to the caller.
//!
//! ## Generic Over NoteDao
//!
//! - Production: `NotesApi<AnyDao>`, picked from configuration
//! - Testing: `NotesApi<MemDao>`

use crate::commands;
use crate::config::NoteAppConfig;
use crate::dao::{AnyDao, NoteDao};
use crate::error::Result;
use crate::form::{Field, NoteForm};
use crate::index::RowIndex;
use crate::model::Note;
use crate::store::{NoteStore, SeedPolicy};
use std::path::PathBuf;
use tracing::debug;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NOTE_ADDED};
pub use crate::form::Field as FormField;

#[derive(Debug)]
pub struct NotesApi<D: NoteDao> {
    store: NoteStore<D>,
    form: NoteForm,
}

impl<D: NoteDao> NotesApi<D> {
    pub fn new(store: NoteStore<D>) -> Self {
        Self {
            store,
            form: NoteForm::new(),
        }
    }

    pub fn open(dao: D, seed: SeedPolicy) -> Result<Self> {
        Ok(Self::new(NoteStore::open(dao, seed)?))
    }

    pub fn list_notes(&self) -> CmdResult {
        commands::list::run(&self.store)
    }

    pub fn notes(&self) -> &[Note] {
        self.store.list()
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    /// Proposes a new value for a form buffer. Returns whether it was kept.
    pub fn propose(&mut self, field: Field, value: &str) -> bool {
        let accepted = self.form.propose(field, value);
        if !accepted {
            debug!(?field, "rejected input with disallowed characters");
        }
        accepted
    }

    /// The save action on the session form.
    pub fn save(&mut self) -> CmdResult {
        commands::add::run(&mut self.store, &mut self.form)
    }

    /// Adds a note in one step through a scratch form, leaving the session
    /// form untouched. Follows the same rules as typing then saving.
    pub fn add_note(&mut self, title: &str, description: &str) -> CmdResult {
        let mut form = NoteForm::new();
        form.propose_title(title);
        form.propose_description(description);
        commands::add::run(&mut self.store, &mut form)
    }

    /// Tap-to-delete by row number.
    pub fn tap(&mut self, index: RowIndex) -> CmdResult {
        commands::remove::run(&mut self.store, index)
    }

    pub fn remove_note(&mut self, note: &Note) {
        self.store.remove(note);
    }

    pub fn clear(&mut self) -> CmdResult {
        commands::clear::run(&mut self.store)
    }

    pub fn store(&self) -> &NoteStore<D> {
        &self.store
    }
}

impl NotesApi<AnyDao> {
    /// Opens the backend the config asks for. Samples are seeded only into a
    /// backend that has never held notes.
    pub fn from_config(config: &NoteAppConfig, data_dir: impl Into<PathBuf>) -> Result<Self> {
        let dao = AnyDao::for_storage(config.storage, data_dir);
        let seed = if config.seed_sample_notes && dao.is_fresh() {
            SeedPolicy::Samples
        } else {
            SeedPolicy::Skip
        };
        debug!(storage = %config.storage, ?seed, "opening note store");
        Self::open(dao, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageKind;
    use crate::dao::memory::MemDao;
    use crate::sample::SampleDataSource;
    use tempfile::TempDir;

    fn api() -> NotesApi<MemDao> {
        NotesApi::open(MemDao::new(), SeedPolicy::Skip).unwrap()
    }

    #[test]
    fn typing_then_saving_adds_a_note() {
        let mut api = api();
        assert!(api.propose(FormField::Title, "Groceries"));
        assert!(api.propose(FormField::Description, "Milk and eggs"));

        let result = api.save();

        assert_eq!(result.messages[0].content, NOTE_ADDED);
        assert_eq!(api.notes().len(), 1);
        assert_eq!(api.form().title(), "");
    }

    #[test]
    fn add_note_leaves_session_form_alone() {
        let mut api = api();
        api.propose(FormField::Title, "Draft");

        api.add_note("Quick", "one step");

        assert_eq!(api.form().title(), "Draft");
        assert_eq!(api.notes()[0].title, "Quick");
    }

    #[test]
    fn add_note_with_digits_is_silent() {
        let mut api = api();
        let result = api.add_note("Room 101", "Meeting");
        assert!(result.is_silent());
        assert!(api.notes().is_empty());
    }

    #[test]
    fn tap_removes_listed_row() {
        let mut api = api();
        api.add_note("First", "one");
        api.add_note("Second", "two");

        api.tap(RowIndex(1));

        let listed = api.list_notes().listed_notes;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].note.title, "Second");
        assert_eq!(listed[0].index, RowIndex(1));
    }

    #[test]
    fn remove_note_is_idempotent() {
        let mut api = api();
        api.add_note("Only", "one");
        let note = api.notes()[0].clone();
        api.remove_note(&note);
        api.remove_note(&note);
        assert!(api.notes().is_empty());
    }

    #[test]
    fn memory_config_seeds_samples() {
        let temp = TempDir::new().unwrap();
        let api = NotesApi::from_config(&NoteAppConfig::default(), temp.path()).unwrap();
        assert_eq!(api.notes().len(), SampleDataSource::new().load_notes().len());
    }

    #[test]
    fn seeding_can_be_disabled() {
        let temp = TempDir::new().unwrap();
        let config = NoteAppConfig {
            seed_sample_notes: false,
            ..Default::default()
        };
        let api = NotesApi::from_config(&config, temp.path()).unwrap();
        assert!(api.notes().is_empty());
    }

    #[test]
    fn file_storage_carries_notes_across_sessions() {
        let temp = TempDir::new().unwrap();
        let config = NoteAppConfig {
            storage: StorageKind::File,
            ..Default::default()
        };

        let mut first = NotesApi::from_config(&config, temp.path()).unwrap();
        let seeded = first.notes().len();
        first.add_note("Groceries", "Milk and eggs");
        drop(first);

        let second = NotesApi::from_config(&config, temp.path()).unwrap();
        assert_eq!(second.notes().len(), seeded + 1);
        assert_eq!(second.notes().last().unwrap().title, "Groceries");
    }

    #[test]
    fn emptied_file_store_is_not_reseeded() {
        let temp = TempDir::new().unwrap();
        let config = NoteAppConfig {
            storage: StorageKind::File,
            ..Default::default()
        };

        let mut first = NotesApi::from_config(&config, temp.path()).unwrap();
        first.clear();
        drop(first);

        let second = NotesApi::from_config(&config, temp.path()).unwrap();
        assert!(second.notes().is_empty());
    }
}
