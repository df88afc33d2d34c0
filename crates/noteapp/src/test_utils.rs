use crate::dao::memory::MemDao;
use crate::model::Note;
use crate::store::{NoteStore, SeedPolicy};

/// Builds stores with known contents for tests.
pub struct StoreFixture {
    pub store: NoteStore<MemDao>,
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::seeded()
    }
}

impl StoreFixture {
    /// A store holding the sample notes, like a fresh session.
    pub fn seeded() -> Self {
        Self::open(SeedPolicy::Samples)
    }

    pub fn empty() -> Self {
        Self::open(SeedPolicy::Skip)
    }

    fn open(seed: SeedPolicy) -> Self {
        let store = NoteStore::open(MemDao::new(), seed).expect("memory store always opens");
        Self { store }
    }

    pub fn with_notes(mut self, notes: &[(&str, &str)]) -> Self {
        for (title, description) in notes {
            self.store.add(Note::new(*title, *description));
        }
        self
    }
}
