use super::{upsert_row, NoteDao};
use crate::error::{NoteError, Result};
use crate::model::Note;
use uuid::Uuid;

/// In-memory rows. The default backend, and the one tests use.
#[derive(Debug, Default)]
pub struct MemDao {
    rows: Vec<Note>,
    simulate_write_error: bool,
}

impl MemDao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Note>) -> Self {
        Self {
            rows,
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(NoteError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl NoteDao for MemDao {
    fn get_all(&self) -> Result<Vec<Note>> {
        Ok(self.rows.clone())
    }

    fn get_by_id(&self, id: &Uuid) -> Result<Note> {
        self.rows
            .iter()
            .find(|row| &row.id == id)
            .cloned()
            .ok_or(NoteError::NoteNotFound(*id))
    }

    fn insert(&mut self, note: &Note) -> Result<()> {
        self.check_writable()?;
        upsert_row(&mut self.rows, note);
        Ok(())
    }

    fn update(&mut self, note: &Note) -> Result<()> {
        self.insert(note)
    }

    fn delete_all(&mut self) -> Result<()> {
        self.check_writable()?;
        self.rows.clear();
        Ok(())
    }

    fn delete_one(&mut self, note: &Note) -> Result<()> {
        self.check_writable()?;
        self.rows.retain(|row| row.id != note.id);
        Ok(())
    }
}
