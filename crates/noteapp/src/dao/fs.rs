use super::{upsert_row, NoteDao};
use crate::error::{NoteError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const NOTES_FILENAME: &str = "notes.json";

/// Keeps the note table as a JSON array in `<root>/notes.json`.
///
/// Every call re-reads the file, so the file is the only state.
#[derive(Debug, Clone)]
pub struct JsonFileDao {
    root: PathBuf,
}

impl JsonFileDao {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(NOTES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NoteError::Io)?;
        }
        Ok(())
    }

    fn load_rows(&self) -> Result<Vec<Note>> {
        let path = self.notes_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(NoteError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<Note> = serde_json::from_str(&content).map_err(NoteError::Serialization)?;
        Ok(rows)
    }

    fn save_rows(&self, rows: &[Note]) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(rows).map_err(NoteError::Serialization)?;

        // Write then rename, readers only ever see a whole table
        let tmp_file = self.root.join(format!(".notes-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(NoteError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.notes_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NoteError::Io(e));
        }

        debug!(rows = rows.len(), path = %self.notes_path().display(), "saved note table");
        Ok(())
    }
}

impl NoteDao for JsonFileDao {
    fn get_all(&self) -> Result<Vec<Note>> {
        self.load_rows()
    }

    fn get_by_id(&self, id: &Uuid) -> Result<Note> {
        self.load_rows()?
            .into_iter()
            .find(|row| &row.id == id)
            .ok_or(NoteError::NoteNotFound(*id))
    }

    fn insert(&mut self, note: &Note) -> Result<()> {
        let mut rows = self.load_rows()?;
        upsert_row(&mut rows, note);
        self.save_rows(&rows)
    }

    fn update(&mut self, note: &Note) -> Result<()> {
        self.insert(note)
    }

    fn delete_all(&mut self) -> Result<()> {
        self.save_rows(&[])
    }

    fn delete_one(&mut self, note: &Note) -> Result<()> {
        let mut rows = self.load_rows()?;
        let before = rows.len();
        rows.retain(|row| row.id != note.id);
        if rows.len() == before {
            return Ok(());
        }
        self.save_rows(&rows)
    }
}
