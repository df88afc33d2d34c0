use crate::commands::CmdResult;
use crate::dao::NoteDao;
use crate::index::{note_at, RowIndex};
use crate::store::NoteStore;

/// Tap-to-delete: removes the note shown at `index`.
/// A row that does not exist gives an empty result.
pub fn run<D: NoteDao>(store: &mut NoteStore<D>, index: RowIndex) -> CmdResult {
    let target = match note_at(store.list(), index) {
        Some(note) => note.clone(),
        None => return CmdResult::default(),
    };
    store.remove(&target);
    CmdResult::default().with_affected_notes(vec![target])
}
