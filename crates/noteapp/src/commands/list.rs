use crate::commands::CmdResult;
use crate::dao::NoteDao;
use crate::index::index_notes;
use crate::store::NoteStore;

pub fn run<D: NoteDao>(store: &NoteStore<D>) -> CmdResult {
    CmdResult::default().with_listed_notes(index_notes(store.list()))
}
