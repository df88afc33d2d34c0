use crate::commands::{CmdMessage, CmdResult};
use crate::dao::NoteDao;
use crate::store::NoteStore;

pub fn run<D: NoteDao>(store: &mut NoteStore<D>) -> CmdResult {
    let removed = store.list().to_vec();
    store.clear();

    let mut result = CmdResult::default();
    if !removed.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Deleted {} note{}",
            removed.len(),
            if removed.len() == 1 { "" } else { "s" }
        )));
    }
    result.with_affected_notes(removed)
}
