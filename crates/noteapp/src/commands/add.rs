use crate::commands::{CmdMessage, CmdResult, NOTE_ADDED};
use crate::dao::NoteDao;
use crate::form::NoteForm;
use crate::store::NoteStore;

/// The save action. An incomplete form gives an empty result.
pub fn run<D: NoteDao>(store: &mut NoteStore<D>, form: &mut NoteForm) -> CmdResult {
    let mut result = CmdResult::default();
    if let Some(note) = form.save(store) {
        result.add_message(CmdMessage::success(NOTE_ADDED));
        result.affected_notes.push(note);
    }
    result
}
