use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteUpdate};
use crate::store::DataStore;

#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

fn describe(note: &Note) -> &str {
    if note.title.is_empty() {
        "(untitled)"
    } else {
        &note.title
    }
}

pub fn add<S: DataStore>(store: &mut S, draft: NoteDraft) -> Result<CmdResult> {
    let mut notes = store.load_notes()?;
    let added = notes
        .add(Note::new(draft.title, draft.body, draft.tags))?
        .clone();
    store.save_notes(&notes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note added: {}", describe(&added))));
    result.affected_notes.push(added);
    Ok(result)
}

pub fn edit<S: DataStore>(store: &mut S, title: &str, update: NoteUpdate) -> Result<CmdResult> {
    let mut notes = store.load_notes()?;
    let updated = notes.update(title, update)?.clone();
    store.save_notes(&notes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note updated: {}",
        describe(&updated)
    )));
    result.affected_notes.push(updated);
    Ok(result)
}

pub fn delete<S: DataStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let mut notes = store.load_notes()?;
    let removed = notes.delete(title)?;
    store.save_notes(&notes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note deleted: {}",
        describe(&removed)
    )));
    result.affected_notes.push(removed);
    Ok(result)
}
