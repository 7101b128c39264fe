use crate::error::{MasonError, Result};
use crate::model::{Note, NoteUpdate};

const KIND: &str = "note";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn add(&mut self, note: Note) -> Result<&Note> {
        if note.is_blank() {
            return Err(MasonError::validation(
                "note",
                "a note needs a title or a body",
            ));
        }
        if self.find(&note.title).is_some() {
            return Err(MasonError::duplicate(KIND, note.title));
        }
        self.notes.push(note);
        Ok(&self.notes[self.notes.len() - 1])
    }

    // Snapshots may hold repeated titles produced by edits.
    pub(crate) fn restore(&mut self, note: Note) {
        self.notes.push(note);
    }

    fn position(&self, title: &str) -> Option<usize> {
        let title = title.trim();
        self.notes.iter().position(|n| n.title == title)
    }

    /// First note with exactly this title.
    pub fn find(&self, title: &str) -> Option<&Note> {
        self.position(title).map(|idx| &self.notes[idx])
    }

    pub fn get(&self, title: &str) -> Result<&Note> {
        self.find(title)
            .ok_or_else(|| MasonError::not_found(KIND, title.trim()))
    }

    pub fn get_mut(&mut self, title: &str) -> Result<&mut Note> {
        let idx = self
            .position(title)
            .ok_or_else(|| MasonError::not_found(KIND, title.trim()))?;
        Ok(&mut self.notes[idx])
    }

    pub fn update(&mut self, title: &str, update: NoteUpdate) -> Result<&Note> {
        let note = self.get_mut(title)?;
        note.apply(update);
        Ok(note)
    }

    pub fn delete(&mut self, title: &str) -> Result<Note> {
        let idx = self
            .position(title)
            .ok_or_else(|| MasonError::not_found(KIND, title.trim()))?;
        Ok(self.notes.remove(idx))
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
