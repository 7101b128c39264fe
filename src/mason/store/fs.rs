use super::records::{self, ContactRecord, NoteRecord};
use super::DataStore;
use crate::book::{AddressBook, Notebook};
use crate::error::{MasonError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            contacts_file: DEFAULT_CONTACTS_FILE.to_string(),
            notes_file: DEFAULT_NOTES_FILE.to_string(),
        }
    }

    pub fn with_file_names(mut self, contacts: &str, notes: &str) -> Self {
        self.contacts_file = contacts.to_string();
        self.notes_file = notes.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(&self.contacts_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(&self.notes_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MasonError::Io)?;
        }
        Ok(())
    }

    fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no snapshot, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(MasonError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            MasonError::Store(format!("{} is not a valid snapshot: {}", path.display(), e))
        })
    }

    fn write_records<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(MasonError::Serialization)?;
        fs::write(path, content).map_err(MasonError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        let path = self.contacts_path();
        let rows: Vec<ContactRecord> = Self::read_records(&path)?;
        let book = records::address_book_from(rows)?;
        tracing::debug!(path = %path.display(), count = book.len(), "loaded contacts");
        Ok(book)
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        let path = self.contacts_path();
        self.write_records(&path, &records::contact_records(book))?;
        tracing::info!(path = %path.display(), count = book.len(), "saved contacts");
        Ok(())
    }

    fn load_notes(&self) -> Result<Notebook> {
        let path = self.notes_path();
        let rows: Vec<NoteRecord> = Self::read_records(&path)?;
        let notes = records::notebook_from(rows);
        tracing::debug!(path = %path.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        let path = self.notes_path();
        self.write_records(&path, &records::note_records(notes))?;
        tracing::info!(path = %path.display(), count = notes.len(), "saved notes");
        Ok(())
    }
}
