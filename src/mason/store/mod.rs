//! # Storage Layer
//!
//! The [`DataStore`] trait loads and saves whole snapshots of the two
//! collections. Commands load what they need, operate on it in memory and
//! save it back only when something changed.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per collection
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── contacts.json   # array of ContactRecord, in name order
//! └── notes.json      # array of NoteRecord, in insertion order
//! ```
//!
//! File names are configurable. A missing file is an empty collection.
//! Records are plain shapes ([`records`]) and are re-validated on load.

use crate::book::{AddressBook, Notebook};
use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod records;

pub trait DataStore {
    fn load_contacts(&self) -> Result<AddressBook>;

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;

    fn load_notes(&self) -> Result<Notebook>;

    fn save_notes(&mut self, notes: &Notebook) -> Result<()>;
}
