//! On-disk record shapes.
//!
//! The core types keep their invariants behind constructors, so they are not
//! serialized directly. Saving flattens them into these plain records;
//! loading runs every record back through the validators.

use crate::book::{AddressBook, Notebook};
use crate::error::Result;
use crate::fields::{Address, Birthday, Email, Name, Phone};
use crate::model::{Contact, Note};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// ISO `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name().as_str().to_string(),
            phones: contact
                .phones()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            email: contact.email().map(|e| e.as_str().to_string()),
            birthday: contact.birthday().map(|b| b.date()),
            address: contact.address().map(|a| a.as_str().to_string()),
        }
    }
}

impl ContactRecord {
    pub fn into_contact(self) -> Result<Contact> {
        let mut contact = Contact::new(Name::new(&self.name)?);
        let phones = self
            .phones
            .iter()
            .map(|raw| Phone::new(raw))
            .collect::<Result<Vec<_>>>()?;
        contact.replace_phones(phones);
        if let Some(raw) = self.email {
            contact.set_email(Email::new(&raw)?);
        }
        if let Some(date) = self.birthday {
            contact.set_birthday(Birthday::from_date(date));
        }
        if let Some(raw) = self.address {
            contact.set_address(Address::new(&raw));
        }
        Ok(contact)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            body: note.body.clone(),
            tags: note.tags.clone(),
        }
    }
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        Note::new(record.title, record.body, record.tags)
    }
}

pub fn contact_records(book: &AddressBook) -> Vec<ContactRecord> {
    book.iter().map(ContactRecord::from).collect()
}

pub fn note_records(notes: &Notebook) -> Vec<NoteRecord> {
    notes.iter().map(NoteRecord::from).collect()
}

/// Rebuilds an address book; a repeated name fails with `DuplicateKey`.
pub fn address_book_from(records: Vec<ContactRecord>) -> Result<AddressBook> {
    let mut book = AddressBook::new();
    for record in records {
        book.add(record.into_contact()?)?;
    }
    Ok(book)
}

pub fn notebook_from(records: Vec<NoteRecord>) -> Notebook {
    let mut notes = Notebook::new();
    for record in records {
        notes.restore(record.into());
    }
    notes
}
