//! # Domain Model
//!
//! The two entity types, [`Contact`] and [`Note`], and their closed field
//! sets, [`ContactField`] and [`NoteField`].
//!
//! A contact is identified by its [`Name`]. The name is set once, at
//! construction; renaming is a collection operation
//! ([`crate::book::AddressBook::rename`]) because it changes the key the
//! contact is stored under.
//!
//! Notes have no identity beyond their title, which the
//! [`crate::book::Notebook`] keeps unique when notes are added. Later edits
//! may reuse an existing title.

use crate::error::{MasonError, Result};
use crate::fields::{Address, Birthday, Email, Name, Phone};
use crate::query::{EntityField, MatchMode, Searchable, SortValue};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Address,
    Birthday,
}

impl EntityField for ContactField {
    const ENTITY: &'static str = "contact";
    const ALL: &'static [Self] = &[
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Address,
        ContactField::Birthday,
    ];

    fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::Address => "address",
            ContactField::Birthday => "birthday",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Phone => "Phones",
            ContactField::Email => "Email",
            ContactField::Address => "Address",
            ContactField::Birthday => "Birthday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteField {
    Title,
    Body,
    Tags,
}

impl EntityField for NoteField {
    const ENTITY: &'static str = "note";
    const ALL: &'static [Self] = &[NoteField::Title, NoteField::Body, NoteField::Tags];

    fn name(self) -> &'static str {
        match self {
            NoteField::Title => "title",
            NoteField::Body => "body",
            NoteField::Tags => "tags",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NoteField::Title => "Title",
            NoteField::Body => "Body",
            NoteField::Tags => "Tags",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Name,
    phones: Vec<Phone>,
    email: Option<Email>,
    birthday: Option<Birthday>,
    address: Option<Address>,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            email: None,
            birthday: None,
            address: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    // Only the address book may change the key a contact is stored under.
    pub(crate) fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    fn phone_position(&self, raw: &str) -> Option<usize> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        self.phones.iter().position(|p| p.as_str() == digits)
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phone_position(raw).map(|idx| &self.phones[idx])
    }

    pub fn add_phone(&mut self, phone: Phone) -> Result<()> {
        if self.phones.contains(&phone) {
            return Err(MasonError::duplicate("phone", phone.as_str()));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn edit_phone(&mut self, old: &str, new: Phone) -> Result<()> {
        let idx = self
            .phone_position(old)
            .ok_or_else(|| MasonError::not_found("phone", old.trim()))?;
        if self.phones[idx] != new && self.phones.contains(&new) {
            return Err(MasonError::duplicate("phone", new.as_str()));
        }
        self.phones[idx] = new;
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone> {
        let idx = self
            .phone_position(raw)
            .ok_or_else(|| MasonError::not_found("phone", raw.trim()))?;
        Ok(self.phones.remove(idx))
    }

    /// Replaces every phone; repeated numbers keep their first occurrence.
    pub fn replace_phones(&mut self, phones: Vec<Phone>) {
        let mut unique: Vec<Phone> = Vec::with_capacity(phones.len());
        for phone in phones {
            if !unique.contains(&phone) {
                unique.push(phone);
            }
        }
        self.phones = unique;
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    pub fn clear_email(&mut self) {
        self.email = None;
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn clear_address(&mut self) {
        self.address = None;
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}

impl Searchable for Contact {
    type Field = ContactField;

    fn field_matches(&self, field: ContactField, keyword: &str, mode: MatchMode) -> bool {
        match field {
            ContactField::Name => mode.apply(&self.name, keyword),
            ContactField::Phone => self.phones.iter().any(|p| mode.apply(p, keyword)),
            ContactField::Email => self.email.as_ref().is_some_and(|e| mode.apply(e, keyword)),
            ContactField::Address => self
                .address
                .as_ref()
                .is_some_and(|a| mode.apply(a, keyword)),
            ContactField::Birthday => self.birthday.is_some_and(|b| mode.apply(&b, keyword)),
        }
    }

    fn sort_key(&self, field: ContactField) -> Option<SortValue> {
        match field {
            ContactField::Name => SortValue::text(self.name.as_str()),
            ContactField::Phone => {
                let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
                SortValue::joined(&phones)
            }
            ContactField::Email => self.email.as_ref().and_then(|e| SortValue::text(e.as_str())),
            ContactField::Address => self
                .address
                .as_ref()
                .and_then(|a| SortValue::text(a.as_str())),
            ContactField::Birthday => self.birthday.map(|b| SortValue::Date(b.date())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            body: body.into().trim().to_string(),
            tags,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    /// Applies the non-empty parts of `update`; empty parts leave the note as is.
    pub fn apply(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title.filter(|t| !t.trim().is_empty()) {
            self.title = title.trim().to_string();
        }
        if let Some(body) = update.body.filter(|b| !b.trim().is_empty()) {
            self.body = body.trim().to_string();
        }
        if let Some(tags) = update.tags.filter(|t| !t.is_empty()) {
            self.tags = tags;
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

impl Searchable for Note {
    type Field = NoteField;

    fn field_matches(&self, field: NoteField, keyword: &str, mode: MatchMode) -> bool {
        match field {
            NoteField::Title => mode.apply(&self.title, keyword),
            NoteField::Body => mode.apply(&self.body, keyword),
            NoteField::Tags => self.tags.iter().any(|t| mode.apply(t, keyword)),
        }
    }

    fn sort_key(&self, field: NoteField) -> Option<SortValue> {
        match field {
            NoteField::Title => SortValue::text(&self.title),
            NoteField::Body => SortValue::text(&self.body),
            NoteField::Tags => SortValue::joined(&self.tags),
        }
    }
}

/// Partial note edit. `None` and empty values keep the current content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Splits comma separated tags, trimming each and dropping empty ones.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
