use crate::error::{MasonError, Result};
use crate::fields::Name;
use crate::model::Contact;
use std::collections::BTreeMap;

const KIND: &str = "contact";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    contacts: BTreeMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name.trim())
    }

    pub fn add(&mut self, contact: Contact) -> Result<&Contact> {
        let key = contact.name().as_str().to_string();
        if self.contacts.contains_key(&key) {
            return Err(MasonError::duplicate(KIND, key));
        }
        Ok(self.contacts.entry(key).or_insert(contact))
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name.trim())
    }

    pub fn get(&self, name: &str) -> Result<&Contact> {
        self.find(name)
            .ok_or_else(|| MasonError::not_found(KIND, name.trim()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Contact> {
        self.contacts
            .get_mut(name.trim())
            .ok_or_else(|| MasonError::not_found(KIND, name.trim()))
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        self.contacts
            .remove(name.trim())
            .ok_or_else(|| MasonError::not_found(KIND, name.trim()))
    }

    /// Moves the contact stored under `old` to the key `new`.
    ///
    /// Fails if `old` is missing or `new` is taken by another contact; the
    /// book is unchanged on failure.
    pub fn rename(&mut self, old: &str, new: Name) -> Result<&Contact> {
        let old = old.trim();
        if !self.contacts.contains_key(old) {
            return Err(MasonError::not_found(KIND, old));
        }
        let new_key = new.as_str().to_string();
        if new_key != old && self.contacts.contains_key(&new_key) {
            return Err(MasonError::duplicate(KIND, new_key));
        }

        let mut contact = self.delete(old)?;
        contact.set_name(new);
        Ok(self.contacts.entry(new_key).or_insert(contact))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::collections::btree_map::Values<'a, String, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.values()
    }
}
