//! Contact mutations.
//!
//! Each operation parses every raw input before touching the address book,
//! so a rejected value leaves the stored snapshot exactly as it was.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MasonError, Result};
use crate::fields::{Address, Birthday, Email, Name, Phone};
use crate::model::{Contact, ContactField};
use crate::store::DataStore;
use chrono::NaiveDate;

/// Raw input for a new contact.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phones: Vec<String>,
    pub email: Option<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
}

/// Raw changes to an existing contact. Empty fields change nothing.
///
/// Changes apply in a fixed order: clears, phone replacement, phone
/// removals, phone edits, phone additions, then the scalar fields and
/// finally the rename.
#[derive(Debug, Clone, Default)]
pub struct ContactEdit {
    pub rename: Option<String>,
    pub phones: Option<Vec<String>>,
    pub add_phones: Vec<String>,
    pub remove_phones: Vec<String>,
    pub edit_phones: Vec<(String, String)>,
    pub email: Option<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub clear: Vec<ContactField>,
}

impl ContactEdit {
    pub fn is_empty(&self) -> bool {
        self.rename.is_none()
            && self.phones.is_none()
            && self.add_phones.is_empty()
            && self.remove_phones.is_empty()
            && self.edit_phones.is_empty()
            && self.email.is_none()
            && self.birthday.is_none()
            && self.address.is_none()
            && self.clear.is_empty()
    }
}

fn parse_phones(raw: &[String]) -> Result<Vec<Phone>> {
    raw.iter().map(|p| Phone::new(p)).collect()
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

pub fn add<S: DataStore>(store: &mut S, draft: ContactDraft, today: NaiveDate) -> Result<CmdResult> {
    let mut contact = Contact::new(Name::new(&draft.name)?);
    for phone in parse_phones(&draft.phones)? {
        contact.add_phone(phone)?;
    }
    if let Some(raw) = draft.email.as_deref() {
        contact.set_email(Email::new(raw)?);
    }
    if let Some(raw) = draft.birthday.as_deref() {
        contact.set_birthday(Birthday::parse_on(raw, today)?);
    }
    if let Some(raw) = non_blank(draft.address.as_deref()) {
        contact.set_address(Address::new(raw));
    }

    let mut book = store.load_contacts()?;
    let added = book.add(contact)?.clone();
    store.save_contacts(&book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact added: {}", added.name())));
    result.affected_contacts.push(added);
    Ok(result)
}

pub fn edit<S: DataStore>(
    store: &mut S,
    name: &str,
    edit: ContactEdit,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut book = store.load_contacts()?;
    let mut updated = book.get(name)?.clone();

    if edit.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "Nothing to change for {}",
            updated.name()
        )));
        return Ok(result);
    }

    let new_name = edit.rename.as_deref().map(Name::new).transpose()?;
    if let Some(new_name) = &new_name {
        if new_name != updated.name() && book.contains(new_name.as_str()) {
            return Err(MasonError::duplicate("contact", new_name.as_str()));
        }
    }

    for field in &edit.clear {
        match field {
            ContactField::Name => {
                return Err(MasonError::InvalidArgument(
                    "a contact's name cannot be cleared".to_string(),
                ))
            }
            ContactField::Phone => updated.replace_phones(Vec::new()),
            ContactField::Email => updated.clear_email(),
            ContactField::Birthday => updated.clear_birthday(),
            ContactField::Address => updated.clear_address(),
        }
    }

    if let Some(raw) = &edit.phones {
        updated.replace_phones(parse_phones(raw)?);
    }
    for raw in &edit.remove_phones {
        updated.remove_phone(raw)?;
    }
    for (old, new) in &edit.edit_phones {
        updated.edit_phone(old, Phone::new(new)?)?;
    }
    for phone in parse_phones(&edit.add_phones)? {
        updated.add_phone(phone)?;
    }
    if let Some(raw) = edit.email.as_deref() {
        updated.set_email(Email::new(raw)?);
    }
    if let Some(raw) = edit.birthday.as_deref() {
        updated.set_birthday(Birthday::parse_on(raw, today)?);
    }
    if let Some(raw) = edit.address.as_deref() {
        match non_blank(Some(raw)) {
            Some(address) => updated.set_address(Address::new(address)),
            None => updated.clear_address(),
        }
    }

    let old_name = updated.name().as_str().to_string();
    *book.get_mut(&old_name)? = updated;
    let stored = match new_name {
        Some(new_name) => book.rename(&old_name, new_name)?.clone(),
        None => book.get(&old_name)?.clone(),
    };
    store.save_contacts(&book)?;

    let mut result = CmdResult::default();
    if stored.name().as_str() != old_name {
        result.add_message(CmdMessage::success(format!(
            "Contact renamed: {} -> {}",
            old_name,
            stored.name()
        )));
    } else {
        result.add_message(CmdMessage::success(format!("Contact updated: {}", old_name)));
    }
    result.affected_contacts.push(stored);
    Ok(result)
}

pub fn delete<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut book = store.load_contacts()?;
    let removed = book.delete(name)?;
    store.save_contacts(&book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact deleted: {}", removed.name())));
    result.affected_contacts.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    fn draft(name: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn adds_a_fully_specified_contact() {
        let mut store = InMemoryStore::new();
        let result = add(
            &mut store,
            ContactDraft {
                name: "Jane Doe".into(),
                phones: vec!["123 456 7890".into()],
                email: Some("jane@example.com".into()),
                birthday: Some("15.03.1990".into()),
                address: Some("  1 Main St ".into()),
            },
            today(),
        )
        .unwrap();

        assert_eq!(result.affected_contacts.len(), 1);
        let book = store.load_contacts().unwrap();
        let jane = book.get("Jane Doe").unwrap();
        assert_eq!(jane.phones()[0].as_str(), "1234567890");
        assert_eq!(jane.address().unwrap().as_str(), "1 Main St");
        assert_eq!(jane.birthday().unwrap().to_string(), "15.03.1990");
    }

    #[test]
    fn second_contact_with_same_name_is_rejected() {
        let mut store = InMemoryStore::new();
        add(&mut store, draft("Jane Doe"), today()).unwrap();
        let err = add(&mut store, draft("Jane Doe"), today()).unwrap_err();
        assert!(matches!(err, MasonError::DuplicateKey { kind: "contact", .. }));
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn invalid_field_stores_nothing() {
        let mut store = InMemoryStore::new();
        let mut bad = draft("Jane Doe");
        bad.email = Some("jane-at-example".into());
        assert!(add(&mut store, bad, today()).is_err());

        let mut future = draft("Jane Doe");
        future.birthday = Some("01.01.2030".into());
        assert!(add(&mut store, future, today()).is_err());

        assert!(store.load_contacts().unwrap().is_empty());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn edits_phones_and_fields() {
        let mut store = StoreFixture::new()
            .with_contact("Jane Doe", &["1111111111", "2222222222"])
            .store;

        let edit_request = ContactEdit {
            remove_phones: vec!["2222222222".into()],
            edit_phones: vec![("1111111111".into(), "3333333333".into())],
            add_phones: vec!["4444444444".into()],
            email: Some("jane@example.com".into()),
            ..Default::default()
        };
        edit(&mut store, "Jane Doe", edit_request, today()).unwrap();

        let book = store.load_contacts().unwrap();
        let jane = book.get("Jane Doe").unwrap();
        let phones: Vec<&str> = jane.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["3333333333", "4444444444"]);
        assert_eq!(jane.email().unwrap().as_str(), "jane@example.com");
    }

    #[test]
    fn failed_edit_leaves_contact_untouched() {
        let mut store = StoreFixture::new()
            .with_contact("Jane Doe", &["1111111111"])
            .store;

        let edit_request = ContactEdit {
            email: Some("jane@example.com".into()),
            remove_phones: vec!["9999999999".into()],
            ..Default::default()
        };
        let err = edit(&mut store, "Jane Doe", edit_request, today()).unwrap_err();
        assert!(matches!(err, MasonError::NotFound { kind: "phone", .. }));

        let book = store.load_contacts().unwrap();
        assert!(book.get("Jane Doe").unwrap().email().is_none());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn rename_moves_the_contact() {
        let mut store = StoreFixture::new()
            .with_contact("Jane Doe", &["1111111111"])
            .store;

        let result = edit(
            &mut store,
            "Jane Doe",
            ContactEdit {
                rename: Some("Jane Smith".into()),
                add_phones: vec!["2222222222".into()],
                ..Default::default()
            },
            today(),
        )
        .unwrap();
        assert!(result.messages[0].content.contains("renamed"));

        let book = store.load_contacts().unwrap();
        assert!(!book.contains("Jane Doe"));
        assert_eq!(book.get("Jane Smith").unwrap().phones().len(), 2);
    }

    #[test]
    fn rename_onto_existing_contact_is_rejected() {
        let mut store = StoreFixture::new()
            .with_contact("Jane Doe", &[])
            .with_contact("John Roe", &[])
            .store;

        let err = edit(
            &mut store,
            "Jane Doe",
            ContactEdit {
                rename: Some("John Roe".into()),
                ..Default::default()
            },
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, MasonError::DuplicateKey { .. }));
        assert_eq!(store.load_contacts().unwrap().len(), 2);
    }

    #[test]
    fn clearing_fields() {
        let born = NaiveDate::from_ymd_opt(1990, 3, 15).unwrap();
        let mut store = StoreFixture::new()
            .with_full_contact("Jane Doe", "1111111111", "jane@example.com", born)
            .store;

        edit(
            &mut store,
            "Jane Doe",
            ContactEdit {
                clear: vec![ContactField::Email, ContactField::Birthday, ContactField::Phone],
                ..Default::default()
            },
            today(),
        )
        .unwrap();

        let book = store.load_contacts().unwrap();
        let jane = book.get("Jane Doe").unwrap();
        assert!(jane.email().is_none());
        assert!(jane.birthday().is_none());
        assert!(jane.phones().is_empty());

        let err = edit(
            &mut store,
            "Jane Doe",
            ContactEdit {
                clear: vec![ContactField::Name],
                ..Default::default()
            },
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, MasonError::InvalidArgument(_)));
    }

    #[test]
    fn empty_edit_only_warns() {
        let mut store = StoreFixture::new().with_contact("Jane Doe", &[]).store;
        let result = edit(&mut store, "Jane Doe", ContactEdit::default(), today()).unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn delete_reports_missing_contact() {
        let mut store = StoreFixture::new().with_contact("Jane Doe", &[]).store;
        delete(&mut store, "Jane Doe").unwrap();
        assert!(matches!(
            delete(&mut store, "Jane Doe"),
            Err(MasonError::NotFound { kind: "contact", .. })
        ));
    }
}
