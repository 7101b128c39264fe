use super::DataStore;
use crate::book::{AddressBook, Notebook};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: AddressBook,
    notes: Notebook,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshot writes so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.contacts = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn load_notes(&self) -> Result<Notebook> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        self.notes = notes.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::{Birthday, Email, Name, Phone};
    use crate::model::{Contact, Note};
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push_contact(mut self, contact: Contact) -> Self {
            let mut book = self.store.contacts.clone();
            book.add(contact).unwrap();
            self.store.contacts = book;
            self
        }

        pub fn with_contact(self, name: &str, phones: &[&str]) -> Self {
            let mut contact = Contact::new(Name::new(name).unwrap());
            for phone in phones {
                contact.add_phone(Phone::new(phone).unwrap()).unwrap();
            }
            self.push_contact(contact)
        }

        pub fn with_full_contact(self, name: &str, phone: &str, email: &str, born: NaiveDate) -> Self {
            let mut contact = Contact::new(Name::new(name).unwrap());
            contact.add_phone(Phone::new(phone).unwrap()).unwrap();
            contact.set_email(Email::new(email).unwrap());
            contact.set_birthday(Birthday::from_date(born));
            self.push_contact(contact)
        }

        pub fn with_birthday(self, name: &str, born: NaiveDate) -> Self {
            let mut contact = Contact::new(Name::new(name).unwrap());
            contact.set_birthday(Birthday::from_date(born));
            self.push_contact(contact)
        }

        pub fn with_note(mut self, title: &str, body: &str, tags: &[&str]) -> Self {
            let tags = tags.iter().map(|t| t.to_string()).collect();
            self.store.notes.add(Note::new(title, body, tags)).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn loads_are_copies() {
        let store = StoreFixture::new().with_contact("Jane Doe", &["1234567890"]).store;
        let mut book = store.load_contacts().unwrap();
        book.delete("Jane Doe").unwrap();
        assert_eq!(store.load_contacts().unwrap().len(), 1);
    }

    #[test]
    fn saves_replace_the_snapshot() {
        let mut store = StoreFixture::default()
            .with_note("Groceries", "milk", &["home"])
            .store;
        store.save_notes(&Notebook::new()).unwrap();
        assert!(store.load_notes().unwrap().is_empty());
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn fixtures_cover_every_builder() {
        let born = NaiveDate::from_ymd_opt(1990, 3, 15).unwrap();
        let store = StoreFixture::default()
            .with_contact("A", &[])
            .with_full_contact("B", "1234567890", "b@example.com", born)
            .with_birthday("C", born)
            .with_note("N", "", &[])
            .store;
        assert_eq!(store.load_contacts().unwrap().len(), 3);
        assert_eq!(store.load_notes().unwrap().len(), 1);
        assert_eq!(store.saves(), 0);
    }
}
