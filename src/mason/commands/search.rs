use crate::commands::{CmdResult, ListingView};
use crate::error::Result;
use crate::model::{ContactField, NoteField};
use crate::query::{search, Query};
use crate::store::DataStore;

pub fn contacts<S: DataStore>(store: &S, query: &Query<ContactField>) -> Result<CmdResult> {
    let book = store.load_contacts()?;
    let listed = search(&book, query).into_iter().cloned().collect();
    Ok(CmdResult::default()
        .with_listed_contacts(listed)
        .with_view(ListingView::of(query)))
}

pub fn notes<S: DataStore>(store: &S, query: &Query<NoteField>) -> Result<CmdResult> {
    let notes = store.load_notes()?;
    let listed = search(&notes, query).into_iter().cloned().collect();
    Ok(CmdResult::default()
        .with_listed_notes(listed)
        .with_view(ListingView::of(query)))
}

/// Every contact and every note, in natural order.
pub fn everything<S: DataStore>(store: &S) -> Result<CmdResult> {
    let contacts = store.load_contacts()?;
    let notes = store.load_notes()?;
    Ok(CmdResult::default()
        .with_listed_contacts(contacts.iter().cloned().collect())
        .with_listed_notes(notes.iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortDirection, SortSpec};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_contacts
            .iter()
            .map(|c| c.name().as_str())
            .collect()
    }

    fn jane_store() -> InMemoryStore {
        StoreFixture::new()
            .with_contact("Jane Doe", &["1234567890"])
            .with_contact("John Roe", &["5550001111"])
            .store
    }

    #[test]
    fn finds_jane_by_name_and_phone() {
        let store = jane_store();

        let by_any = contacts(&store, &Query::keyword("jane")).unwrap();
        assert_eq!(names(&by_any), vec!["Jane Doe"]);

        let by_phone =
            contacts(&store, &Query::keyword("1234567890").in_field(ContactField::Phone)).unwrap();
        assert_eq!(names(&by_phone), vec!["Jane Doe"]);

        let by_name =
            contacts(&store, &Query::keyword("1234567890").in_field(ContactField::Name)).unwrap();
        assert!(by_name.listed_contacts.is_empty());
    }

    #[test]
    fn empty_keyword_lists_everyone_in_name_order() {
        let store = StoreFixture::new()
            .with_contact("Zed", &[])
            .with_contact("Amy", &[])
            .store;
        let result = contacts(&store, &Query::all()).unwrap();
        assert_eq!(names(&result), vec!["Amy", "Zed"]);
        assert_eq!(result.view, ListingView::default());
    }

    #[test]
    fn view_records_keyword_and_sort() {
        let store = jane_store();
        let query = Query::keyword(" o ").sorted(SortSpec::desc(ContactField::Name));
        let result = contacts(&store, &query).unwrap();
        assert_eq!(names(&result), vec!["John Roe", "Jane Doe"]);
        assert_eq!(result.view.keyword.as_deref(), Some("o"));
        assert_eq!(result.view.sorted_by, Some(("name", SortDirection::Desc)));
    }

    #[test]
    fn notes_search_by_tag() {
        let store = StoreFixture::new()
            .with_note("Trip", "pack bags", &["travel"])
            .with_note("Groceries", "milk", &["home"])
            .store;
        let result = notes(&store, &Query::keyword("travel").in_field(NoteField::Tags)).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].title, "Trip");
    }

    #[test]
    fn contacts_sort_by_birthday_chronologically() {
        let store = StoreFixture::new()
            .with_birthday("Amy", NaiveDate::from_ymd_opt(1990, 3, 15).unwrap())
            .with_contact("Bob", &[])
            .with_birthday("Cid", NaiveDate::from_ymd_opt(1985, 12, 1).unwrap())
            .with_birthday("Dee", NaiveDate::from_ymd_opt(1990, 1, 2).unwrap())
            .store;

        let asc = contacts(&store, &Query::all().sorted(SortSpec::asc(ContactField::Birthday))).unwrap();
        assert_eq!(names(&asc), vec!["Bob", "Cid", "Dee", "Amy"]);

        let desc =
            contacts(&store, &Query::all().sorted(SortSpec::desc(ContactField::Birthday))).unwrap();
        assert_eq!(names(&desc), vec!["Amy", "Dee", "Cid", "Bob"]);
    }

    #[test]
    fn contacts_sort_by_joined_phones() {
        let store = StoreFixture::new()
            .with_contact("Amy", &["5550001111"])
            .with_contact("Bob", &[])
            .with_contact("Cid", &["1234567890", "9990001111"])
            .with_contact("Dee", &["1234567890"])
            .store;

        let asc = contacts(&store, &Query::all().sorted(SortSpec::asc(ContactField::Phone))).unwrap();
        // "1234567890" < "1234567890,9990001111"; no phones sort lowest.
        assert_eq!(names(&asc), vec!["Bob", "Dee", "Cid", "Amy"]);

        let desc =
            contacts(&store, &Query::all().sorted(SortSpec::desc(ContactField::Phone))).unwrap();
        assert_eq!(names(&desc), vec!["Amy", "Cid", "Dee", "Bob"]);
    }

    #[test]
    fn notes_sort_by_joined_tags() {
        let store = StoreFixture::new()
            .with_note("Trip", "", &["travel"])
            .with_note("Loose", "no tags", &[])
            .with_note("Groceries", "", &["home", "errands"])
            .with_note("Chores", "", &["home"])
            .store;

        let titles = |result: &CmdResult| -> Vec<String> {
            result.listed_notes.iter().map(|n| n.title.clone()).collect()
        };

        let asc = notes(&store, &Query::all().sorted(SortSpec::asc(NoteField::Tags))).unwrap();
        assert_eq!(titles(&asc), vec!["Loose", "Chores", "Groceries", "Trip"]);

        let desc = notes(&store, &Query::all().sorted(SortSpec::desc(NoteField::Tags))).unwrap();
        assert_eq!(titles(&desc), vec!["Trip", "Groceries", "Chores", "Loose"]);
    }

    #[test]
    fn everything_lists_both_collections() {
        let store = StoreFixture::new()
            .with_contact("Jane Doe", &[])
            .with_note("Trip", "", &[])
            .store;
        let result = everything(&store).unwrap();
        assert_eq!(result.listed_contacts.len(), 1);
        assert_eq!(result.listed_notes.len(), 1);
    }
}
