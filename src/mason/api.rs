//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! mason operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*` function
//! - **Normalizes inputs**: raw field, sort and window strings become typed
//!   queries here, so a bad selector fails before any data is loaded
//! - **Supplies the clock**: commands take `today` explicitly, the facade
//!   passes the local date
//!
//! It performs no terminal I/O and holds no business rules.
//!
//! `MasonApi<S: DataStore>` is generic over the storage backend:
//! `MasonApi<FileStore>` in production, `MasonApi<InMemoryStore>` in tests.

use crate::birthdays::parse_window;
use crate::commands;
use crate::config::MasonConfig;
use crate::error::{MasonError, Result};
use crate::fields::parse_date;
use crate::model::{ContactField, NoteField, NoteUpdate};
use crate::query::{EntityField, FieldSelector, Query, SortSpec};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

/// Raw search request, as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub keyword: String,
    pub field: Option<String>,
    pub sort: Option<String>,
    pub exact: bool,
}

impl SearchRequest {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Default::default()
        }
    }

    fn into_query<F: EntityField>(self) -> Result<Query<F>> {
        let selector = match self.field.as_deref() {
            Some(raw) => FieldSelector::parse(raw)?,
            None => FieldSelector::All,
        };
        let mut query = Query::keyword(self.keyword)
            .with_selector(selector)
            .exact(self.exact);
        if let Some(raw) = self.sort.as_deref() {
            query = query.sorted(SortSpec::parse(raw)?);
        }
        Ok(query)
    }
}

pub struct MasonApi<S: DataStore> {
    store: S,
    config: MasonConfig,
}

impl<S: DataStore> MasonApi<S> {
    pub fn new(store: S, config: MasonConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &MasonConfig {
        &self.config
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn add_contact(&mut self, draft: ContactDraft) -> Result<CmdResult> {
        tracing::info!(name = %draft.name.trim(), "add contact");
        commands::contacts::add(&mut self.store, draft, Self::today())
    }

    pub fn edit_contact(&mut self, name: &str, edit: ContactEdit) -> Result<CmdResult> {
        tracing::info!(name = %name.trim(), "edit contact");
        commands::contacts::edit(&mut self.store, name, edit, Self::today())
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        tracing::info!(name = %name.trim(), "delete contact");
        commands::contacts::delete(&mut self.store, name)
    }

    pub fn search_contacts(&self, request: SearchRequest) -> Result<CmdResult> {
        let query: Query<ContactField> = request.into_query()?;
        commands::search::contacts(&self.store, &query)
    }

    pub fn add_note(&mut self, draft: NoteDraft) -> Result<CmdResult> {
        tracing::info!(title = %draft.title.trim(), "add note");
        commands::notes::add(&mut self.store, draft)
    }

    pub fn edit_note(&mut self, title: &str, update: NoteUpdate) -> Result<CmdResult> {
        tracing::info!(title = %title.trim(), "edit note");
        commands::notes::edit(&mut self.store, title, update)
    }

    pub fn delete_note(&mut self, title: &str) -> Result<CmdResult> {
        tracing::info!(title = %title.trim(), "delete note");
        commands::notes::delete(&mut self.store, title)
    }

    pub fn search_notes(&self, request: SearchRequest) -> Result<CmdResult> {
        let query: Query<NoteField> = request.into_query()?;
        commands::search::notes(&self.store, &query)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::search::everything(&self.store)
    }

    /// Upcoming birthdays; `days` falls back to the configured window.
    pub fn upcoming_birthdays(&self, days: Option<&str>) -> Result<CmdResult> {
        let days = match days {
            Some(raw) => parse_window(raw)?,
            None => self.config.birthday_window,
        };
        commands::birthdays::upcoming(&self.store, days, Self::today())
    }

    pub fn born_between(&self, from: &str, to: &str) -> Result<CmdResult> {
        let from = parse_range_date(from)?;
        let to = parse_range_date(to)?;
        commands::birthdays::born(&self.store, from, to)
    }

    pub fn show_config(&self) -> Result<CmdResult> {
        commands::config::run(&self.config)
    }
}

fn parse_range_date(raw: &str) -> Result<NaiveDate> {
    parse_date(raw).ok_or_else(|| {
        MasonError::InvalidArgument(format!("'{}' is not a date", raw.trim()))
    })
}

pub use commands::contacts::{ContactDraft, ContactEdit};
pub use commands::notes::NoteDraft;
pub use commands::{CmdMessage, CmdResult, ListingView, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> MasonApi<InMemoryStore> {
        let store = StoreFixture::new()
            .with_contact("Jane Doe", &["1234567890"])
            .with_contact("John Roe", &["5550001111"])
            .with_note("Groceries", "milk", &["home"])
            .store;
        MasonApi::new(store, MasonConfig::default())
    }

    #[test]
    fn add_contact_dispatches() {
        let mut api = api();
        let result = api
            .add_contact(ContactDraft {
                name: "Amy".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(result.affected_contacts[0].name().as_str(), "Amy");
    }

    #[test]
    fn search_parses_field_and_sort() {
        let api = api();
        let result = api
            .search_contacts(SearchRequest {
                keyword: "o".into(),
                field: Some("NAME".into()),
                sort: Some("name:desc".into()),
                exact: false,
            })
            .unwrap();
        assert_eq!(result.listed_contacts.len(), 2);
        assert_eq!(result.view.sorted_by, Some(("name", SortDirection::Desc)));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let api = api();
        let err = api
            .search_contacts(SearchRequest {
                field: Some("nickname".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, MasonError::InvalidField { entity: "contact", .. }));

        let err = api
            .search_notes(SearchRequest {
                sort: Some("title:sideways".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, MasonError::InvalidArgument(_)));
    }

    #[test]
    fn exact_flag_reaches_the_engine() {
        let api = api();
        let partial = SearchRequest {
            exact: true,
            ..SearchRequest::keyword("jane")
        };
        assert!(api.search_contacts(partial).unwrap().listed_contacts.is_empty());
        let whole = SearchRequest {
            exact: true,
            ..SearchRequest::keyword("jane doe")
        };
        assert_eq!(api.search_contacts(whole).unwrap().listed_contacts.len(), 1);
    }

    #[test]
    fn birthday_window_is_validated() {
        let api = api();
        assert!(matches!(
            api.upcoming_birthdays(Some("-1")),
            Err(MasonError::InvalidArgument(_))
        ));
        assert!(api.upcoming_birthdays(None).is_ok());
        assert!(api.upcoming_birthdays(Some("30")).is_ok());
    }

    #[test]
    fn born_between_parses_dates() {
        let api = api();
        assert!(api.born_between("01.01.1980", "1999-12-31").is_ok());
        assert!(matches!(
            api.born_between("yesterday", "01.01.2000"),
            Err(MasonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn note_operations_dispatch() {
        let mut api = api();
        api.edit_note(
            "Groceries",
            NoteUpdate {
                body: Some("bread".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let found = api.search_notes(SearchRequest::keyword("bread")).unwrap();
        assert_eq!(found.listed_notes.len(), 1);
        api.delete_note("Groceries").unwrap();
        assert!(api.show_all().unwrap().listed_notes.is_empty());
    }

    #[test]
    fn show_config_reports_effective_values() {
        let api = api();
        let result = api.show_config().unwrap();
        assert_eq!(result.config.unwrap().birthday_window, 7);
    }
}
