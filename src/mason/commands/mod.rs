use crate::birthdays::UpcomingBirthday;
use crate::config::MasonConfig;
use crate::model::{Contact, Note};
use crate::query::{EntityField, Query, SortDirection};

pub mod birthdays;
pub mod config;
pub mod contacts;
pub mod notes;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a listing was filtered and sorted by, for highlighting and the
/// sort marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingView {
    pub keyword: Option<String>,
    pub sorted_by: Option<(&'static str, SortDirection)>,
}

impl ListingView {
    pub fn of<F: EntityField>(query: &Query<F>) -> Self {
        let keyword = query.keyword.trim();
        Self {
            keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
            sorted_by: query.sort.map(|s| (s.field.name(), s.direction)),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<Contact>,
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub birthdays: Vec<UpcomingBirthday>,
    pub view: ListingView,
    pub config: Option<MasonConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_view(mut self, view: ListingView) -> Self {
        self.view = view;
        self
    }

    pub fn with_config(mut self, config: MasonConfig) -> Self {
        self.config = Some(config);
        self
    }
}
