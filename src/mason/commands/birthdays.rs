use crate::birthdays::{born_between, upcoming_birthdays};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::NaiveDate;

pub fn upcoming<S: DataStore>(store: &S, days_ahead: u32, today: NaiveDate) -> Result<CmdResult> {
    let book = store.load_contacts()?;
    let found = upcoming_birthdays(&book, days_ahead, today);

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days",
            days_ahead
        )));
    }
    Ok(result.with_birthdays(found))
}

pub fn born<S: DataStore>(store: &S, from: NaiveDate, to: NaiveDate) -> Result<CmdResult> {
    let book = store.load_contacts()?;
    let found = born_between(&book, from, to)?
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_contacts(found))
}
