//! # Birthday Scheduler
//!
//! Works out when birthdays are actually celebrated and which of them fall
//! inside a lookahead window.
//!
//! ## Celebration date
//!
//! 1. Project the birthday onto the current year (29 February becomes
//!    28 February in non-leap years).
//! 2. If that day is already behind us, use next year's occurrence.
//! 3. Saturdays and Sundays move to the following Monday.
//!
//! A contact is reported when its celebration date lies in
//! `today ..= today + days_ahead`. Because of step 3, a birthday inside the
//! window can drop out of it (a Saturday birthday with a one-day window), and
//! nothing before today is ever reported.
//!
//! [`born_between`] is the separate birth date range search; keyword search
//! never looks at dates.

use crate::error::{MasonError, Result};
use crate::fields::Birthday;
use crate::model::Contact;
use chrono::{Datelike, Days, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: Birthday,
    pub celebration_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Age reached on the celebrated birthday.
    pub fn turning(&self) -> i32 {
        self.celebration_date.year() - self.birthday.date().year()
    }
}

/// The day `birthday` is next celebrated, counting from `today`.
pub fn celebration_date(birthday: Birthday, today: NaiveDate) -> NaiveDate {
    let mut candidate = birthday.anniversary_in(today.year());
    if candidate < today {
        candidate = birthday.anniversary_in(today.year() + 1);
    }

    // Monday = 0 .. Sunday = 6
    let weekday = candidate.weekday().num_days_from_monday();
    if weekday >= 5 {
        candidate = candidate
            .checked_add_days(Days::new(u64::from(7 - weekday)))
            .unwrap_or(candidate);
    }
    candidate
}

/// Contacts celebrating within `days_ahead` days of `today`, earliest first.
pub fn upcoming_birthdays<'a, I>(contacts: I, days_ahead: u32, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let horizon = today
        .checked_add_days(Days::new(u64::from(days_ahead)))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<UpcomingBirthday> = contacts
        .into_iter()
        .filter_map(|contact| {
            let birthday = contact.birthday()?;
            let celebration_date = celebration_date(birthday, today);
            (today..=horizon)
                .contains(&celebration_date)
                .then(|| UpcomingBirthday {
                    name: contact.name().as_str().to_string(),
                    birthday,
                    celebration_date,
                })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.celebration_date
            .cmp(&b.celebration_date)
            .then_with(|| a.name.cmp(&b.name))
    });
    upcoming
}

/// Parses a lookahead window given as text.
pub fn parse_window(raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        MasonError::InvalidArgument(format!(
            "'{}' is not a number of days (expected a non-negative integer)",
            raw.trim()
        ))
    })
}

/// Contacts whose date of birth lies within `from ..= to`, oldest first.
pub fn born_between<'a, I>(contacts: I, from: NaiveDate, to: NaiveDate) -> Result<Vec<&'a Contact>>
where
    I: IntoIterator<Item = &'a Contact>,
{
    if from > to {
        return Err(MasonError::InvalidArgument(format!(
            "range start {} is after range end {}",
            from, to
        )));
    }

    let mut found: Vec<&Contact> = contacts
        .into_iter()
        .filter(|c| {
            c.birthday()
                .is_some_and(|b| (from..=to).contains(&b.date()))
        })
        .collect();
    found.sort_by_key(|c| c.birthday().map(|b| b.date()));
    Ok(found)
}
