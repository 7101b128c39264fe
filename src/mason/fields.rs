//! # Field Validators
//!
//! Every attribute a contact carries is wrapped in a small typed value that
//! validates and normalizes raw user text on construction. Once a [`Phone`] or
//! an [`Email`] exists, it is known to be well formed, so the rest of the
//! crate never re-checks them.
//!
//! | Type | Rule |
//! |------|------|
//! | [`Name`] | non-empty after trimming |
//! | [`Phone`] | non-digits stripped, exactly 10 digits remain |
//! | [`Email`] | `local@domain.tld` pattern |
//! | [`Birthday`] | one of the accepted date formats, not in the future, age ≤ 115 |
//! | [`Address`] | free text |
//!
//! ## Matching
//!
//! Each field implements [`FieldMatch`], the capability the query engine uses
//! for free-text search. Matching is case-insensitive substring containment,
//! except for [`Birthday`]: dates never match a keyword, they only take part
//! in exact-mode equality and in the dedicated birth date range search.

use crate::error::{MasonError, Result};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Oldest plausible age for a stored birthday.
pub const MAX_AGE_YEARS: i32 = 115;

/// Accepted birthday input formats, tried in order.
pub const BIRTHDAY_FORMATS: &[&str] = &["%d.%m.%Y", "%d %m %Y", "%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Format used when a birthday is shown to the user.
pub const BIRTHDAY_DISPLAY_FORMAT: &str = "%d.%m.%Y";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

// chrono lets a space in a format match any run of whitespace, including
// none, so the separator layout is checked before parsing.
static DATE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:\d{1,2}\.\d{1,2}\.\d{4}|\d{1,2} \d{1,2} \d{4}|\d{1,2}/\d{1,2}/\d{4}|\d{1,2}-\d{1,2}-\d{4}|\d{4}-\d{1,2}-\d{1,2})$",
    )
    .expect("valid date shape regex")
});

/// Free-text match capability shared by every field type.
pub trait FieldMatch {
    /// Case-insensitive substring match of `keyword` within the field.
    fn matches(&self, keyword: &str) -> bool;

    /// Whole-value match, used when the caller asks for exact results.
    fn matches_exact(&self, keyword: &str) -> bool;
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub(crate) fn equals_ignore_case(value: &str, keyword: &str) -> bool {
    value.to_lowercase() == keyword.trim().to_lowercase()
}

macro_rules! text_field_match {
    ($ty:ty) => {
        impl FieldMatch for $ty {
            fn matches(&self, keyword: &str) -> bool {
                contains_ignore_case(self.as_str(), keyword)
            }

            fn matches_exact(&self, keyword: &str) -> bool {
                equals_ignore_case(self.as_str(), keyword)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Plain strings (note titles, bodies and tags) match like text fields.
impl FieldMatch for String {
    fn matches(&self, keyword: &str) -> bool {
        contains_ignore_case(self, keyword)
    }

    fn matches_exact(&self, keyword: &str) -> bool {
        equals_ignore_case(self, keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(MasonError::validation("name", "name cannot be empty"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_field_match!(Name);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const DIGITS: usize = 10;

    /// Accepts formatted input such as `(123) 456-7890` and keeps only the digits.
    pub fn new(raw: &str) -> Result<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != Self::DIGITS {
            return Err(MasonError::validation(
                "phone",
                format!(
                    "'{}' has {} digits, expected {}",
                    raw.trim(),
                    digits.len(),
                    Self::DIGITS
                ),
            ));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_field_match!(Phone);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self> {
        let value = raw.trim();
        if !EMAIL_RE.is_match(value) {
            return Err(MasonError::validation(
                "email",
                format!("'{}' is not a valid address", value),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_field_match!(Email);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_field_match!(Address);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses and validates a birthday against the local current date.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_on(raw, Local::now().date_naive())
    }

    /// Parses and validates a birthday as of `today`.
    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self> {
        let date = parse_date(raw).ok_or_else(|| {
            MasonError::validation(
                "birthday",
                format!(
                    "'{}' is not a date (use DD.MM.YYYY, DD/MM/YYYY, DD-MM-YYYY or YYYY-MM-DD)",
                    raw.trim()
                ),
            )
        })?;

        if date > today {
            return Err(MasonError::validation(
                "birthday",
                format!("{} is in the future", date.format(BIRTHDAY_DISPLAY_FORMAT)),
            ));
        }

        if age_on(date, today) > MAX_AGE_YEARS {
            return Err(MasonError::validation(
                "birthday",
                format!(
                    "{} implies an age over {} years",
                    date.format(BIRTHDAY_DISPLAY_FORMAT),
                    MAX_AGE_YEARS
                ),
            ));
        }

        Ok(Self(date))
    }

    /// Wraps an already trusted date (e.g. one read back from a snapshot).
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday falls on in `year`.
    ///
    /// 29 February maps onto 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), 28))
            .unwrap_or(self.0)
    }
}

impl FieldMatch for Birthday {
    fn matches(&self, _keyword: &str) -> bool {
        false
    }

    fn matches_exact(&self, keyword: &str) -> bool {
        parse_date(keyword) == Some(self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_DISPLAY_FORMAT))
    }
}

/// Parses a date in any of the [`BIRTHDAY_FORMATS`], without plausibility checks.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !DATE_SHAPE_RE.is_match(raw) {
        return None;
    }
    BIRTHDAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Full years elapsed between `born` and `today`.
pub fn age_on(born: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}
