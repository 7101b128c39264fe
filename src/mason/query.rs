//! # Query Engine
//!
//! One engine serves both collections. It knows nothing about contacts or
//! notes: entities opt in by implementing [`Searchable`], naming their closed
//! set of fields through [`EntityField`].
//!
//! ## Pipeline
//!
//! 1. **Filter**: an empty keyword keeps everything. With
//!    [`FieldSelector::All`] an entity is kept when *any* of its fields
//!    matches; with [`FieldSelector::Field`] only that field is consulted.
//! 2. **Sort** (optional): stable sort on the field's [`SortValue`], ascending
//!    or descending. Without a sort directive the input order is preserved.
//!
//! ## Ordering of missing values
//!
//! Sort keys are `Option<SortValue>`. `None` (an unset email, a contact
//! without a birthday, an empty tag list) orders before every `Some`, so the
//! comparison is total and never fails. In descending order they come last.
//!
//! Descending order reverses the comparator rather than the output, which
//! keeps entities with equal keys in their original relative order.

use crate::error::{MasonError, Result};
use crate::fields::FieldMatch;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// A closed set of searchable/sortable fields for one entity type.
pub trait EntityField: Copy + Eq + fmt::Debug + 'static {
    /// Entity name used in error messages ("contact", "note").
    const ENTITY: &'static str;

    /// Every field, in display order.
    const ALL: &'static [Self];

    /// Lowercase selector name, as typed by users.
    fn name(self) -> &'static str;

    /// Column heading for tables.
    fn label(self) -> &'static str;

    fn parse(raw: &str) -> Result<Self> {
        let wanted = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MasonError::InvalidField {
                entity: Self::ENTITY,
                field: wanted.to_string(),
            })
    }
}

/// How a keyword is compared with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive substring match; dates never match.
    #[default]
    Substring,
    /// Case-insensitive whole-value match; dates compare by value.
    Exact,
}

impl MatchMode {
    pub fn apply<F: FieldMatch + ?Sized>(self, field: &F, keyword: &str) -> bool {
        match self {
            MatchMode::Substring => field.matches(keyword),
            MatchMode::Exact => field.matches_exact(keyword),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSelector<F> {
    All,
    Field(F),
}

impl<F> Default for FieldSelector<F> {
    fn default() -> Self {
        FieldSelector::All
    }
}

impl<F: EntityField> FieldSelector<F> {
    /// Parses `all` or one of the entity's field names (case-insensitive).
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(FieldSelector::All);
        }
        F::parse(raw).map(FieldSelector::Field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(MasonError::InvalidArgument(format!(
                "'{}' is not a sort direction (use asc or desc)",
                other
            ))),
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: EntityField> SortSpec<F> {
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parses `FIELD` or `FIELD:DIRECTION`, e.g. `name`, `birthday:desc`.
    pub fn parse(raw: &str) -> Result<Self> {
        let (field, direction) = match raw.split_once(':') {
            Some((field, direction)) => (field, SortDirection::parse(direction)?),
            None => (raw, SortDirection::Asc),
        };
        Ok(Self {
            field: F::parse(field)?,
            direction,
        })
    }
}

/// The comparable value of one field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    Date(NaiveDate),
}

impl SortValue {
    /// Case-folded text key; blank text counts as missing.
    pub fn text(value: &str) -> Option<SortValue> {
        if value.trim().is_empty() {
            None
        } else {
            Some(SortValue::Text(value.to_lowercase()))
        }
    }

    /// Multi-valued fields sort on their values joined in order.
    pub fn joined<S: AsRef<str>>(values: &[S]) -> Option<SortValue> {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        SortValue::text(&joined)
    }
}

/// An entity the engine can filter and sort.
pub trait Searchable {
    type Field: EntityField;

    fn field_matches(&self, field: Self::Field, keyword: &str, mode: MatchMode) -> bool;

    fn sort_key(&self, field: Self::Field) -> Option<SortValue>;

    fn matches(&self, selector: FieldSelector<Self::Field>, keyword: &str, mode: MatchMode) -> bool {
        match selector {
            FieldSelector::All => Self::Field::ALL
                .iter()
                .any(|field| self.field_matches(*field, keyword, mode)),
            FieldSelector::Field(field) => self.field_matches(field, keyword, mode),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<F> {
    pub keyword: String,
    pub selector: FieldSelector<F>,
    pub sort: Option<SortSpec<F>>,
    pub mode: MatchMode,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            selector: FieldSelector::All,
            sort: None,
            mode: MatchMode::Substring,
        }
    }
}

impl<F: EntityField> Query<F> {
    /// Matches every entity, unsorted.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    pub fn in_field(mut self, field: F) -> Self {
        self.selector = FieldSelector::Field(field);
        self
    }

    pub fn with_selector(mut self, selector: FieldSelector<F>) -> Self {
        self.selector = selector;
        self
    }

    pub fn sorted(mut self, sort: SortSpec<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.mode = if exact {
            MatchMode::Exact
        } else {
            MatchMode::Substring
        };
        self
    }
}

/// Filters and orders `items` according to `query`.
pub fn search<'a, T, I>(items: I, query: &Query<T::Field>) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let keyword = query.keyword.trim();

    let found: Vec<&T> = items
        .into_iter()
        .filter(|item| keyword.is_empty() || item.matches(query.selector, keyword, query.mode))
        .collect();

    let Some(sort) = query.sort else {
        debug!(matched = found.len(), keyword, "search without sort");
        return found;
    };

    let mut keyed: Vec<(Option<SortValue>, &T)> = found
        .into_iter()
        .map(|item| (item.sort_key(sort.field), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| sort.direction.apply(a.cmp(b)));

    debug!(
        matched = keyed.len(),
        keyword,
        sort_field = sort.field.name(),
        "search sorted"
    );
    keyed.into_iter().map(|(_, item)| item).collect()
}
