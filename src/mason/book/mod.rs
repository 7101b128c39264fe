//! # Entity Collections
//!
//! - [`AddressBook`]: contacts keyed by name. Backed by a `BTreeMap`, so
//!   iteration is in name order; insertion order carries no meaning.
//! - [`Notebook`]: notes in insertion order. Titles are unique at insertion
//!   time only.
//!
//! Both collections own their entities. Lookups hand out references,
//! mutations go through `*_mut` accessors or the collection's own methods.

mod address_book;
mod notebook;

pub use address_book::AddressBook;
pub use notebook::Notebook;
