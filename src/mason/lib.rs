//! # Mason Architecture
//!
//! Mason is a personal information manager: an address book of contacts and
//! a notebook of short notes, with search, sorting and a birthday reminder.
//! The library holds all of it; the `mason` binary is one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses raw selectors, sort directives and windows        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load a snapshot, operate on it, save it if it changed    │
//! │  - Returns CmdResult; no terminal I/O                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (fields, model, book, query, birthdays)               │
//! │  - Validated values, entities, collections, search engine   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code takes plain arguments and returns
//! `Result<CmdResult>` or core types. It never prints, never exits and never
//! reads the clock on its own: anything date dependent takes `today` as an
//! argument, which keeps the birthday rules testable with fixed dates.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests beside the code, against
//!    `InMemoryStore` fixtures. Most tests live here.
//! 2. **API**: dispatch and input parsing.
//! 3. **CLI**: rendering given a result, plus end-to-end runs of the binary
//!    against a temporary data directory (`tests/`).
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per command family
//! - [`fields`]: validated field values and the `FieldMatch` capability
//! - [`model`]: `Contact`, `Note` and their field enums
//! - [`book`]: `AddressBook` and `Notebook`
//! - [`query`]: filter and sort engine
//! - [`birthdays`]: celebration dates and the lookahead window
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration
//! - [`init`]: directory resolution and startup
//! - [`error`]: error types

pub mod api;
pub mod birthdays;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod init;
pub mod model;
pub mod query;
pub mod store;
