//! # CLI Layer
//!
//! One possible UI client for mason. This is the only code that knows about
//! stdout/stderr, process exit codes and argument parsing.
//!
//! ## Structure
//!
//! - `run()`: parses arguments, sets up logging, dispatches (called by `main.rs`)
//! - `init_tracing()`: `tracing-subscriber` on stderr
//! - `handle_*()`: per-command handlers that call the API and print the result
//!
//! Handlers do not interpret data: they join argument words, hand raw strings
//! to the API, and pass what comes back to the renderers.

use super::render::{
    print_messages, render_birthdays, render_config, render_contacts, render_notes,
};
use super::setup::{Cli, Commands, ContactCommands, NoteCommands};
use clap::Parser;
use mason::api::{ContactDraft, ContactEdit, ListingView, MasonApi, NoteDraft, SearchRequest};
use mason::error::Result;
use mason::init::initialize;
use mason::model::{parse_tags, ContactField, NoteUpdate};
use mason::query::EntityField;
use mason::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MASON_LOG";

type Api = MasonApi<FileStore>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = initialize(cli.data_dir.as_deref())?;
    let mut api = ctx.api;

    match cli.command {
        None | Some(Commands::All) => handle_all(&api),
        Some(Commands::Contact(cmd)) => match cmd {
            ContactCommands::Add {
                name,
                phones,
                email,
                birthday,
                address,
            } => handle_contact_add(
                &mut api,
                ContactDraft {
                    name: name.join(" "),
                    phones,
                    email,
                    birthday,
                    address,
                },
            ),
            ContactCommands::Edit {
                name,
                rename,
                phones,
                add_phone,
                remove_phone,
                edit_phone,
                email,
                birthday,
                address,
                clear,
            } => {
                let clear = clear
                    .iter()
                    .map(|raw| ContactField::parse(raw))
                    .collect::<Result<Vec<_>>>()?;
                let edit = ContactEdit {
                    rename,
                    phones,
                    add_phones: add_phone,
                    remove_phones: remove_phone,
                    edit_phones: edit_phone
                        .chunks(2)
                        .map(|pair| (pair[0].clone(), pair[1].clone()))
                        .collect(),
                    email,
                    birthday,
                    address,
                    clear,
                };
                handle_contact_edit(&mut api, &name.join(" "), edit)
            }
            ContactCommands::Delete { name } => handle_contact_delete(&mut api, &name.join(" ")),
            ContactCommands::List { sort } => handle_contact_search(
                &api,
                SearchRequest {
                    sort,
                    ..Default::default()
                },
            ),
            ContactCommands::Search {
                query,
                field,
                sort,
                exact,
            } => handle_contact_search(
                &api,
                SearchRequest {
                    keyword: query.join(" "),
                    field,
                    sort,
                    exact,
                },
            ),
            ContactCommands::Born { from, to } => handle_born(&api, &from, &to),
        },
        Some(Commands::Note(cmd)) => match cmd {
            NoteCommands::Add { title, body, tags } => handle_note_add(
                &mut api,
                NoteDraft {
                    title: title.join(" "),
                    body: body.unwrap_or_default(),
                    tags: tags.as_deref().map(parse_tags).unwrap_or_default(),
                },
            ),
            NoteCommands::Edit {
                title,
                new_title,
                body,
                tags,
            } => handle_note_edit(
                &mut api,
                &title.join(" "),
                NoteUpdate {
                    title: new_title,
                    body,
                    tags: tags.as_deref().map(parse_tags),
                },
            ),
            NoteCommands::Delete { title } => handle_note_delete(&mut api, &title.join(" ")),
            NoteCommands::List { sort } => handle_note_search(
                &api,
                SearchRequest {
                    sort,
                    ..Default::default()
                },
            ),
            NoteCommands::Search {
                query,
                field,
                sort,
                exact,
            } => handle_note_search(
                &api,
                SearchRequest {
                    keyword: query.join(" "),
                    field,
                    sort,
                    exact,
                },
            ),
        },
        Some(Commands::Birthdays { days }) => handle_birthdays(&api, days.as_deref()),
        Some(Commands::Config) => handle_config(&api),
    }
}

/// `-v` selects debug output; otherwise `MASON_LOG`, else warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn handle_all(api: &Api) -> Result<()> {
    let result = api.show_all()?;
    let view = ListingView::default();
    print!("{}", render_contacts(&result.listed_contacts, &view));
    println!();
    print!("{}", render_notes(&result.listed_notes, &view));
    print_messages(&result.messages);
    Ok(())
}

fn handle_contact_add(api: &mut Api, draft: ContactDraft) -> Result<()> {
    let result = api.add_contact(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_contact_edit(api: &mut Api, name: &str, edit: ContactEdit) -> Result<()> {
    let result = api.edit_contact(name, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_contact_delete(api: &mut Api, name: &str) -> Result<()> {
    let result = api.delete_contact(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_contact_search(api: &Api, request: SearchRequest) -> Result<()> {
    let result = api.search_contacts(request)?;
    print!("{}", render_contacts(&result.listed_contacts, &result.view));
    print_messages(&result.messages);
    Ok(())
}

fn handle_born(api: &Api, from: &str, to: &str) -> Result<()> {
    let result = api.born_between(from, to)?;
    print!("{}", render_contacts(&result.listed_contacts, &result.view));
    Ok(())
}

fn handle_note_add(api: &mut Api, draft: NoteDraft) -> Result<()> {
    let result = api.add_note(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note_edit(api: &mut Api, title: &str, update: NoteUpdate) -> Result<()> {
    let result = api.edit_note(title, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note_delete(api: &mut Api, title: &str) -> Result<()> {
    let result = api.delete_note(title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note_search(api: &Api, request: SearchRequest) -> Result<()> {
    let result = api.search_notes(request)?;
    print!("{}", render_notes(&result.listed_notes, &result.view));
    print_messages(&result.messages);
    Ok(())
}

fn handle_birthdays(api: &Api, days: Option<&str>) -> Result<()> {
    let result = api.upcoming_birthdays(days)?;
    print!("{}", render_birthdays(&result.birthdays));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &Api) -> Result<()> {
    let result = api.show_config()?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
