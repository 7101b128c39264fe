//! # Rendering Module
//!
//! Turns `CmdResult` contents into terminal text.
//!
//! Layout (column widths, truncation, padding) is computed on plain text with
//! `unicode-width`, and styles are applied afterwards, so ANSI codes never
//! disturb alignment. Every public renderer has an `_internal` twin taking
//! `use_color: Option<bool>`: `None` follows terminal detection, tests pass
//! `Some(false)` to get plain output.

use super::styles::{names, style};
use mason::api::{CmdMessage, ListingView, MessageLevel};
use mason::birthdays::UpcomingBirthday;
use mason::config::MasonConfig;
use mason::model::{Contact, ContactField, Note, NoteField};
use mason::query::{EntityField, SortDirection};
use regex::{Regex, RegexBuilder};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_COLUMN_WIDTH: usize = 40;
pub const COLUMN_GAP: &str = "  ";
pub const ASC_MARKER: &str = "▲";
pub const DESC_MARKER: &str = "▼";

fn header_for<F: EntityField>(field: F, view: &ListingView) -> String {
    match view.sorted_by {
        Some((name, direction)) if name == field.name() => {
            let marker = match direction {
                SortDirection::Asc => ASC_MARKER,
                SortDirection::Desc => DESC_MARKER,
            };
            format!("{} {}", field.label(), marker)
        }
        _ => field.label().to_string(),
    }
}

fn contact_cells(contact: &Contact) -> Vec<String> {
    ContactField::ALL
        .iter()
        .map(|field| match field {
            ContactField::Name => contact.name().to_string(),
            ContactField::Phone => contact
                .phones()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            ContactField::Email => contact.email().map(|e| e.to_string()).unwrap_or_default(),
            ContactField::Address => contact.address().map(|a| a.to_string()).unwrap_or_default(),
            ContactField::Birthday => contact
                .birthday()
                .map(|b| b.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn note_cells(note: &Note) -> Vec<String> {
    NoteField::ALL
        .iter()
        .map(|field| match field {
            NoteField::Title => note.title.clone(),
            NoteField::Body => note.body.replace('\n', " "),
            NoteField::Tags => note.tags.join(", "),
        })
        .collect()
}

pub fn render_contacts(contacts: &[Contact], view: &ListingView) -> String {
    render_contacts_internal(contacts, view, None)
}

fn render_contacts_internal(
    contacts: &[Contact],
    view: &ListingView,
    use_color: Option<bool>,
) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }
    let headers = ContactField::ALL
        .iter()
        .map(|f| header_for(*f, view))
        .collect();
    let rows = contacts.iter().map(contact_cells).collect();
    render_table(headers, rows, view.keyword.as_deref(), use_color)
}

pub fn render_notes(notes: &[Note], view: &ListingView) -> String {
    render_notes_internal(notes, view, None)
}

fn render_notes_internal(notes: &[Note], view: &ListingView, use_color: Option<bool>) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }
    let headers = NoteField::ALL
        .iter()
        .map(|f| header_for(*f, view))
        .collect();
    let rows = notes.iter().map(note_cells).collect();
    render_table(headers, rows, view.keyword.as_deref(), use_color)
}

fn render_table(
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    keyword: Option<&str>,
    use_color: Option<bool>,
) -> String {
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| truncate_to_width(cell, MAX_COLUMN_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let highlighter = keyword.and_then(keyword_pattern);
    let header_style = style(names::HEADER, use_color);
    let rule_style = style(names::RULE, use_color);

    let mut output = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| {
            let padding = width.saturating_sub(header.width());
            format!("{}{}", header_style.apply_to(header), " ".repeat(padding))
        })
        .collect();
    output.push_str(header_line.join(COLUMN_GAP).trim_end());
    output.push('\n');

    let total: usize = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    output.push_str(&rule_style.apply_to("─".repeat(total)).to_string());
    output.push('\n');

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let padding = width.saturating_sub(cell.width());
                let shown = match &highlighter {
                    Some(re) => highlight(cell, re, use_color),
                    None => cell.clone(),
                };
                format!("{}{}", shown, " ".repeat(padding))
            })
            .collect();
        output.push_str(line.join(COLUMN_GAP).trim_end());
        output.push('\n');
    }

    output
}

fn keyword_pattern(keyword: &str) -> Option<Regex> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Wraps every case-insensitive occurrence of the keyword in the match style.
fn highlight(text: &str, pattern: &Regex, use_color: Option<bool>) -> String {
    let match_style = style(names::MATCH, use_color);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for found in pattern.find_iter(text) {
        out.push_str(&text[last..found.start()]);
        out.push_str(&match_style.apply_to(found.as_str()).to_string());
        last = found.end();
    }
    out.push_str(&text[last..]);
    out
}

pub fn render_birthdays(birthdays: &[UpcomingBirthday]) -> String {
    render_birthdays_internal(birthdays, None)
}

fn render_birthdays_internal(birthdays: &[UpcomingBirthday], use_color: Option<bool>) -> String {
    let date_style = style(names::DATE, use_color);
    let name_width = birthdays
        .iter()
        .map(|b| b.name.width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for upcoming in birthdays {
        let date = upcoming.celebration_date.format("%a %d.%m.%Y").to_string();
        let padding = name_width.saturating_sub(upcoming.name.width());
        output.push_str(&format!(
            "{}  {}{}  turns {}\n",
            date_style.apply_to(date),
            upcoming.name,
            " ".repeat(padding),
            upcoming.turning()
        ));
    }
    output
}

pub fn render_config(config: &MasonConfig) -> String {
    render_config_internal(config, None)
}

fn render_config_internal(config: &MasonConfig, use_color: Option<bool>) -> String {
    let key_style = style(names::KEY, use_color);
    let entries = config.list_all();
    let key_width = entries.iter().map(|(k, _)| k.width()).max().unwrap_or(0);

    let mut output = String::new();
    for (key, value) in entries {
        let padding = key_width.saturating_sub(key.width());
        output.push_str(&format!(
            "{}{} = {}\n",
            key_style.apply_to(key),
            " ".repeat(padding),
            value
        ));
    }
    output
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    let mut output = String::new();
    for message in messages {
        let name = match message.level {
            MessageLevel::Info => names::INFO,
            MessageLevel::Success => names::SUCCESS,
            MessageLevel::Warning => names::WARNING,
        };
        output.push_str(&style(name, use_color).apply_to(&message.content).to_string());
        output.push('\n');
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
