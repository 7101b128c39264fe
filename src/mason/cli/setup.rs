use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mason", bin_name = "mason", version)]
#[command(about = "Contacts, notes and birthday reminders for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding the contact and note snapshots
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every contact and every note
    #[command(display_order = 1)]
    All,

    /// Add, edit, delete and search contacts
    #[command(subcommand, alias = "c", display_order = 2)]
    Contact(ContactCommands),

    /// Add, edit, delete and search notes
    #[command(subcommand, alias = "n", display_order = 3)]
    Note(NoteCommands),

    /// Birthdays celebrated in the next DAYS days (weekends move to Monday)
    #[command(alias = "bd", display_order = 4)]
    Birthdays {
        /// Days to look ahead (defaults to the configured birthday_window)
        #[arg(allow_negative_numbers = true)]
        days: Option<String>,
    },

    /// Show the effective configuration
    #[command(display_order = 5)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Add a new contact
    #[command(display_order = 1)]
    Add {
        /// Name words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Phone number, 10 digits; repeat for several
        #[arg(short, long = "phone", value_name = "PHONE")]
        phones: Vec<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Date of birth (DD.MM.YYYY, DD/MM/YYYY, DD-MM-YYYY or YYYY-MM-DD)
        #[arg(short, long)]
        birthday: Option<String>,

        #[arg(short, long)]
        address: Option<String>,
    },

    /// Change an existing contact
    #[command(display_order = 2)]
    Edit {
        /// Name of the contact to change
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// New name
        #[arg(long, value_name = "NAME")]
        rename: Option<String>,

        /// Replace every phone number
        #[arg(long, num_args = 1.., value_name = "PHONE")]
        phones: Option<Vec<String>>,

        #[arg(long, value_name = "PHONE")]
        add_phone: Vec<String>,

        #[arg(long, value_name = "PHONE")]
        remove_phone: Vec<String>,

        /// Replace one phone number with another
        #[arg(long, num_args = 2, value_names = ["OLD", "NEW"])]
        edit_phone: Vec<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        birthday: Option<String>,

        #[arg(long)]
        address: Option<String>,

        /// Remove a field (phone, email, birthday, address)
        #[arg(long, value_name = "FIELD")]
        clear: Vec<String>,
    },

    /// Delete a contact
    #[command(alias = "rm", display_order = 3)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List contacts
    #[command(alias = "ls", display_order = 4)]
    List {
        /// Sort by FIELD[:asc|desc]
        #[arg(short, long, value_name = "FIELD[:DIR]")]
        sort: Option<String>,
    },

    /// Search contacts by keyword
    #[command(display_order = 5)]
    Search {
        /// Keyword words (joined with spaces); empty matches everything
        #[arg(num_args = 0..)]
        query: Vec<String>,

        /// Only look in this field (name, phone, email, address, birthday or all)
        #[arg(short, long)]
        field: Option<String>,

        /// Sort by FIELD[:asc|desc]
        #[arg(short, long, value_name = "FIELD[:DIR]")]
        sort: Option<String>,

        /// Match whole values instead of substrings
        #[arg(long)]
        exact: bool,
    },

    /// Contacts born within a date range
    #[command(display_order = 6)]
    Born {
        #[arg(long, value_name = "DATE")]
        from: String,

        #[arg(long, value_name = "DATE")]
        to: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a new note
    #[command(display_order = 1)]
    Add {
        /// Title words (joined with spaces, optional when a body is given)
        #[arg(num_args = 0..)]
        title: Vec<String>,

        #[arg(short, long)]
        body: Option<String>,

        /// Comma separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Change an existing note
    #[command(display_order = 2)]
    Edit {
        /// Title of the note to change
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// New title
        #[arg(long = "title", value_name = "TITLE")]
        new_title: Option<String>,

        #[arg(long)]
        body: Option<String>,

        /// Comma separated tags, replacing the current ones
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm", display_order = 3)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// List notes
    #[command(alias = "ls", display_order = 4)]
    List {
        /// Sort by FIELD[:asc|desc]
        #[arg(short, long, value_name = "FIELD[:DIR]")]
        sort: Option<String>,
    },

    /// Search notes by keyword
    #[command(display_order = 5)]
    Search {
        /// Keyword words (joined with spaces); empty matches everything
        #[arg(num_args = 0..)]
        query: Vec<String>,

        /// Only look in this field (title, body, tags or all)
        #[arg(short, long)]
        field: Option<String>,

        /// Sort by FIELD[:asc|desc]
        #[arg(short, long, value_name = "FIELD[:DIR]")]
        sort: Option<String>,

        /// Match whole values instead of substrings
        #[arg(long)]
        exact: bool,
    },
}
