use clap::{Parser, Subcommand};
use noteapp::config::StorageKind;
use noteapp::index::RowIndex;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "noteapp",
    bin_name = "noteapp",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Jot down short notes and tap them away", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Where notes live for this run (memory or file)
    #[arg(long, global = true, value_parser = parse_storage, help_heading = "Options")]
    pub storage: Option<StorageKind>,

    /// Directory for notes.json (implies file storage)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Start without the sample notes
    #[arg(long, global = true, help_heading = "Options")]
    pub no_seed: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Only log errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help_heading = "Options"
    )]
    pub quiet: bool,
}

fn parse_storage(s: &str) -> Result<StorageKind, String> {
    s.parse().map_err(|e: noteapp::error::NoteError| e.to_string())
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive session (the default)
    Session,

    /// Print the notes once
    #[command(alias = "ls")]
    List {
        /// Show how long ago each note was added
        #[arg(long)]
        relative: bool,
    },

    /// Add a note in one step
    Add {
        /// Letters and spaces only
        title: String,

        /// Letters and spaces only
        description: String,
    },

    /// Remove the note at a row number
    #[command(alias = "rm")]
    Tap {
        /// Row number as shown by `list`
        index: RowIndex,
    },

    /// Delete every note
    Clear,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print a single value
    Get { key: String },

    /// Persist a value
    Set { key: String, value: String },
}
