//! # CLI Behavior
//!
//! This is **one possible UI client** for noteapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Naked Execution (`noteapp`)
//!
//! Running `noteapp` with no arguments starts the interactive session: the
//! form and the list on one screen, driven by line commands. `noteapp session`
//! does the same thing explicitly.
//!
//! ## One-shot Commands
//!
//! - `noteapp list [--relative]` prints the list once.
//! - `noteapp add <title> <description>` saves one note. Input the form would
//!   refuse is dropped without a word, exactly like typing a digit.
//! - `noteapp tap <n>` removes row `n`. A row that is not there is ignored.
//! - `noteapp clear` empties the store.
//! - `noteapp config [get <key> | set <key> <value>]`.
//!
//! With the default `memory` storage every run starts from the sample notes,
//! so one-shot edits only stick with `--storage file` (or `--data-dir`).
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `logging`: tracing subscriber on stderr
//! - `render`: screen and list layout
//! - `session`: the interactive loop
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling

mod commands;
mod logging;
mod render;
mod session;
pub mod setup;
mod styles;

pub use commands::run;
