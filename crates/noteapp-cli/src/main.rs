//! # noteapp CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/noteapp/` holds the UI-agnostic library (store, form, DAO, config)
//! - `crates/noteapp-cli/` is this terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/noteapp-cli/src/cli/)                 │
//! │  - clap parsing, context wiring, session loop, rendering │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  API Layer (crates/noteapp/src/api.rs)                   │
//! │  - One session: store plus form buffers                  │
//! │  - Returns structured `CmdResult` values                 │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Command / Store / DAO (crates/noteapp/src/...)          │
//! │  - No knowledge of stdout, stderr or process exits       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Library: unit tests beside the code, integration tests in `tests/`.
//! - CLI: parsing and rendering are unit tested with plain strings; the
//!   binary is exercised end to end with `assert_cmd` under a temporary
//!   `NOTEAPP_HOME`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
