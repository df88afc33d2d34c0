//! # Noteapp Architecture
//!
//! Noteapp is a **UI-agnostic note list library**. The terminal client in
//! `crates/noteapp-cli` is one way of driving it; nothing in here knows about
//! stdout, stdin or exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (noteapp-cli)                                 │
//! │  - Renders the screen, reads user actions, prints messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the NoteStore and the NoteForm for one session      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / add / remove / clear, returns CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs) over a NoteDao (dao/)                     │
//! │  - Ordered in-memory list, the session's source of truth    │
//! │  - MemDao (default), JsonFileDao (optional persistence)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! Everything a user can do is total. Saving an incomplete form, typing a
//! disallowed character, or tapping a note that is already gone all do nothing
//! and report nothing. Only infrastructure (config, data files) can fail, and
//! the store logs those failures instead of surfacing them mid-session.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade a UI talks to
//! - [`commands`]: One module per user operation
//! - [`store`]: The ordered note list
//! - [`dao`]: Row-level persistence contract and its implementations
//! - [`form`]: Title/description buffers and the input predicate
//! - [`index`]: 1-based row numbers for tap-to-delete
//! - [`model`]: The [`model::Note`] record
//! - [`sample`]: Built-in demo notes
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dao;
pub mod error;
pub mod form;
pub mod index;
pub mod model;
pub mod sample;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
