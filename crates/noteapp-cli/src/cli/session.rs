//! # Interactive Session
//!
//! The screen-style client: the form sits above the list, and every line the
//! user enters is one UI event. After each event the whole screen is drawn
//! again from the current state, followed by any notifications raised by that
//! event. Notifications are shown once and then dropped.
//!
//! Line commands:
//!
//! | Input | Event |
//! |-------|-------|
//! | `title <text>`, `t <text>` | type into the title field |
//! | `desc <text>`, `d <text>` | type into the description field |
//! | `save`, `s` | press Save |
//! | `tap <n>`, `<n>` | tap row `n` (removes it) |
//! | `list`, `ls` | redraw |
//! | `help`, `?` | show this table |
//! | `quit`, `q`, end of input | leave |
//!
//! The loop is generic over `BufRead`/`Write` so tests drive it with byte
//! buffers.

use super::render::{render_messages, render_screen, ViewOptions};
use noteapp::api::{CmdMessage, FormField, NotesApi};
use noteapp::dao::NoteDao;
use noteapp::index::{index_notes, RowIndex};
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "> ";

const HELP_LINES: &[&str] = &[
    "title <text>   type the title (t)",
    "desc <text>    type the description (d)",
    "save           add the note (s)",
    "tap <n>        remove row n (or just <n>)",
    "list           redraw the notes (ls)",
    "quit           leave (q)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Type(FormField, String),
    Save,
    Tap(RowIndex),
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_event(line: &str) -> SessionEvent {
    let line = line.trim();
    if line.is_empty() {
        return SessionEvent::Empty;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "title" | "t" => SessionEvent::Type(FormField::Title, rest.to_string()),
        "desc" | "d" | "description" => {
            SessionEvent::Type(FormField::Description, rest.to_string())
        }
        "save" | "s" if rest.is_empty() => SessionEvent::Save,
        "tap" | "rm" => match rest.parse::<RowIndex>() {
            Ok(index) => SessionEvent::Tap(index),
            Err(_) => SessionEvent::Unknown(line.to_string()),
        },
        "list" | "ls" if rest.is_empty() => SessionEvent::List,
        "help" | "?" if rest.is_empty() => SessionEvent::Help,
        "quit" | "q" | "exit" if rest.is_empty() => SessionEvent::Quit,
        _ if rest.is_empty() => match command.parse::<RowIndex>() {
            Ok(index) => SessionEvent::Tap(index),
            Err(_) => SessionEvent::Unknown(line.to_string()),
        },
        _ => SessionEvent::Unknown(line.to_string()),
    }
}

pub struct Session<'a, D: NoteDao> {
    api: &'a mut NotesApi<D>,
    opts: ViewOptions,
    pending: Vec<CmdMessage>,
}

impl<'a, D: NoteDao> Session<'a, D> {
    pub fn new(api: &'a mut NotesApi<D>, opts: ViewOptions) -> Self {
        Self {
            api,
            opts,
            pending: Vec::new(),
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.draw(out)?;

        for line in input.lines() {
            let event = parse_event(&line?);
            debug!(?event, "session event");
            if event == SessionEvent::Quit {
                break;
            }
            self.handle(event);
            self.draw(out)?;
        }

        out.flush()
    }

    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Type(field, text) => {
                self.api.propose(field, &text);
            }
            SessionEvent::Save => {
                let result = self.api.save();
                self.pending.extend(result.messages);
            }
            SessionEvent::Tap(index) => {
                let result = self.api.tap(index);
                self.pending.extend(result.messages);
            }
            SessionEvent::Help => {
                self.pending
                    .extend(HELP_LINES.iter().map(|line| CmdMessage::info(*line)));
            }
            SessionEvent::Unknown(input) => {
                self.pending.push(CmdMessage::warning(format!(
                    "Unknown command: {}. Type help for the list.",
                    input
                )));
            }
            SessionEvent::List | SessionEvent::Empty | SessionEvent::Quit => {}
        }
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let listed = index_notes(self.api.notes());
        write!(out, "{}", render_screen(self.api.form(), &listed, &self.opts))?;

        let messages = std::mem::take(&mut self.pending);
        if !messages.is_empty() {
            write!(out, "{}", render_messages(&messages, &self.opts))?;
        }

        write!(out, "{}", PROMPT)?;
        out.flush()
    }
}
