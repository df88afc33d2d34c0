//! # Rendering Module
//!
//! Turns library results into terminal text. Every function here returns a
//! `String` and never prints, so output can be asserted on directly.
//!
//! Layout calculations (width, truncation, padding) run on plain text first;
//! styles are applied to the finished pieces afterwards, so escape codes never
//! throw off the column math.
//!
//! The screen is drawn top to bottom:
//!
//! ```text
//!  Note App                                              🔔
//!   Title       Groceries
//!   Add a note  (empty)
//!   [ Save ]
//! ────────────────────────────────────────────────────────────
//!   1. A good day                                   Mon, 3 Jun
//!      We went on a vacation by the lake
//! ```

use super::styles::{names, NOTE_THEME};
use chrono::{DateTime, Local};
use noteapp::api::{CmdMessage, MessageLevel};
use noteapp::config::NoteAppConfig;
use noteapp::form::{NoteForm, DESCRIPTION_LABEL, SAVE_LABEL, TITLE_LABEL};
use noteapp::index::DisplayNote;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const APP_NAME: &str = "Note App";
pub const NOTIFICATION_MARKER: &str = "🔔";
pub const EMPTY_FIELD: &str = "(empty)";
pub const EMPTY_LIST: &str = "No notes yet.";

const INDEX_WIDTH: usize = 5;
const FORM_INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub line_width: usize,
    pub date_format: String,
    pub use_color: bool,
    pub relative_dates: bool,
}

impl ViewOptions {
    pub fn from_config(config: &NoteAppConfig, use_color: bool) -> Self {
        Self {
            line_width: config.line_width,
            date_format: config.date_format.clone(),
            use_color,
            relative_dates: false,
        }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        NOTE_THEME.paint(style, text, self.use_color)
    }
}

/// The whole screen: app bar, form, divider and note rows.
pub fn render_screen(form: &NoteForm, notes: &[DisplayNote], opts: &ViewOptions) -> String {
    let mut out = String::new();
    out.push_str(&render_app_bar(opts));
    out.push_str(&render_form(form, opts));
    out.push_str(&render_divider(opts));
    out.push_str(&render_note_list(notes, opts));
    out
}

pub fn render_app_bar(opts: &ViewOptions) -> String {
    let left = format!(" {}", APP_NAME);
    let right = format!("{} ", NOTIFICATION_MARKER);
    let gap = opts
        .line_width
        .saturating_sub(left.width() + right.width());
    let bar = format!("{}{}{}", left, " ".repeat(gap), right);
    format!("{}\n", opts.paint(names::APP_BAR, &bar))
}

pub fn render_form(form: &NoteForm, opts: &ViewOptions) -> String {
    let label_width = TITLE_LABEL.width().max(DESCRIPTION_LABEL.width()) + 2;
    let value_width = opts
        .line_width
        .saturating_sub(FORM_INDENT.len() + label_width);

    let mut out = String::new();
    for (label, value) in [
        (TITLE_LABEL, form.title()),
        (DESCRIPTION_LABEL, form.description()),
    ] {
        let padded_label = format!("{:<width$}", label, width = label_width);
        let shown = if value.is_empty() {
            opts.paint(names::PLACEHOLDER, EMPTY_FIELD)
        } else {
            opts.paint(names::FIELD, &truncate_to_width(value, value_width))
        };
        out.push_str(&format!(
            "{}{}{}\n",
            FORM_INDENT,
            opts.paint(names::LABEL, &padded_label),
            shown
        ));
    }
    out.push_str(&format!(
        "{}{}\n",
        FORM_INDENT,
        opts.paint(names::BUTTON, &format!("[ {} ]", SAVE_LABEL))
    ));
    out
}

pub fn render_divider(opts: &ViewOptions) -> String {
    format!("{}\n", opts.paint(names::DIVIDER, &"─".repeat(opts.line_width)))
}

/// One entry per note: the title line carries the index and the date, the
/// description sits underneath.
pub fn render_note_list(notes: &[DisplayNote], opts: &ViewOptions) -> String {
    if notes.is_empty() {
        return format!("{}{}\n", FORM_INDENT, opts.paint(names::MUTED, EMPTY_LIST));
    }

    let mut out = String::new();
    for dn in notes {
        let index = format!("{:>3}. ", dn.index);
        let date = if opts.relative_dates {
            format_time_ago(dn.note.entry_date)
        } else {
            dn.note.format_entry_date(&opts.date_format)
        };

        // Title and date share the first line with at least one space between
        let available = opts
            .line_width
            .saturating_sub(INDEX_WIDTH + date.width() + 1);
        let title = truncate_to_width(&dn.note.title, available);
        let padding = " ".repeat(available.saturating_sub(title.width()) + 1);

        out.push_str(&format!(
            "{}{}{}{}\n",
            opts.paint(names::ROW_INDEX, &index),
            opts.paint(names::ROW_TITLE, &title),
            padding,
            opts.paint(names::ROW_DATE, &date)
        ));

        let description = truncate_to_width(
            &dn.note.description,
            opts.line_width.saturating_sub(INDEX_WIDTH),
        );
        out.push_str(&format!(
            "{}{}\n",
            " ".repeat(INDEX_WIDTH),
            opts.paint(names::ROW_DESCRIPTION, &description)
        ));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage], opts: &ViewOptions) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => names::INFO,
            MessageLevel::Success => names::SUCCESS,
            MessageLevel::Warning => names::WARNING,
        };
        out.push_str(&opts.paint(style, &message.content));
        out.push('\n');
    }
    out
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Local>) -> String {
    let duration = Local::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
