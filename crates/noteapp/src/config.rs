//! # Configuration
//!
//! Stored as `config.json` in the platform config directory
//! (`~/.config/noteapp/` on Linux). A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage` | `memory` | `memory` forgets notes at exit, `file` keeps them in `notes.json` |
//! | `seed_sample_notes` | `true` | Start a fresh store with the demo notes |
//! | `date_format` | `%a, %-d %b` | chrono pattern for the row date |
//! | `line_width` | `60` | Width the list renderer lays rows out to, 30 to 500 |
//!
//! Command-line flags override whatever is loaded here.

use crate::error::{NoteError, Result};
use crate::model::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 60;
const MIN_LINE_WIDTH: usize = 30;
const MAX_LINE_WIDTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Memory,
    File,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Memory => write!(f, "memory"),
            StorageKind::File => write!(f, "file"),
        }
    }
}

impl FromStr for StorageKind {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageKind::Memory),
            "file" | "json" => Ok(StorageKind::File),
            other => Err(NoteError::Config(format!(
                "Unknown storage '{}', expected memory or file",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteAppConfig {
    #[serde(default)]
    pub storage: StorageKind,

    #[serde(default = "default_true")]
    pub seed_sample_notes: bool,

    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for NoteAppConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            seed_sample_notes: true,
            date_format: default_date_format(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl NoteAppConfig {
    pub const KEYS: &'static [&'static str] =
        &["storage", "seed_sample_notes", "date_format", "line_width"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NoteError::Io)?;
        let config: NoteAppConfig =
            serde_json::from_str(&content).map_err(NoteError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NoteError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NoteError::Serialization)?;
        fs::write(config_path, content).map_err(NoteError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_date_format(&self.date_format) {
            return Err(NoteError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&self.line_width) {
            return Err(NoteError::Config(format!(
                "line_width must be between {} and {}",
                MIN_LINE_WIDTH, MAX_LINE_WIDTH
            )));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage" => Some(self.storage.to_string()),
            "seed_sample_notes" => Some(self.seed_sample_notes.to_string()),
            "date_format" => Some(self.date_format.clone()),
            "line_width" => Some(self.line_width.to_string()),
            _ => None,
        }
    }

    /// Sets one key from its string form. The config is left unchanged when
    /// the key is unknown or the result would not validate.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "storage" => updated.storage = value.parse()?,
            "seed_sample_notes" => {
                updated.seed_sample_notes = value.trim().parse().map_err(|_| {
                    NoteError::Config(format!("Expected true or false, got '{}'", value))
                })?
            }
            "date_format" => updated.date_format = value.to_string(),
            "line_width" => {
                updated.line_width = value.trim().parse().map_err(|_| {
                    NoteError::Config(format!("Expected a number, got '{}'", value))
                })?
            }
            other => return Err(NoteError::Config(format!("Unknown config key: {}", other))),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

/// Where noteapp keeps its config and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteAppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl NoteAppPaths {
    /// Platform directories for noteapp, `None` when no home directory is known.
    pub fn discover() -> Option<Self> {
        let dirs = ProjectDirs::from("com", "noteapp", "noteapp")?;
        Some(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Config and data side by side under one root.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_dir: root.clone(),
            data_dir: root,
        }
    }
}
