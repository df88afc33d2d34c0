//! Built-in demo content used to populate a fresh session.

use crate::model::Note;

const SAMPLE_NOTES: &[(&str, &str)] = &[
    ("A good day", "We went on a vacation by the lake"),
    ("Android Compose", "Working on the Compose course today"),
    ("Keep at it", "Sometimes things just happen"),
    ("A movie day", "Watching a movie with family today"),
    ("Weekend plans", "Hiking up the hill with friends"),
    ("Reading list", "Finish the novel before the library wants it back"),
    ("Garden", "Water the tomatoes and pick some basil"),
];

/// Source of the pre-populated notes a session starts with.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleDataSource;

impl SampleDataSource {
    pub fn new() -> Self {
        Self
    }

    /// Returns the demo notes in display order. Never empty, never fails.
    pub fn load_notes(&self) -> Vec<Note> {
        SAMPLE_NOTES
            .iter()
            .map(|(title, description)| Note::new(*title, *description))
            .collect()
    }
}
