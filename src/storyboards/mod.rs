//! Built-in storyboards.

pub mod data_to_vector;
pub mod status_words;

use crate::{
    config::RenderConfig,
    foundation::error::{StoryboardError, StoryboardResult},
    timeline::model::Timeline,
};

/// A named storyboard and the function that records it.
#[derive(Clone, Copy, Debug)]
pub struct StoryboardEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub build: fn(&RenderConfig) -> StoryboardResult<Timeline>,
}

impl StoryboardEntry {
    pub fn build(&self, config: &RenderConfig) -> StoryboardResult<Timeline> {
        (self.build)(config)
    }
}

static CATALOG: [StoryboardEntry; 2] = [
    StoryboardEntry {
        name: status_words::NAME,
        title: "What does the assistant say while it's thinking?",
        build: status_words::build,
    },
    StoryboardEntry {
        name: data_to_vector::NAME,
        title: "Vectors: from a patient table to vector space",
        build: data_to_vector::build,
    },
];

pub fn catalog() -> &'static [StoryboardEntry] {
    &CATALOG
}

pub fn find(name: &str) -> StoryboardResult<&'static StoryboardEntry> {
    CATALOG.iter().find(|e| e.name == name).ok_or_else(|| {
        let known = CATALOG.iter().map(|e| e.name).collect::<Vec<_>>().join(", ");
        StoryboardError::validation(format!("unknown storyboard '{name}' (known: {known})"))
    })
}

/// Consistency checks on every storyboard's literal tables.
pub fn check_tables() -> StoryboardResult<()> {
    status_words::TABLE.validate()?;
    data_to_vector::TABLE.validate()
}

#[cfg(test)]
#[path = "../../tests/unit/storyboards/catalog.rs"]
mod tests;
