//! JSON patterns: `{"alive_cells": [[row, col], ...]}`.
//!
//! Other top-level keys are ignored, so files may carry a name or comment
//! alongside the cells.

use std::path::Path;

use life_core::Position;
use serde::{Deserialize, Serialize};

use crate::error::PatternError;
use crate::loader::{read_source, PatternLoader};
use crate::pattern::Pattern;

#[derive(Debug, Serialize, Deserialize)]
struct PatternDocument {
    alive_cells: Vec<(i32, i32)>,
}

/// Loads a pattern from a JSON document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonLoader {
    source: String,
}

impl JsonLoader {
    /// A loader for the given JSON text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// A loader for the contents of the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        read_source(path.as_ref()).map(Self::new)
    }

    /// Parse `text` directly.
    pub fn parse(text: &str) -> Result<Pattern, PatternError> {
        let document: PatternDocument = serde_json::from_str(text)?;
        Ok(document.alive_cells.into_iter().map(Position::from).collect())
    }

    /// Encode `pattern` in the format [`parse`](JsonLoader::parse) reads.
    pub fn encode(pattern: &Pattern) -> String {
        let document = PatternDocument {
            alive_cells: pattern.iter().map(|p| (p.row, p.col)).collect(),
        };
        // A struct of integer pairs always serializes.
        serde_json::to_string(&document).unwrap_or_default()
    }
}

impl PatternLoader for JsonLoader {
    fn load(&self) -> Result<Pattern, PatternError> {
        Self::parse(&self.source)
    }
}
