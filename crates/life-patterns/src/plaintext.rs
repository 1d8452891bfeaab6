//! Plain-text patterns.
//!
//! One grid row per line, one character per cell:
//!
//! ```text
//! ! Glider
//! .*.
//! ..*
//! ***
//! ```
//!
//! `*`, `1` and `O` are alive; `.`, `0` and `·` are dead. Lines starting
//! with `!` are comments, as in the `.cells` format. Whitespace around
//! each line and blank lines before or after the pattern are ignored.
//! Every row must have the same length as the first.

use std::path::Path;

use life_core::Position;

use crate::error::PatternError;
use crate::loader::{read_source, PatternLoader};
use crate::pattern::Pattern;

const ALIVE: [char; 3] = ['*', '1', 'O'];
const DEAD: [char; 3] = ['.', '0', '·'];

/// Loads a pattern from plain-text rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainTextLoader {
    source: String,
}

impl PlainTextLoader {
    /// A loader for the given text.
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
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('!'))
            .collect();
        let start = rows.iter().position(|r| !r.is_empty()).unwrap_or(rows.len());
        let end = rows.iter().rposition(|r| !r.is_empty()).map_or(start, |i| i + 1);

        let mut cells = Vec::new();
        let mut expected = None;
        for (row, line) in rows[start..end].iter().enumerate() {
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                found += 1;
                if ALIVE.contains(&ch) {
                    let position = match (i32::try_from(row), i32::try_from(col)) {
                        (Ok(r), Ok(c)) => Position::new(r, c),
                        _ => return Err(PatternError::TooLarge { row, col }),
                    };
                    cells.push(position);
                } else if !DEAD.contains(&ch) {
                    return Err(PatternError::InvalidCharacter { row, col, ch });
                }
            }
            match expected {
                None => expected = Some(found),
                Some(expected) if expected != found => {
                    return Err(PatternError::InconsistentRowLength {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(Pattern::new(cells))
    }
}

impl PatternLoader for PlainTextLoader {
    fn load(&self) -> Result<Pattern, PatternError> {
        Self::parse(&self.source)
    }
}
