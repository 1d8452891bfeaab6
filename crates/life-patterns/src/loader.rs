//! The pattern source boundary.

use std::fs;
use std::path::Path;

use crate::error::PatternError;
use crate::json::JsonLoader;
use crate::pattern::Pattern;
use crate::plaintext::PlainTextLoader;

/// Produces the initial alive set for a simulation.
///
/// Loading either yields a complete [`Pattern`] or fails; a loader never
/// returns a partially parsed pattern.
pub trait PatternLoader {
    /// Read the pattern.
    fn load(&self) -> Result<Pattern, PatternError>;
}

impl<L: PatternLoader + ?Sized> PatternLoader for &L {
    fn load(&self) -> Result<Pattern, PatternError> {
        (**self).load()
    }
}

impl<L: PatternLoader + ?Sized> PatternLoader for Box<L> {
    fn load(&self) -> Result<Pattern, PatternError> {
        (**self).load()
    }
}

/// A loaded pattern is its own source.
impl PatternLoader for Pattern {
    fn load(&self) -> Result<Pattern, PatternError> {
        Ok(self.clone())
    }
}

/// Read a whole pattern file as text.
pub(crate) fn read_source(path: &Path) -> Result<String, PatternError> {
    fs::read_to_string(path).map_err(|e| PatternError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Pick a loader for `path` by extension: `.json` is JSON, anything else
/// is plain text.
pub fn loader_for_path(path: impl AsRef<Path>) -> Result<Box<dyn PatternLoader>, PatternError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    log::debug!(
        "loading {} pattern from {}",
        if is_json { "JSON" } else { "plain-text" },
        path.display()
    );
    if is_json {
        Ok(Box::new(JsonLoader::from_path(path)?))
    } else {
        Ok(Box::new(PlainTextLoader::from_path(path)?))
    }
}
