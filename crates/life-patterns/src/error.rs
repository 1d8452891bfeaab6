//! Error types for pattern loading and placement.

use std::error::Error;
use std::fmt;

use life_core::Position;
use life_space::GridError;

/// Errors arising while reading a pattern or placing it on a grid.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternError {
    /// A plain-text row contains a character that is neither alive nor dead.
    InvalidCharacter {
        /// Zero-based pattern row (comment lines not counted).
        row: usize,
        /// Zero-based column within the row.
        col: usize,
        /// The offending character.
        ch: char,
    },
    /// A plain-text row is longer or shorter than the first row.
    InconsistentRowLength {
        /// Zero-based pattern row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },
    /// The pattern has more rows or columns than a coordinate can address.
    TooLarge {
        /// Zero-based pattern row where the limit was hit.
        row: usize,
        /// Zero-based column where the limit was hit.
        col: usize,
    },
    /// JSON input is malformed or lacks `alive_cells`.
    InvalidJson {
        /// Decoder message.
        reason: String,
    },
    /// A placed cell falls outside the target grid.
    InvalidPlacement {
        /// The cell after applying the offset.
        position: Position,
        /// Target grid width.
        width: u32,
        /// Target grid height.
        height: u32,
    },
    /// The target grid itself could not be built.
    Grid(GridError),
    /// A random fill density outside `[0, 1]`.
    InvalidDensity {
        /// The invalid value.
        value: f64,
    },
    /// The pattern source could not be read.
    Io {
        /// Path that was being read.
        path: String,
        /// OS error message.
        reason: String,
    },
}

impl PatternError {
    /// Whether the error describes malformed pattern input, as opposed to
    /// a placement, sizing, or I/O failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCharacter { .. }
                | Self::InconsistentRowLength { .. }
                | Self::TooLarge { .. }
                | Self::InvalidJson { .. }
        )
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { row, col, ch } => write!(
                f,
                "invalid pattern character {ch:?} at row {row}, column {col}"
            ),
            Self::InconsistentRowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} like the first row"
            ),
            Self::TooLarge { row, col } => {
                write!(f, "pattern too large at row {row}, column {col}")
            }
            Self::InvalidJson { reason } => write!(f, "invalid JSON pattern: {reason}"),
            Self::InvalidPlacement {
                position,
                width,
                height,
            } => write!(
                f,
                "pattern cell {position} lies outside the {width}x{height} grid"
            ),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidDensity { value } => {
                write!(f, "density must be within [0, 1], got {value}")
            }
            Self::Io { path, reason } => write!(f, "cannot read {path}: {reason}"),
        }
    }
}

impl Error for PatternError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PatternError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::CellOutOfBounds {
                position,
                width,
                height,
            } => Self::InvalidPlacement {
                position,
                width,
                height,
            },
            other => Self::Grid(other),
        }
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson {
            reason: e.to_string(),
        }
    }
}
