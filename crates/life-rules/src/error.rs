//! Error types for rulestring parsing.

use std::fmt;

/// Errors from [`LifeLikeRule::parse`](crate::LifeLikeRule::parse).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleParseError {
    /// The rulestring does not have the `B…/S…` (or `S/B`) shape.
    Malformed {
        /// The input that failed to parse.
        input: String,
    },
    /// A neighbour count is not a digit in `0..=8`.
    InvalidCount {
        /// The offending character.
        ch: char,
    },
    /// The same count appears twice in one half of the rulestring.
    DuplicateCount {
        /// The repeated neighbour count.
        count: u8,
    },
    /// The rule gives birth to dead cells with no live neighbours (`B0`).
    ///
    /// The engine only evaluates alive cells and their neighbours, so
    /// such a rule cannot be stepped correctly.
    BirthOnZero,
}

impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input } => {
                write!(f, "malformed rulestring '{input}', expected e.g. B3/S23")
            }
            Self::InvalidCount { ch } => {
                write!(f, "invalid neighbour count '{ch}', expected 0-8")
            }
            Self::DuplicateCount { count } => {
                write!(f, "neighbour count {count} listed twice")
            }
            Self::BirthOnZero => {
                write!(
                    f,
                    "B0 rules are not supported: cells with no live neighbours are never evaluated"
                )
            }
        }
    }
}

impl std::error::Error for RuleParseError {}
