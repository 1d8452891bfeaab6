//! Outer-totalistic Life-like rules described by `B…/S…` rulestrings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RuleParseError;
use crate::rule::{RuleSet, MAX_NEIGHBOURS};

/// A Life-like rule: birth and survival neighbour counts as bit masks.
///
/// Bit `n` of `birth` set means a dead cell with `n` live neighbours is
/// born; bit `n` of `survival` set means an alive cell with `n` live
/// neighbours survives. Every other combination is dead.
///
/// Serializes as its canonical rulestring (`"B3/S23"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LifeLikeRule {
    birth: u16,
    survival: u16,
    rulestring: String,
}

impl LifeLikeRule {
    /// Build a rule from the neighbour counts that cause birth and survival.
    ///
    /// Counts above 8 can never occur and are ignored. Birth on 0 is
    /// dropped: dead cells with no live neighbours always stay dead.
    pub fn new(birth: &[u8], survival: &[u8]) -> Self {
        let birth = mask_of(birth) & !1;
        let survival = mask_of(survival);
        Self {
            birth,
            survival,
            rulestring: format_rulestring(birth, survival),
        }
    }

    /// Conway's Game of Life, B3/S23.
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// HighLife, B36/S23: Conway plus birth on 6; has a replicator.
    pub fn highlife() -> Self {
        Self::new(&[3, 6], &[2, 3])
    }

    /// Seeds, B2/S: every alive cell dies each generation.
    pub fn seeds() -> Self {
        Self::new(&[2], &[])
    }

    /// Day & Night, B3678/S34678: symmetric under alive/dead inversion.
    pub fn day_and_night() -> Self {
        Self::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Parse a rulestring.
    ///
    /// Accepts `B3/S23` and `S23/B3` in any letter case, and the older
    /// bare `23/3` form (survival before birth). Either half may be empty
    /// (`B2/S`). Rules with birth on 0 are rejected with
    /// [`RuleParseError::BirthOnZero`].
    pub fn parse(input: &str) -> Result<Self, RuleParseError> {
        let malformed = || RuleParseError::Malformed {
            input: input.to_string(),
        };
        let normalized = input.trim().to_ascii_uppercase();
        let (left, right) = normalized.split_once('/').ok_or_else(malformed)?;

        let (birth, survival) = match (left.chars().next(), right.chars().next()) {
            (Some('B'), Some('S')) => (&left[1..], &right[1..]),
            (Some('S'), Some('B')) => (&right[1..], &left[1..]),
            (l, r) if !matches!(l, Some('B' | 'S')) && !matches!(r, Some('B' | 'S')) => {
                (right, left)
            }
            _ => return Err(malformed()),
        };

        let birth = parse_counts(birth)?;
        let survival = parse_counts(survival)?;
        if birth & 1 != 0 {
            return Err(RuleParseError::BirthOnZero);
        }
        Ok(Self {
            birth,
            survival,
            rulestring: format_rulestring(birth, survival),
        })
    }

    /// Whether a dead cell with `n` live neighbours is born.
    pub fn births_on(&self, n: u8) -> bool {
        n <= MAX_NEIGHBOURS && self.birth & (1 << n) != 0
    }

    /// Whether an alive cell with `n` live neighbours survives.
    pub fn survives_on(&self, n: u8) -> bool {
        n <= MAX_NEIGHBOURS && self.survival & (1 << n) != 0
    }

    /// Canonical rulestring, e.g. `"B36/S23"`.
    pub fn rulestring(&self) -> &str {
        &self.rulestring
    }
}

impl Default for LifeLikeRule {
    fn default() -> Self {
        Self::conway()
    }
}

impl RuleSet for LifeLikeRule {
    fn name(&self) -> &str {
        &self.rulestring
    }

    fn should_cell_live(&self, is_alive: bool, neighbor_count: u8) -> bool {
        if is_alive {
            self.survives_on(neighbor_count)
        } else {
            self.births_on(neighbor_count)
        }
    }
}

impl fmt::Display for LifeLikeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rulestring)
    }
}

impl std::str::FromStr for LifeLikeRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LifeLikeRule {
    type Error = RuleParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<LifeLikeRule> for String {
    fn from(rule: LifeLikeRule) -> Self {
        rule.rulestring
    }
}

fn mask_of(counts: &[u8]) -> u16 {
    counts
        .iter()
        .filter(|&&n| n <= MAX_NEIGHBOURS)
        .fold(0, |mask, &n| mask | (1 << n))
}

fn parse_counts(digits: &str) -> Result<u16, RuleParseError> {
    let mut mask = 0u16;
    for ch in digits.chars() {
        let n = ch
            .to_digit(10)
            .filter(|&d| d <= u32::from(MAX_NEIGHBOURS))
            .ok_or(RuleParseError::InvalidCount { ch })? as u8;
        if mask & (1 << n) != 0 {
            return Err(RuleParseError::DuplicateCount { count: n });
        }
        mask |= 1 << n;
    }
    Ok(mask)
}

fn format_rulestring(birth: u16, survival: u16) -> String {
    let digits = |mask: u16| -> String {
        (0..=MAX_NEIGHBOURS)
            .filter(|n| mask & (1 << n) != 0)
            .map(|n| char::from(b'0' + n))
            .collect()
    };
    format!("B{}/S{}", digits(birth), digits(survival))
}
