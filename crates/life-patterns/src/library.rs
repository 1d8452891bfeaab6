//! Builtin patterns.
//!
//! Every pattern is normalized: its bounding box starts at `(0, 0)`.
//! Look patterns up with [`get`], which ignores letter case and treats
//! `-`, `_` and spaces alike.

use crate::pattern::Pattern;

/// A named builtin pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Lookup name.
    pub name: &'static str,
    /// Generations per cycle, 1 for still lifes. `None` for patterns that
    /// never repeat in place.
    pub period: Option<usize>,
    /// `(row, col)` cells.
    pub cells: &'static [(i32, i32)],
}

impl LibraryEntry {
    /// The entry's cells as a [`Pattern`].
    pub fn pattern(&self) -> Pattern {
        Pattern::from_coords(self.cells)
    }
}

/// Every builtin pattern.
#[rustfmt::skip]
pub const ENTRIES: &[LibraryEntry] = &[
    LibraryEntry {
        name: "block",
        period: Some(1),
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    LibraryEntry {
        name: "blinker",
        period: Some(2),
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    LibraryEntry {
        name: "toad",
        period: Some(2),
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    LibraryEntry {
        name: "beacon",
        period: Some(2),
        cells: &[
            (0, 0), (0, 1), (1, 0), (1, 1),
            (2, 2), (2, 3), (3, 2), (3, 3),
        ],
    },
    LibraryEntry {
        name: "pulsar",
        period: Some(3),
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    LibraryEntry {
        name: "pentadecathlon",
        period: Some(15),
        cells: &[
            (0, 2), (0, 7),
            (1, 0), (1, 1), (1, 3), (1, 4), (1, 5), (1, 6), (1, 8), (1, 9),
            (2, 2), (2, 7),
        ],
    },
    LibraryEntry {
        name: "glider",
        period: None,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    LibraryEntry {
        name: "lwss",
        period: None,
        cells: &[
            (0, 1), (0, 4),
            (1, 0),
            (2, 0), (2, 4),
            (3, 0), (3, 1), (3, 2), (3, 3),
        ],
    },
    LibraryEntry {
        name: "r-pentomino",
        period: None,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    LibraryEntry {
        name: "glider-gun",
        period: None,
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// The library entry called `name`.
pub fn entry(name: &str) -> Option<&'static LibraryEntry> {
    let wanted = normalize_name(name);
    ENTRIES.iter().find(|e| e.name == wanted)
}

/// The pattern called `name`, if builtin.
pub fn get(name: &str) -> Option<Pattern> {
    entry(name).map(LibraryEntry::pattern)
}

/// Names of all builtin patterns, in library order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_is_forgiving() {
        assert_eq!(get("Glider"), get("glider"));
        assert_eq!(get("R_Pentomino"), get("r-pentomino"));
        assert_eq!(get(" glider gun "), get("glider-gun"));
        assert!(get("nope").is_none());
    }

    #[test]
    fn names_are_unique() {
        let unique: HashSet<_> = names().collect();
        assert_eq!(unique.len(), ENTRIES.len());
    }

    #[test]
    fn entries_are_normalized_and_duplicate_free() {
        for e in ENTRIES {
            let pat = e.pattern();
            assert_eq!(pat.len(), e.cells.len(), "{} has duplicates", e.name);
            assert_eq!(pat.normalized(), pat, "{} not at origin", e.name);
        }
    }

    #[test]
    fn known_sizes() {
        let sizes: Vec<(&str, usize)> = ENTRIES.iter().map(|e| (e.name, e.cells.len())).collect();
        assert!(sizes.contains(&("pulsar", 48)));
        assert!(sizes.contains(&("glider-gun", 36)));
        assert!(sizes.contains(&("pentadecathlon", 12)));
        assert!(sizes.contains(&("lwss", 9)));
        let gun = get("glider-gun").unwrap();
        assert_eq!((gun.height(), gun.width()), (9, 36));
    }
}
