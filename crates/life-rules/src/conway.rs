//! Conway's Game of Life rule (B3/S23).

use crate::rule::RuleSet;

/// The standard Conway rule.
///
/// 1. An alive cell with 2 or 3 live neighbours survives.
/// 2. A dead cell with exactly 3 live neighbours is born.
/// 3. Every other cell is dead in the next generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayRules;

impl RuleSet for ConwayRules {
    fn name(&self) -> &str {
        "conway"
    }

    fn should_cell_live(&self, is_alive: bool, neighbor_count: u8) -> bool {
        if is_alive {
            matches!(neighbor_count, 2 | 3)
        } else {
            neighbor_count == 3
        }
    }
}
