//! The [`RuleSet`] trait.

/// Largest possible live-neighbour count in the Moore neighbourhood.
pub const MAX_NEIGHBOURS: u8 = 8;

/// The transition predicate of a Life-like automaton.
///
/// # Contract
///
/// - `should_cell_live()` MUST be pure: same inputs, same answer, no side
///   effects. The engine may call it from several threads and in any order.
/// - It MUST be total over `is_alive ∈ {true, false}` and
///   `neighbor_count ∈ 0..=8`.
/// - `should_cell_live(false, 0)` MUST be `false`. The engine only
///   evaluates alive cells and their neighbours, so a dead cell with no
///   live neighbours is never asked and stays dead.
///
/// # Object safety
///
/// This trait is object-safe; simulations store rules as
/// `Box<dyn RuleSet>`.
///
/// # Examples
///
/// HighLife as a closure (Conway plus birth on 6):
///
/// ```
/// use life_rules::RuleSet;
///
/// let highlife = |alive: bool, n: u8| if alive { n == 2 || n == 3 } else { n == 3 || n == 6 };
/// assert!(highlife.should_cell_live(false, 6));
/// assert!(!highlife.should_cell_live(true, 6));
/// ```
pub trait RuleSet: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str {
        "custom"
    }

    /// Whether a cell is alive in the next generation.
    fn should_cell_live(&self, is_alive: bool, neighbor_count: u8) -> bool;
}

impl<F> RuleSet for F
where
    F: Fn(bool, u8) -> bool + Send + Sync,
{
    fn should_cell_live(&self, is_alive: bool, neighbor_count: u8) -> bool {
        self(is_alive, neighbor_count)
    }
}
