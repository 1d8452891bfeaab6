//! Rule predicates for Life-like cellular automata.
//!
//! The [`RuleSet`] trait is the single extension point deciding a cell's
//! next state from its current state and live-neighbour count. The engine
//! and grid never look past it, so swapping automata means swapping one
//! value.
//!
//! - [`ConwayRules`]: the standard B3/S23 rule.
//! - [`LifeLikeRule`]: any outer-totalistic rule, parsed from a
//!   `B…/S…` rulestring.
//! - Any `Fn(bool, u8) -> bool + Send + Sync` closure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod conway;
pub mod error;
pub mod life_like;
pub mod rule;

pub use conway::ConwayRules;
pub use error::RuleParseError;
pub use life_like::LifeLikeRule;
pub use rule::{RuleSet, MAX_NEIGHBOURS};
