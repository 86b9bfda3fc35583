//! Prediction for predictive parsers: FIRST and FOLLOW set computation.

mod ext;
mod first;
mod follow;
mod sets;

pub use self::ext::GrammarSetsExt;
pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::sets::{FirstSet, FollowSet, PerSymbolSets, PredictSets};

use crate::grammar::Grammar;

/// Computes the FIRST set of every nonterminal in the grammar.
pub fn compute_first(grammar: &Grammar) -> FirstSets {
    FirstSets::new(grammar)
}

/// Computes the FOLLOW set of every nonterminal in the grammar, given its
/// FIRST sets.
pub fn compute_follow(grammar: &Grammar, first_sets: &FirstSets) -> FollowSets {
    FollowSets::new(grammar, first_sets)
}
