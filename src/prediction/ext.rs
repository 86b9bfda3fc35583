//! Extension trait that computes predict sets directly from a grammar.

use crate::grammar::Grammar;

use super::{FirstSets, FollowSets};

/// Computes FIRST and FOLLOW sets of a grammar.
pub trait GrammarSetsExt {
    /// Computes FIRST sets.
    fn first_sets(&self) -> FirstSets;
    /// Computes FIRST sets, then FOLLOW sets.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets from already computed FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
}

impl GrammarSetsExt for Grammar {
    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self)
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }
}
