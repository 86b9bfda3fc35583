//! Values of FIRST and FOLLOW sets.

use std::collections::{BTreeMap, BTreeSet};

use crate::symbol::Symbol;

/// The representation of FIRST and FOLLOW tables.
pub type PerSymbolSets<V> = BTreeMap<Symbol, V>;

/// Access to a whole table of predict sets.
pub trait PredictSets {
    /// The type of sets in the table.
    type Set;

    /// Returns a reference to the sets, keyed by nonterminal.
    fn predict_sets(&self) -> &PerSymbolSets<Self::Set>;
}

/// A FIRST set: terminals that can begin a derivation, and whether the
/// empty string can be derived.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FirstSet {
    /// Terminals, ordered by symbol ID.
    pub terminals: BTreeSet<Symbol>,
    /// Whether ε is a member.
    pub nullable: bool,
}

/// A FOLLOW set: terminals that can appear right after a nonterminal, and
/// whether the end of input can.
///
/// There is no ε in a FOLLOW set.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FollowSet {
    /// Terminals, ordered by symbol ID.
    pub terminals: BTreeSet<Symbol>,
    /// Whether `$` is a member.
    pub end_of_input: bool,
}

impl FirstSet {
    /// Creates an empty FIRST set.
    pub fn new() -> Self {
        Self::default()
    }

    /// FIRST(ε), which is `{ε}`.
    pub fn empty_string() -> Self {
        FirstSet {
            terminals: BTreeSet::new(),
            nullable: true,
        }
    }

    /// FIRST of a terminal, which is the terminal itself.
    pub fn terminal(terminal: Symbol) -> Self {
        FirstSet {
            terminals: Some(terminal).into_iter().collect(),
            nullable: false,
        }
    }

    /// Checks whether the terminal is a member.
    pub fn contains(&self, terminal: Symbol) -> bool {
        self.terminals.contains(&terminal)
    }

    /// Checks whether ε is a member.
    pub fn has_empty(&self) -> bool {
        self.nullable
    }

    /// Number of members, counting ε.
    pub fn len(&self) -> usize {
        self.terminals.len() + self.nullable as usize
    }

    /// Checks whether there are no members, not even ε.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether every member of `other` is a member of this set.
    pub fn is_superset(&self, other: &FirstSet) -> bool {
        (self.nullable || !other.nullable) && self.terminals.is_superset(&other.terminals)
    }

    /// Adds all members of `other`, ε included. Returns whether this set
    /// grew.
    pub fn union(&mut self, other: &FirstSet) -> bool {
        let prev_cardinality = self.len();
        self.terminals.extend(other.terminals.iter().copied());
        self.nullable |= other.nullable;
        prev_cardinality != self.len()
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.terminals.clear();
        self.nullable = false;
    }
}

impl FollowSet {
    /// Creates an empty FOLLOW set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The FOLLOW set of a start symbol before any rule is considered,
    /// `{$}`.
    pub fn end_of_input() -> Self {
        FollowSet {
            terminals: BTreeSet::new(),
            end_of_input: true,
        }
    }

    /// Checks whether the terminal is a member.
    pub fn contains(&self, terminal: Symbol) -> bool {
        self.terminals.contains(&terminal)
    }

    /// Checks whether `$` is a member.
    pub fn has_end_of_input(&self) -> bool {
        self.end_of_input
    }

    /// Number of members, counting `$`.
    pub fn len(&self) -> usize {
        self.terminals.len() + self.end_of_input as usize
    }

    /// Checks whether there are no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether every member of `other` is a member of this set.
    pub fn is_superset(&self, other: &FollowSet) -> bool {
        (self.end_of_input || !other.end_of_input) && self.terminals.is_superset(&other.terminals)
    }

    /// Adds all members of `other`. Returns whether this set grew.
    pub fn union(&mut self, other: &FollowSet) -> bool {
        let prev_cardinality = self.len();
        self.terminals.extend(other.terminals.iter().copied());
        self.end_of_input |= other.end_of_input;
        prev_cardinality != self.len()
    }

    /// Adds the terminals of a FIRST set, leaving out ε. Returns whether
    /// this set grew.
    pub fn union_first(&mut self, first_set: &FirstSet) -> bool {
        let prev_cardinality = self.len();
        self.terminals.extend(first_set.terminals.iter().copied());
        prev_cardinality != self.len()
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.terminals.clear();
        self.end_of_input = false;
    }
}
