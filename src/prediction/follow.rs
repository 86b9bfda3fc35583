//! FOLLOW sets.

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::symbol::Symbol;

use super::{FirstSets, FollowSet, PerSymbolSets, PredictSets};

/// FOLLOW sets.
#[derive(Clone, Debug)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets<FollowSet>,
    passes: usize,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    /// Returns FollowSets.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut this = Self::initial(grammar);
        this.run(grammar, first_sets);
        this
    }

    /// Maps the start symbol to `{$}` and every other nonterminal to an
    /// empty set. No pass has run yet.
    pub fn initial(grammar: &Grammar) -> Self {
        let map = grammar
            .nonterminals()
            .iter()
            .map(|&nonterminal| {
                let follow_set = if nonterminal == grammar.start() {
                    FollowSet::end_of_input()
                } else {
                    FollowSet::new()
                };
                (nonterminal, follow_set)
            })
            .collect();
        FollowSets { map, passes: 0 }
    }

    /// Runs passes until one of them changes nothing.
    pub fn run(&mut self, grammar: &Grammar, first_sets: &FirstSets) {
        while self.pass(grammar, first_sets) {}
        debug!("FOLLOW sets converged after {} passes", self.passes);
    }

    /// Runs one full pass over all rules of the grammar. Returns whether any
    /// FOLLOW set grew.
    ///
    /// Each right-hand side is scanned from the end. The `follow_set`
    /// accumulator holds what may follow the current position: FIRST of the
    /// suffix after it, plus FOLLOW of the LHS while that suffix is nullable.
    pub fn pass(&mut self, grammar: &Grammar, first_sets: &FirstSets) -> bool {
        self.passes += 1;
        let mut changed = false;
        for rule in grammar.rules() {
            let mut follow_set = self
                .map
                .get(&rule.lhs)
                .expect("every nonterminal has a FOLLOW set")
                .clone();

            for &sym in rule.rhs.iter().rev() {
                if grammar.is_terminal(sym) {
                    follow_set.clear();
                    follow_set.terminals.insert(sym);
                } else {
                    let followed = self
                        .map
                        .get_mut(&sym)
                        .expect("every nonterminal has a FOLLOW set");
                    changed |= followed.union(&follow_set);

                    match first_sets.first_set(sym) {
                        Some(first_set) => {
                            if !first_set.nullable {
                                follow_set.clear();
                            }
                            follow_set.union_first(first_set);
                        }
                        None => {
                            // FIRST sets of another grammar. The symbol's FIRST set is empty.
                            follow_set.clear();
                        }
                    }
                }
            }
        }
        trace!("FOLLOW pass {}: changed = {}", self.passes, changed);
        changed
    }

    /// Returns the number of passes run so far, including the last pass,
    /// which changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn follow_set(&self, nonterminal: Symbol) -> Option<&FollowSet> {
        self.map.get(&nonterminal)
    }
}

impl PredictSets for FollowSets {
    type Set = FollowSet;

    /// Returns a reference to FOLLOW sets.
    fn predict_sets(&self) -> &PerSymbolSets<FollowSet> {
        &self.map
    }
}
