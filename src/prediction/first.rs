//! FIRST sets.

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolBitSet};

use super::{FirstSet, PerSymbolSets, PredictSets};

/// Collector of FIRST sets.
#[derive(Clone, Debug)]
pub struct FirstSets {
    map: PerSymbolSets<FirstSet>,
    terminal_set: SymbolBitSet,
    passes: usize,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// We compute the transitive closure of this relation by repeated passes
    /// over all rules, until a pass leaves every set unchanged.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = Self::initial(grammar);
        this.run(grammar);
        this
    }

    /// Maps every nonterminal to an empty FIRST set. No pass has run yet.
    pub fn initial(grammar: &Grammar) -> Self {
        FirstSets {
            map: grammar
                .nonterminals()
                .iter()
                .map(|&nonterminal| (nonterminal, FirstSet::new()))
                .collect(),
            terminal_set: grammar.terminal_set().clone(),
            passes: 0,
        }
    }

    /// Runs passes until one of them changes nothing.
    pub fn run(&mut self, grammar: &Grammar) {
        while self.pass(grammar) {}
        debug!("FIRST sets converged after {} passes", self.passes);
    }

    /// Runs one full pass over all rules of the grammar. Returns whether any
    /// FIRST set grew.
    pub fn pass(&mut self, grammar: &Grammar) -> bool {
        self.passes += 1;
        let mut changed = false;
        let mut lookahead = FirstSet::new();
        for rule in grammar.rules() {
            self.first_set_collect(&rule.rhs[..], &mut lookahead);
            let first_set = self
                .map
                .get_mut(&rule.lhs)
                .expect("every nonterminal has a FIRST set");
            changed |= first_set.union(&lookahead);
            lookahead.clear();
        }
        trace!("FIRST pass {}: changed = {}", self.passes, changed);
        changed
    }

    /// Returns the number of passes run so far, including the last pass,
    /// which changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn first_set(&self, nonterminal: Symbol) -> Option<&FirstSet> {
        self.map.get(&nonterminal)
    }

    /// Returns the FIRST set of any symbol. For a terminal, this is the
    /// terminal itself.
    pub fn first_of_symbol(&self, sym: Symbol) -> FirstSet {
        if self.terminal_set[sym] {
            FirstSet::terminal(sym)
        } else {
            self.map.get(&sym).cloned().unwrap_or_default()
        }
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// The result contains ε only if every symbol in the string is nullable,
    /// which includes the empty string.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> FirstSet {
        let mut result = FirstSet::new();
        self.first_set_collect(string, &mut result);
        result
    }

    /// Checks whether the symbol derives the empty string.
    pub fn is_nullable(&self, sym: Symbol) -> bool {
        self.map.get(&sym).map_or(false, |set| set.nullable)
    }

    /// Iterates over nullable nonterminals.
    pub fn nullable_symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.map
            .iter()
            .filter(|(_, set)| set.nullable)
            .map(|(&sym, _)| sym)
    }

    /// Compute a FIRST set.
    fn first_set_collect(&self, rhs: &[Symbol], lookahead: &mut FirstSet) {
        for &sym in rhs {
            if self.terminal_set[sym] {
                lookahead.terminals.insert(sym);
                return;
            }
            match self.map.get(&sym) {
                None => {
                    // Not a symbol of this grammar. Its FIRST set is empty.
                    return;
                }
                Some(first_set) => {
                    lookahead
                        .terminals
                        .extend(first_set.terminals.iter().copied());
                    if !first_set.nullable {
                        return;
                    }
                }
            }
        }
        lookahead.nullable = true;
    }
}

impl PredictSets for FirstSets {
    type Set = FirstSet;

    /// Returns a reference to FIRST sets.
    fn predict_sets(&self) -> &PerSymbolSets<FirstSet> {
        &self.map
    }
}
