//! A read-only view of computed FIRST and FOLLOW sets, keyed by nonterminal
//! name.

use std::fmt;

use crate::grammar::Grammar;
use crate::prediction::{compute_first, compute_follow, FirstSets, FollowSets};
use crate::symbol::Symbol;

/// Text of ε in rendered FIRST sets.
pub const EMPTY_STRING: &str = "ε";
/// Text of the end-of-input marker in rendered FOLLOW sets.
pub const END_OF_INPUT: &str = "$";

/// FIRST and FOLLOW sets of one nonterminal, as sorted lists of symbol
/// names.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableRow {
    /// Name of the nonterminal.
    pub nonterminal: String,
    /// Members of FIRST, with `ε` when the nonterminal is nullable.
    pub first: Vec<String>,
    /// Members of FOLLOW, with `$` when the end of input may follow.
    pub follow: Vec<String>,
}

/// FIRST and FOLLOW sets of every nonterminal, in declaration order.
///
/// Within a set, names are sorted by their text.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstFollowTable {
    start: String,
    nonterminals: Vec<String>,
    terminals: Vec<String>,
    rows: Vec<TableRow>,
}

impl FirstFollowTable {
    /// Collects finished FIRST and FOLLOW sets of the grammar.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets, follow_sets: &FollowSets) -> Self {
        let names = |syms: &[Symbol]| -> Vec<String> {
            syms.iter()
                .map(|&sym| grammar.name_of(sym).to_string())
                .collect()
        };
        let rows = grammar
            .nonterminals()
            .iter()
            .map(|&nonterminal| {
                let mut first = vec![];
                if let Some(set) = first_sets.first_set(nonterminal) {
                    first.extend(set.terminals.iter().map(|&t| grammar.name_of(t).to_string()));
                    if set.nullable {
                        first.push(EMPTY_STRING.to_string());
                    }
                }
                let mut follow = vec![];
                if let Some(set) = follow_sets.follow_set(nonterminal) {
                    follow.extend(set.terminals.iter().map(|&t| grammar.name_of(t).to_string()));
                    if set.end_of_input {
                        follow.push(END_OF_INPUT.to_string());
                    }
                }
                first.sort();
                follow.sort();
                TableRow {
                    nonterminal: grammar.name_of(nonterminal).to_string(),
                    first,
                    follow,
                }
            })
            .collect();

        FirstFollowTable {
            start: grammar.name_of(grammar.start()).to_string(),
            nonterminals: names(grammar.nonterminals()),
            terminals: names(grammar.terminals()),
            rows,
        }
    }

    /// Computes FIRST and FOLLOW sets of the grammar and collects them.
    pub fn compute(grammar: &Grammar) -> Self {
        let first_sets = compute_first(grammar);
        let follow_sets = compute_follow(grammar, &first_sets);
        Self::new(grammar, &first_sets, &follow_sets)
    }

    /// Returns the name of the start symbol.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns nonterminal names, in declaration order.
    pub fn nonterminals(&self) -> &[String] {
        &self.nonterminals[..]
    }

    /// Returns terminal names, in discovery order.
    pub fn terminals(&self) -> &[String] {
        &self.terminals[..]
    }

    /// Returns one row per nonterminal, in declaration order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows[..]
    }

    /// Returns the row of the named nonterminal.
    pub fn row(&self, nonterminal: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.nonterminal == nonterminal)
    }

    /// Returns the FIRST set of the named nonterminal.
    pub fn first_of(&self, nonterminal: &str) -> Option<&[String]> {
        self.row(nonterminal).map(|row| &row.first[..])
    }

    /// Returns the FOLLOW set of the named nonterminal.
    pub fn follow_of(&self, nonterminal: &str) -> Option<&[String]> {
        self.row(nonterminal).map(|row| &row.follow[..])
    }
}

struct SetDisplay<'a>(&'a [String]);

impl fmt::Display for SetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("{ }")
        } else {
            write!(f, "{{ {} }}", self.0.join(", "))
        }
    }
}

/// Renders `FIRST(X) = { a, b, ε }` lines for all nonterminals, a blank
/// line, then `FOLLOW(X) = { $, a }` lines.
impl fmt::Display for FirstFollowTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "FIRST({}) = {}", row.nonterminal, SetDisplay(&row.first))?;
        }
        writeln!(f)?;
        for row in &self.rows {
            writeln!(f, "FOLLOW({}) = {}", row.nonterminal, SetDisplay(&row.follow))?;
        }
        Ok(())
    }
}
