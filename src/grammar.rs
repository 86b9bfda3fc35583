//! Definitions of the context-free grammar types.
//!
//! A grammar is assembled in a [`Cfg`] and then validated into an immutable
//! [`Grammar`], which is what FIRST and FOLLOW computation works on.

use std::collections::BTreeMap;
use std::slice;

use log::debug;

use crate::error::MalformedGrammarError;
use crate::rule::builder::RuleBuilder;
use crate::rule::container::RuleContainer;
use crate::rule::CfgRule;
use crate::symbol::{Symbol, SymbolBitSet, SymbolKind, SymbolSource};
use crate::table::{EMPTY_STRING, END_OF_INPUT};

/// A context-free grammar under construction.
///
/// Nonterminals are declared explicitly. Any other symbol becomes a
/// terminal once it appears on some right-hand side.
#[derive(Clone, Debug, Default)]
pub struct Cfg {
    /// The symbol source.
    sym_source: SymbolSource,
    /// Declared nonterminals, in declaration order.
    nonterminals: Vec<Symbol>,
    /// The array of rules.
    rules: Vec<CfgRule>,
    /// Start symbol.
    start: Option<Symbol>,
}

/// A validated context-free grammar.
///
/// Construction infers the terminal alphabet and groups rules by their
/// left-hand side. The grammar cannot be modified afterwards.
#[derive(Clone, Debug)]
pub struct Grammar {
    sym_source: SymbolSource,
    nonterminals: Vec<Symbol>,
    nonterminal_set: SymbolBitSet,
    terminals: Vec<Symbol>,
    terminal_set: SymbolBitSet,
    rules: Vec<CfgRule>,
    rules_by_lhs: BTreeMap<Symbol, Vec<usize>>,
    start: Symbol,
}

impl Cfg {
    /// Creates an empty context-free grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol with the given text and declares it a nonterminal.
    pub fn nonterminal(&mut self, name: &str) -> Symbol {
        let sym = self.sym_source.intern(name);
        if !self.nonterminals.contains(&sym) {
            self.nonterminals.push(sym);
        }
        sym
    }

    /// Declares several nonterminals at once.
    pub fn nonterminals<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.nonterminal(name))
    }

    /// Returns the symbol with the given text, without declaring it.
    ///
    /// Unless it is declared a nonterminal elsewhere, the symbol is a
    /// terminal.
    pub fn symbol(&mut self, name: &str) -> Symbol {
        self.sym_source.intern(name)
    }

    /// Returns several symbols at once, without declaring them.
    pub fn symbols<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        self.sym_source.intern_all(names)
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_, Self> {
        RuleBuilder::new(self, lhs)
    }

    /// Assigns the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Returns the start symbol, if one was assigned.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Returns the nonterminals declared so far.
    pub fn declared_nonterminals(&self) -> &[Symbol] {
        &self.nonterminals[..]
    }

    /// Returns an iterator over the rules added so far.
    pub fn rules(&self) -> slice::Iter<'_, CfgRule> {
        self.rules.iter()
    }

    /// Returns an immutable reference to the grammar's symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Validates the grammar. See [`Grammar::new`].
    pub fn into_grammar(self) -> Result<Grammar, MalformedGrammarError> {
        Grammar::new(self)
    }
}

impl RuleContainer for Cfg {
    fn add_rule(&mut self, rule: CfgRule) {
        self.rules.push(rule);
    }
}

impl Grammar {
    /// Validates a grammar and infers its terminals.
    ///
    /// Fails if the start symbol is missing or not a declared nonterminal,
    /// if some rule has a left-hand side that is not a declared nonterminal,
    /// or if a declared nonterminal has no rules. The texts `ε` and `$` are
    /// reserved for the markers of FIRST and FOLLOW sets and cannot name a
    /// symbol of the grammar.
    pub fn new(cfg: Cfg) -> Result<Self, MalformedGrammarError> {
        let Cfg {
            sym_source,
            nonterminals,
            rules,
            start,
        } = cfg;

        let num_syms = sym_source.num_syms();
        for rule in &rules {
            for &sym in Some(&rule.lhs).into_iter().chain(rule.rhs.iter()) {
                if !sym_source.contains(sym) {
                    return Err(MalformedGrammarError::UnknownSymbol { id: sym.usize() });
                }
            }
        }
        let name = |sym: Symbol| sym_source.name_of(sym).to_string();
        let is_reserved =
            |sym: Symbol| matches!(sym_source.name_of(sym), EMPTY_STRING | END_OF_INPUT);

        for rule in &rules {
            for &sym in Some(&rule.lhs).into_iter().chain(rule.rhs.iter()) {
                if is_reserved(sym) {
                    return Err(MalformedGrammarError::ReservedSymbol { name: name(sym) });
                }
            }
        }

        let mut nonterminal_set = SymbolBitSet::from_elem(num_syms, false);
        for &sym in &nonterminals {
            nonterminal_set.set(sym, true);
        }

        let start = start.ok_or(MalformedGrammarError::MissingStart)?;
        if !sym_source.contains(start) {
            return Err(MalformedGrammarError::UnknownSymbol { id: start.usize() });
        }
        if is_reserved(start) {
            return Err(MalformedGrammarError::ReservedSymbol { name: name(start) });
        }
        if !nonterminal_set[start] {
            return Err(MalformedGrammarError::UndeclaredStart { start: name(start) });
        }

        let mut rules_by_lhs: BTreeMap<Symbol, Vec<usize>> = BTreeMap::new();
        for (idx, rule) in rules.iter().enumerate() {
            if !nonterminal_set[rule.lhs] {
                return Err(MalformedGrammarError::LhsNotNonterminal {
                    lhs: name(rule.lhs),
                });
            }
            rules_by_lhs.entry(rule.lhs).or_default().push(idx);
        }

        // Nonterminals referenced on some RHS are reported first.
        let referenced = rules.iter().flat_map(|rule| rule.rhs.iter().copied());
        for sym in referenced.chain(nonterminals.iter().copied()) {
            if nonterminal_set[sym] && !rules_by_lhs.contains_key(&sym) {
                return Err(MalformedGrammarError::UndefinedNonterminal {
                    nonterminal: name(sym),
                });
            }
        }

        let mut terminal_set = SymbolBitSet::from_elem(num_syms, false);
        let mut terminals = vec![];
        for rule in &rules {
            for &sym in rule.rhs.iter() {
                if !nonterminal_set[sym] && !terminal_set[sym] {
                    terminal_set.set(sym, true);
                    terminals.push(sym);
                }
            }
        }

        debug!(
            "validated grammar: {} nonterminals, {} terminals, {} rules, start `{}`",
            nonterminals.len(),
            terminals.len(),
            rules.len(),
            name(start)
        );

        Ok(Grammar {
            sym_source,
            nonterminals,
            nonterminal_set,
            terminals,
            terminal_set,
            rules,
            rules_by_lhs,
            start,
        })
    }

    /// Returns the start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Returns the nonterminals, in declaration order.
    pub fn nonterminals(&self) -> &[Symbol] {
        &self.nonterminals[..]
    }

    /// Returns the terminals, in the order they were discovered on
    /// right-hand sides.
    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals[..]
    }

    /// Returns the set of terminal symbols.
    pub fn terminal_set(&self) -> &SymbolBitSet {
        &self.terminal_set
    }

    /// Returns the set of nonterminal symbols.
    pub fn nonterminal_set(&self) -> &SymbolBitSet {
        &self.nonterminal_set
    }

    /// Checks whether the symbol is a terminal of this grammar.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminal_set[sym]
    }

    /// Checks whether the symbol is a nonterminal of this grammar.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.nonterminal_set[sym]
    }

    /// Tells whether the symbol is a terminal or a nonterminal. Returns
    /// `None` for symbols that are neither, such as symbols that were
    /// generated but never used on a right-hand side.
    pub fn kind(&self, sym: Symbol) -> Option<SymbolKind> {
        if self.is_nonterminal(sym) {
            Some(SymbolKind::Nonterminal)
        } else if self.is_terminal(sym) {
            Some(SymbolKind::Terminal)
        } else {
            None
        }
    }

    /// Returns an iterator over all rules, in insertion order.
    pub fn rules(&self) -> slice::Iter<'_, CfgRule> {
        self.rules.iter()
    }

    /// Returns an iterator over the rules with the given left-hand side.
    pub fn rules_for(&self, lhs: Symbol) -> impl Iterator<Item = &CfgRule> + '_ {
        self.rules_by_lhs
            .get(&lhs)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.rules[idx])
    }

    /// Collects a string of symbols into an ordered list, for FIRST
    /// computation over symbol strings.
    pub fn sequence<I>(&self, syms: I) -> Vec<Symbol>
    where
        I: IntoIterator<Item = Symbol>,
    {
        syms.into_iter().collect()
    }

    /// Returns the text of a symbol.
    pub fn name_of(&self, sym: Symbol) -> &str {
        self.sym_source.name_of(sym)
    }

    /// Looks up a symbol by its text.
    pub fn symbol_of(&self, name: &str) -> Option<Symbol> {
        self.sym_source.symbol_of(name)
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns an immutable reference to the grammar's symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }
}

impl TryFrom<Cfg> for Grammar {
    type Error = MalformedGrammarError;

    fn try_from(cfg: Cfg) -> Result<Self, Self::Error> {
        Grammar::new(cfg)
    }
}
