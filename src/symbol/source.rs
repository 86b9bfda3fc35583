//! Source of named symbols.

use std::collections::HashMap;
use std::rc::Rc;

use crate::symbol::Symbol;

/// A source of symbols. Every symbol carries the text it was created from.
///
/// Interning the same text twice yields the same symbol.
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    names: Vec<Rc<str>>,
    by_name: HashMap<Rc<str>, Symbol>,
}

impl SymbolSource {
    /// Creates a source of symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol named `name`, generating a new one if the name
    /// was never seen.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.by_name.get(name) {
            return sym;
        }
        let sym = Symbol::from(self.names.len());
        let name: Rc<str> = name.into();
        self.names.push(name.clone());
        self.by_name.insert(name, sym);
        sym
    }

    /// Interns several names at once.
    pub fn intern_all<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.intern(name))
    }

    /// Looks up a symbol by its text without generating one.
    pub fn symbol_of(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Returns the text of a symbol.
    ///
    /// # Panics
    ///
    /// Panics if the symbol was not generated by this source.
    pub fn name_of(&self, sym: Symbol) -> &str {
        &self.names[sym.usize()]
    }

    /// Checks whether the symbol was generated by this source.
    pub fn contains(&self, sym: Symbol) -> bool {
        sym.usize() < self.names.len()
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Iterates over all generated symbols, in generation order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> {
        (0..self.names.len()).map(Symbol::from)
    }
}
