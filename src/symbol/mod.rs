//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs.

mod repr;
pub mod set;
pub mod source;

use std::fmt;

pub use self::repr::Symbol;
use self::repr::SymbolRepr;
pub use self::set::SymbolBitSet;
pub use self::source::SymbolSource;

/// Tells terminals apart from nonterminals.
///
/// A symbol's kind is decided once, when a [`Grammar`](crate::Grammar) is
/// validated: declared nonterminals are nonterminals, and every other symbol
/// on some right-hand side is a terminal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum SymbolKind {
    /// An atomic token.
    Terminal,
    /// A syntactic category defined by its productions.
    Nonterminal,
}

impl Symbol {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.into()
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        let id: SymbolRepr = sym.into();
        id as usize
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolKind::Terminal => f.write_str("terminal"),
            SymbolKind::Nonterminal => f.write_str("nonterminal"),
        }
    }
}
