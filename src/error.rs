//! Errors raised while validating a grammar.

use std::error::Error;
use std::fmt;

/// Represents a grammar that cannot be analyzed.
///
/// Raised by [`Grammar::new`](crate::Grammar::new) before any FIRST or FOLLOW
/// set is computed. Symbols are reported by their text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedGrammarError {
    /// No start symbol was assigned.
    MissingStart,
    /// The start symbol is not a declared nonterminal.
    UndeclaredStart {
        /// Text of the start symbol.
        start: String,
    },
    /// A rule's left-hand side is not a declared nonterminal.
    LhsNotNonterminal {
        /// Text of the left-hand side symbol.
        lhs: String,
    },
    /// A declared nonterminal has no rule of its own.
    UndefinedNonterminal {
        /// Text of the nonterminal.
        nonterminal: String,
    },
    /// A rule or the start symbol uses `ε` or `$`, which only stand for
    /// the empty string and the end of input.
    ReservedSymbol {
        /// Text of the symbol.
        name: String,
    },
    /// A rule mentions a symbol that was not generated by the grammar's
    /// symbol source.
    UnknownSymbol {
        /// ID of the symbol.
        id: usize,
    },
}

impl fmt::Display for MalformedGrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MalformedGrammarError::MissingStart => {
                write!(f, "malformed grammar: no start symbol")
            }
            MalformedGrammarError::UndeclaredStart { start } => {
                write!(
                    f,
                    "malformed grammar: start symbol `{}` is not a declared nonterminal",
                    start
                )
            }
            MalformedGrammarError::LhsNotNonterminal { lhs } => {
                write!(
                    f,
                    "malformed grammar: left-hand side `{}` is not a declared nonterminal",
                    lhs
                )
            }
            MalformedGrammarError::UndefinedNonterminal { nonterminal } => {
                write!(
                    f,
                    "malformed grammar: nonterminal `{}` has no rules",
                    nonterminal
                )
            }
            MalformedGrammarError::ReservedSymbol { name } => {
                write!(f, "malformed grammar: `{}` is reserved and cannot be a symbol", name)
            }
            MalformedGrammarError::UnknownSymbol { id } => {
                write!(f, "malformed grammar: unknown symbol with ID {}", id)
            }
        }
    }
}

impl Error for MalformedGrammarError {}
