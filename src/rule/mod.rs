//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single symbol on its left-hand side and an array of symbols
//! on its right-hand side. An empty right-hand side derives the empty string.

pub mod builder;
pub mod container;

use std::rc::Rc;

use crate::symbol::Symbol;

/// Typical grammar rule representation.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct CfgRule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Rc<[Symbol]>,
}

impl CfgRule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: impl AsRef<[Symbol]>) -> Self {
        CfgRule {
            lhs,
            rhs: rhs.as_ref().into(),
        }
    }

    /// Checks whether this is an ε-rule, `A → ε`.
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}
