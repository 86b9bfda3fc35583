//! Informs whether symbols are terminal or nonterminal.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::symbol::Symbol;

/// A set of symbols in the form of a bit vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` with room for `num_syms` symbols, each
    /// set to `elem`.
    pub fn from_elem(num_syms: usize, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, elem),
        }
    }

    /// Set the entry for a symbol. The set grows to fit the symbol.
    pub fn set(&mut self, sym: Symbol, elem: bool) {
        let index = sym.usize();
        if index >= self.bit_vec.len() {
            self.bit_vec.grow(index + 1 - self.bit_vec.len(), false);
        }
        self.bit_vec.set(index, elem);
    }

    /// Checks whether a given symbol is in this set.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Returns the number of symbols in this set.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Checks whether this set has no symbols.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a SymbolBitSet {
    type Item = Symbol;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.has_sym(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}
