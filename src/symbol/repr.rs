pub type SymbolRepr = u32;

/// A grammar symbol. Symbols are distinguished by their IDs, which are handed
/// out in the order their names are first seen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol(SymbolRepr);

impl From<SymbolRepr> for Symbol {
    #[inline]
    fn from(id: SymbolRepr) -> Self {
        Symbol(id)
    }
}

impl From<Symbol> for SymbolRepr {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.0
    }
}
