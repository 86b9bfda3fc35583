//! Library for computing FIRST and FOLLOW sets of context-free grammars.
//!
//! A grammar is built in a [`Cfg`], validated into a [`Grammar`], then
//! analyzed with [`compute_first`] and [`compute_follow`]. The results can
//! be collected into a [`FirstFollowTable`] for presentation.
//!
//! ```
//! use first_follow::{Cfg, FirstFollowTable};
//!
//! let mut cfg = Cfg::new();
//! let [list, item] = cfg.nonterminals(["List", "Item"]);
//! let [comma, id] = cfg.symbols([",", "id"]);
//! cfg.rule(list).rhs([item, comma, list]).rhs([item])
//!    .rule(item).rhs([id]).rhs([]);
//! cfg.set_start(list);
//!
//! let grammar = cfg.into_grammar().unwrap();
//! let table = FirstFollowTable::compute(&grammar);
//! assert_eq!(table.first_of("Item").unwrap(), ["id", "ε"]);
//! assert_eq!(table.follow_of("Item").unwrap(), ["$", ","]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod error;
mod grammar;
pub mod prediction;
pub mod rule;
pub mod symbol;
pub mod table;

pub use crate::error::MalformedGrammarError;
pub use crate::grammar::{Cfg, Grammar};
pub use crate::prediction::{
    compute_first, compute_follow, FirstSet, FirstSets, FollowSet, FollowSets, GrammarSetsExt,
    PredictSets,
};
pub use crate::rule::CfgRule;
pub use crate::symbol::{Symbol, SymbolKind};
pub use crate::table::{FirstFollowTable, TableRow};
