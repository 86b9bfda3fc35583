#![allow(dead_code)]

use first_follow::{Cfg, FirstSets, FollowSets, Grammar, Symbol};

/// Builds a grammar from `(lhs, alternatives)` pairs. Every LHS is declared
/// a nonterminal and the first one is the start symbol. An empty
/// alternative is an ε-rule.
pub fn build(rules: &[(&str, &[&[&str]])]) -> Grammar {
    let mut cfg = Cfg::new();
    for &(lhs, _) in rules {
        cfg.nonterminal(lhs);
    }
    for &(lhs, alternatives) in rules {
        let lhs = cfg.nonterminal(lhs);
        for alternative in alternatives {
            let rhs: Vec<Symbol> = alternative.iter().map(|name| cfg.symbol(name)).collect();
            cfg.rule(lhs).rhs(rhs);
        }
    }
    let start = cfg.nonterminal(rules[0].0);
    cfg.set_start(start);
    cfg.into_grammar().expect("fixture grammar is well-formed")
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .symbol_of(name)
        .unwrap_or_else(|| panic!("no symbol named {:?}", name))
}

/// FIRST set of a nonterminal as sorted names, with "ε" for nullable.
pub fn first_names(grammar: &Grammar, first_sets: &FirstSets, name: &str) -> Vec<String> {
    let set = first_sets
        .first_set(sym(grammar, name))
        .expect("nonterminal has a FIRST set");
    let mut names: Vec<String> = set
        .terminals
        .iter()
        .map(|&t| grammar.name_of(t).to_string())
        .collect();
    if set.nullable {
        names.push("ε".to_string());
    }
    names.sort();
    names
}

/// FOLLOW set of a nonterminal as sorted names, with "$" for end of input.
pub fn follow_names(grammar: &Grammar, follow_sets: &FollowSets, name: &str) -> Vec<String> {
    let set = follow_sets
        .follow_set(sym(grammar, name))
        .expect("nonterminal has a FOLLOW set");
    let mut names: Vec<String> = set
        .terminals
        .iter()
        .map(|&t| grammar.name_of(t).to_string())
        .collect();
    if set.end_of_input {
        names.push("$".to_string());
    }
    names.sort();
    names
}

pub fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
