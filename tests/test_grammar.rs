mod grammars;

use first_follow::{Cfg, CfgRule, Grammar, MalformedGrammarError, Symbol, SymbolKind};

#[test]
fn test_terminals_are_inferred() {
    let grammar = grammars::arith();
    let terminals: Vec<&str> = grammar
        .terminals()
        .iter()
        .map(|&sym| grammar.name_of(sym))
        .collect();
    // Discovery order over right-hand sides.
    assert_eq!(terminals, ["+", "*", "(", ")", "id"]);
    let nonterminals: Vec<&str> = grammar
        .nonterminals()
        .iter()
        .map(|&sym| grammar.name_of(sym))
        .collect();
    assert_eq!(nonterminals, ["E", "E'", "T", "T'", "F"]);

    let e = grammar.symbol_of("E").unwrap();
    let plus = grammar.symbol_of("+").unwrap();
    assert_eq!(grammar.kind(e), Some(SymbolKind::Nonterminal));
    assert_eq!(grammar.kind(plus), Some(SymbolKind::Terminal));
    assert!(grammar.is_terminal(plus));
    assert!(!grammar.is_terminal(e));
    assert!(grammar.is_nonterminal(e));
    assert_eq!(grammar.start(), e);
}

#[test]
fn test_unused_symbol_has_no_kind() {
    let mut cfg = Cfg::new();
    let s = cfg.nonterminal("S");
    let [x, unused] = cfg.symbols(["x", "unused"]);
    cfg.rule(s).rhs([x]);
    cfg.set_start(s);
    let grammar = cfg.into_grammar().unwrap();
    assert_eq!(grammar.kind(unused), None);
    assert_eq!(grammar.terminals(), &[x]);
}

#[test]
fn test_rules_grouped_by_lhs() {
    let grammar = grammars::arith();
    let e1 = grammar.symbol_of("E'").unwrap();
    let plus = grammar.symbol_of("+").unwrap();
    let t = grammar.symbol_of("T").unwrap();
    let rules: Vec<&CfgRule> = grammar.rules_for(e1).collect();
    assert_eq!(rules.len(), 2);
    assert_eq!(&rules[0].rhs[..], &[plus, t, e1]);
    assert!(rules[1].is_empty());
    assert_eq!(grammar.rules().count(), 8);
}

#[test]
fn test_sequence_keeps_order() {
    let grammar = grammars::arith();
    let [t, e1] = [grammar.symbol_of("T").unwrap(), grammar.symbol_of("E'").unwrap()];
    assert_eq!(grammar.sequence([t, e1]), vec![t, e1]);
    assert!(grammar.sequence(Vec::<Symbol>::new()).is_empty());
}

#[test]
fn test_missing_start() {
    let mut cfg = Cfg::new();
    let s = cfg.nonterminal("S");
    let x = cfg.symbol("x");
    cfg.rule(s).rhs([x]);
    assert_eq!(
        Grammar::new(cfg).unwrap_err(),
        MalformedGrammarError::MissingStart
    );
}

#[test]
fn test_undeclared_start() {
    let mut cfg = Cfg::new();
    let s = cfg.nonterminal("S");
    let x = cfg.symbol("x");
    cfg.rule(s).rhs([x]);
    cfg.set_start(x);
    assert_eq!(
        Grammar::new(cfg).unwrap_err(),
        MalformedGrammarError::UndeclaredStart {
            start: "x".to_string()
        }
    );
}

#[test]
fn test_lhs_not_nonterminal() {
    let mut cfg = Cfg::new();
    let s = cfg.nonterminal("S");
    let [x, y] = cfg.symbols(["x", "y"]);
    cfg.rule(s).rhs([x]).rule(x).rhs([y]);
    cfg.set_start(s);
    let err = cfg.into_grammar().unwrap_err();
    assert_eq!(
        err,
        MalformedGrammarError::LhsNotNonterminal {
            lhs: "x".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "malformed grammar: left-hand side `x` is not a declared nonterminal"
    );
}

#[test]
fn test_undefined_nonterminal_on_rhs() {
    let mut cfg = Cfg::new();
    let [s, a] = cfg.nonterminals(["S", "A"]);
    let x = cfg.symbol("x");
    cfg.rule(s).rhs([a, x]);
    cfg.set_start(s);
    assert_eq!(
        Grammar::try_from(cfg).unwrap_err(),
        MalformedGrammarError::UndefinedNonterminal {
            nonterminal: "A".to_string()
        }
    );
}

#[test]
fn test_start_without_rules() {
    let mut cfg = Cfg::new();
    let s = cfg.nonterminal("S");
    cfg.set_start(s);
    assert_eq!(
        cfg.into_grammar().unwrap_err(),
        MalformedGrammarError::UndefinedNonterminal {
            nonterminal: "S".to_string()
        }
    );
}

#[test]
fn test_unknown_symbol() {
    let mut other = Cfg::new();
    other.symbols(["a", "b", "c"]);
    let foreign = other.symbol("d");

    let mut cfg = Cfg::new();
    let s = cfg.nonterminal("S");
    cfg.rule(s).rhs([foreign]);
    cfg.set_start(s);
    assert_eq!(
        cfg.into_grammar().unwrap_err(),
        MalformedGrammarError::UnknownSymbol { id: 3 }
    );
}

#[test]
fn test_redeclaring_a_symbol_makes_it_a_nonterminal() {
    let mut cfg = Cfg::new();
    let s = cfg.nonterminal("S");
    let a = cfg.symbol("A");
    let x = cfg.symbol("x");
    assert_eq!(cfg.nonterminal("A"), a);
    cfg.rule(s).rhs([a]).rule(a).rhs([x]);
    cfg.set_start(s);
    assert_eq!(cfg.declared_nonterminals(), &[s, a]);
    let grammar = cfg.into_grammar().unwrap();
    assert_eq!(grammar.kind(a), Some(SymbolKind::Nonterminal));
    assert_eq!(grammar.terminals(), &[x]);
}

#[test]
fn test_reserved_names_on_rhs() {
    for reserved in ["ε", "$"] {
        let mut cfg = Cfg::new();
        let s = cfg.nonterminal("S");
        let marker = cfg.symbol(reserved);
        cfg.rule(s).rhs([marker, s]).rhs([]);
        cfg.set_start(s);
        let err = cfg.into_grammar().unwrap_err();
        assert_eq!(
            err,
            MalformedGrammarError::ReservedSymbol {
                name: reserved.to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            format!(
                "malformed grammar: `{}` is reserved and cannot be a symbol",
                reserved
            )
        );
    }
}

#[test]
fn test_reserved_name_as_start() {
    let mut cfg = Cfg::new();
    let start = cfg.nonterminal("ε");
    cfg.set_start(start);
    assert_eq!(
        cfg.into_grammar().unwrap_err(),
        MalformedGrammarError::ReservedSymbol {
            name: "ε".to_string()
        }
    );
}

#[test]
fn test_symbol_source_is_shared() {
    let mut cfg = Cfg::new();
    let s = cfg.nonterminal("S");
    let [x, unused] = cfg.symbols(["x", "unused"]);
    cfg.rule(s).rhs([x]);
    cfg.set_start(s);
    assert_eq!(cfg.sym_source().num_syms(), 3);
    assert_eq!(cfg.sym_source().name_of(unused), "unused");

    let grammar = cfg.into_grammar().unwrap();
    let symbols: Vec<Symbol> = grammar.sym_source().symbols().collect();
    assert_eq!(symbols, vec![s, x, unused]);
    assert_eq!(grammar.num_syms(), 3);
}
