#![allow(dead_code)]

use first_follow::{Cfg, Grammar};

/// The classic expression grammar without left recursion.
///
/// ```text
/// E  -> T E'
/// E' -> + T E' | ε
/// T  -> F T'
/// T' -> * F T' | ε
/// F  -> ( E ) | id
/// ```
pub fn arith() -> Grammar {
    let mut cfg = Cfg::new();
    let [e, e1, t, t1, f] = cfg.nonterminals(["E", "E'", "T", "T'", "F"]);
    let [plus, mul, lparen, rparen, id] = cfg.symbols(["+", "*", "(", ")", "id"]);
    cfg.rule(e)
        .rhs([t, e1])
        .rule(e1)
        .rhs([plus, t, e1])
        .rhs([])
        .rule(t)
        .rhs([f, t1])
        .rule(t1)
        .rhs([mul, f, t1])
        .rhs([])
        .rule(f)
        .rhs([lparen, e, rparen])
        .rhs([id]);
    cfg.set_start(e);
    cfg.into_grammar().unwrap()
}

/// `A -> A a | b`
pub fn left_recursive() -> Grammar {
    let mut cfg = Cfg::new();
    let a = cfg.nonterminal("A");
    let [a_term, b_term] = cfg.symbols(["a", "b"]);
    cfg.rule(a).rhs([a, a_term]).rhs([b_term]);
    cfg.set_start(a);
    cfg.into_grammar().unwrap()
}

/// `A -> B C`, `B -> ε`, `C -> c`
pub fn nullable_chain() -> Grammar {
    let mut cfg = Cfg::new();
    let [a, b, c] = cfg.nonterminals(["A", "B", "C"]);
    let c_term = cfg.symbol("c");
    cfg.rule(a).rhs([b, c]).rule(b).rhs([]).rule(c).rhs([c_term]);
    cfg.set_start(a);
    cfg.into_grammar().unwrap()
}

/// A chain `N0 -> N1`, `N1 -> N2`, ..., `N{n-1} -> t`, with rules listed
/// from the start symbol down, so FIRST information travels against rule
/// order.
pub fn chain(n: usize) -> Grammar {
    let mut cfg = Cfg::new();
    let nonterminals: Vec<_> = (0..n)
        .map(|i| cfg.nonterminal(&format!("N{}", i)))
        .collect();
    let t = cfg.symbol("t");
    for pair in nonterminals.windows(2) {
        cfg.rule(pair[0]).rhs([pair[1]]);
    }
    cfg.rule(nonterminals[n - 1]).rhs([t]);
    cfg.set_start(nonterminals[0]);
    cfg.into_grammar().unwrap()
}

/// Mutually dependent FOLLOW sets: `S -> A x`, `A -> b B | ε`, `B -> c A | ε`.
pub fn mutual_follow() -> Grammar {
    let mut cfg = Cfg::new();
    let [s, a, b] = cfg.nonterminals(["S", "A", "B"]);
    let [x, b_term, c_term] = cfg.symbols(["x", "b", "c"]);
    cfg.rule(s)
        .rhs([a, x])
        .rule(a)
        .rhs([b_term, b])
        .rhs([])
        .rule(b)
        .rhs([c_term, a])
        .rhs([]);
    cfg.set_start(s);
    cfg.into_grammar().unwrap()
}
