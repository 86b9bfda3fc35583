//! Abstraction for collections of rules.

use crate::rule::CfgRule;
use crate::symbol::Symbol;

/// Trait for rule containers that accept new rules.
pub trait RuleContainer {
    /// Adds a rule to the container.
    fn add_rule(&mut self, rule: CfgRule);

    /// Adds a rule built from its parts.
    fn add_rule_parts(&mut self, lhs: Symbol, rhs: &[Symbol]) {
        self.add_rule(CfgRule::new(lhs, rhs));
    }
}
