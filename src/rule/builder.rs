//! Grammar rules can be built with the builder pattern.

use crate::rule::container::RuleContainer;
use crate::symbol::Symbol;

/// The rule builder.
pub struct RuleBuilder<'a, C>
where
    C: RuleContainer,
{
    lhs: Symbol,
    rules: &'a mut C,
}

impl<'a, C> RuleBuilder<'a, C>
where
    C: RuleContainer,
{
    /// Creates a rule builder for rules with the given LHS.
    pub fn new(rules: &'a mut C, lhs: Symbol) -> Self {
        RuleBuilder { lhs, rules }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.lhs = lhs;
        self
    }

    /// Adds a rule alternative to the grammar. An empty `syms` adds the
    /// ε-rule for the current LHS.
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        self.rules.add_rule_parts(self.lhs, syms.as_ref());
        self
    }
}
