//! Ranked antecedent candidate sets.
//!
//! A short-lived accumulator built during one resolution pass: candidates in
//! discovery order, each with an integer rank that the ranking step bumps.
//! Never shared across resolution calls.

use crate::expr::DrtExpression;
use crate::symbols::Variable;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PossibleEventAntecedents {
    items: Vec<(Variable, i32)>,
}

impl PossibleEventAntecedents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, variable: Variable, rank: i32) {
        self.items.push((variable, rank));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> (Variable, i32) {
        self.items[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, i32)> + '_ {
        self.items.iter().copied()
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.items.iter().map(|(v, _)| *v)
    }

    /// Position of a candidate, by its variable.
    pub fn position(&self, variable: Variable) -> Option<usize> {
        self.items.iter().position(|(v, _)| *v == variable)
    }

    pub fn bump_at(&mut self, index: usize, delta: i32) {
        self.items[index].1 += delta;
    }

    /// A copy without the given variables.
    pub fn exclude(&self, variables: &[Variable]) -> Self {
        PossibleEventAntecedents {
            items: self
                .items
                .iter()
                .copied()
                .filter(|(v, _)| !variables.contains(v))
                .collect(),
        }
    }

    /// A copy with `variable` renamed to the replacement's variable, ranks
    /// preserved. Non-variable replacements leave the item unchanged.
    pub fn replace(&self, variable: Variable, expression: &DrtExpression) -> Self {
        let target = expression.variable();
        PossibleEventAntecedents {
            items: self
                .items
                .iter()
                .map(|(v, rank)| match target {
                    Some(t) if *v == variable => (t, *rank),
                    _ => (*v, *rank),
                })
                .collect(),
        }
    }
}

impl fmt::Display for PossibleEventAntecedents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self
            .items
            .iter()
            .map(|(v, rank)| format!("{v}({rank})"))
            .collect();
        write!(f, "[{}]", items.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_preserves_order_and_ranks() {
        let mut ants = PossibleEventAntecedents::new();
        ants.push(Variable::new("x"), 1);
        ants.push(Variable::new("y"), 2);
        ants.push(Variable::new("z"), 3);
        let filtered = ants.exclude(&[Variable::new("y")]);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get(0), (Variable::new("x"), 1));
        assert_eq!(filtered.get(1), (Variable::new("z"), 3));
    }

    #[test]
    fn rename_keeps_rank() {
        let mut ants = PossibleEventAntecedents::new();
        ants.push(Variable::new("x"), 2);
        let renamed = ants.replace(
            Variable::new("x"),
            &DrtExpression::Variable(Variable::new("y")),
        );
        assert_eq!(renamed.get(0), (Variable::new("y"), 2));
    }

    #[test]
    fn rendering() {
        let mut ants = PossibleEventAntecedents::new();
        ants.push(Variable::new("x"), 1);
        ants.push(Variable::new("y"), 0);
        assert_eq!(ants.to_string(), "[x(1),y(0)]");
    }
}
