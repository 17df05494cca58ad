//! Discourse Representation Structures with referent feature sets.
//!
//! A [`Drs`] is a scope: an ordered list of discourse referents (insertion
//! order is scope order, which "introduced earlier" checks depend on) and an
//! ordered list of conditions. Referents may carry an ordered feature set
//! (e.g. gender before number); a referent absent from the map has no
//! features. A plain DRS is simply one with an empty feature map, always
//! built fresh per instance.

use crate::error::DrtError;
use crate::expr::{Bindings, DrtExpression};
use crate::symbols::{self, Symbol, Variable};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::ops::Add;

/// Ordered sequence of feature values attached to one referent.
pub type FeatureSet = Vec<Symbol>;
/// Referent-to-features mapping. Only referents that carry features appear.
pub type FeatureMap = FxHashMap<Variable, FeatureSet>;

#[derive(Debug, Clone)]
pub struct Drs {
    pub refs: Vec<Variable>,
    pub conds: Vec<DrtExpression>,
    pub features: FeatureMap,
}

impl Drs {
    pub fn new(refs: Vec<Variable>, conds: Vec<DrtExpression>) -> Self {
        Drs {
            refs,
            conds,
            features: FeatureMap::default(),
        }
    }

    pub fn with_features(refs: Vec<Variable>, conds: Vec<DrtExpression>, features: FeatureMap) -> Self {
        Drs {
            refs,
            conds,
            features,
        }
    }

    pub fn is_featured(&self) -> bool {
        !self.features.is_empty()
    }

    /// The feature map with `from`'s entry carried over to `to`.
    fn move_feature(&self, from: Variable, to: Variable) -> FeatureMap {
        let mut features = self.features.clone();
        if let Some(set) = features.remove(&from) {
            features.insert(to, set);
        }
        features
    }

    /// Rename a bound referent, rewriting conditions and the feature map.
    fn rename_ref(&self, from: Variable, to: Variable) -> Drs {
        let to_expr = DrtExpression::Variable(to);
        Drs {
            refs: self
                .refs
                .iter()
                .map(|r| if *r == from { to } else { *r })
                .collect(),
            conds: self
                .conds
                .iter()
                .map(|c| c.replace(from, &to_expr, true))
                .collect(),
            features: self.move_feature(from, to),
        }
    }

    /// Capture-avoiding substitution of `expression` for `variable`.
    ///
    /// If `variable` is bound here this is a no-op unless `replace_bound`,
    /// in which case the referent is renamed to the expression's variable
    /// and its feature entry carried forward. If `variable` is free here,
    /// any referent also free in the replacement is alpha-renamed to a fresh
    /// variable first, so the incoming expression cannot be captured.
    pub fn replace(
        &self,
        variable: Variable,
        expression: &DrtExpression,
        replace_bound: bool,
    ) -> Drs {
        if let Some(i) = self.refs.iter().position(|r| *r == variable) {
            if !replace_bound {
                return self.clone();
            }
            let target = expression.variable().unwrap_or(variable);
            let mut refs = self.refs.clone();
            refs[i] = target;
            Drs {
                refs,
                conds: self
                    .conds
                    .iter()
                    .map(|c| c.replace(variable, expression, true))
                    .collect(),
                features: self.move_feature(variable, target),
            }
        } else {
            let free_in_expression = expression.free();
            let mut renamed = self.clone();
            let clashing: Vec<Variable> = renamed
                .refs
                .iter()
                .copied()
                .filter(|r| free_in_expression.contains(r))
                .collect();
            for r in clashing {
                renamed = renamed.rename_ref(r, symbols::fresh(r));
            }
            Drs {
                refs: renamed.refs,
                conds: renamed
                    .conds
                    .iter()
                    .map(|c| c.replace(variable, expression, replace_bound))
                    .collect(),
                features: renamed.features,
            }
        }
    }

    /// Referents bound by this DRS; with `recursive`, also those of nested
    /// scopes inside the conditions.
    pub fn referents(&self, recursive: bool) -> Vec<Variable> {
        let mut refs = self.refs.clone();
        if recursive {
            for cond in &self.conds {
                refs.extend(cond.referents(true));
            }
        }
        refs
    }

    pub(crate) fn collect_free(&self, out: &mut FxHashSet<Variable>) {
        let mut inner = FxHashSet::default();
        for cond in &self.conds {
            cond.collect_free(&mut inner);
        }
        for r in &self.refs {
            inner.remove(r);
        }
        out.extend(inner);
    }

    pub fn simplify(&self) -> Drs {
        Drs {
            refs: self.refs.clone(),
            conds: self.conds.iter().map(|c| c.simplify()).collect(),
            features: self.features.clone(),
        }
    }

    pub fn substitute_bindings(&self, bindings: &Bindings) -> Result<Drs, DrtError> {
        Ok(Drs {
            refs: self.refs.clone(),
            conds: self
                .conds
                .iter()
                .map(|c| c.substitute_bindings(bindings))
                .collect::<Result<_, _>>()?,
            features: self.features.clone(),
        })
    }

    /// Resolve every condition, with this DRS appended to the ancestor trail
    /// so nested pronoun resolution can see it.
    pub fn resolve(&self, trail: &[&Drs]) -> Result<Drs, DrtError> {
        let mut inner: Vec<&Drs> = trail.to_vec();
        inner.push(self);
        Ok(Drs {
            refs: self.refs.clone(),
            conds: self
                .conds
                .iter()
                .map(|c| c.resolve(&inner))
                .collect::<Result<_, _>>()?,
            features: self.features.clone(),
        })
    }
}

/// `D1 + D2` builds the merge node directly on the data type.
impl Add for Drs {
    type Output = DrtExpression;

    fn add(self, other: Drs) -> DrtExpression {
        DrtExpression::Concatenation(
            Box::new(DrtExpression::Drs(self)),
            Box::new(DrtExpression::Drs(other)),
        )
    }
}

/// Merge two concatenated expressions. Both sides are simplified first; if
/// both reduce to DRSs, every referent bound (recursively) in both sides is
/// alpha-renamed to a fresh variable inside `second`, then referents and
/// conditions are concatenated and the feature maps unioned with `second`
/// winning on key collision. Otherwise the concatenation node is rebuilt.
/// A referent with no entry in either map stays featureless.
pub(crate) fn simplify_concatenation(
    first: &DrtExpression,
    second: &DrtExpression,
) -> DrtExpression {
    let first = first.simplify();
    let second = second.simplify();
    match (first, second) {
        (DrtExpression::Drs(first), DrtExpression::Drs(second)) => {
            let bound_in_first: FxHashSet<Variable> =
                first.referents(true).into_iter().collect();
            let mut second = second;
            for r in second.referents(true) {
                if bound_in_first.contains(&r) {
                    let renamed = DrtExpression::Variable(symbols::fresh(r));
                    second = second.replace(r, &renamed, true);
                }
            }
            let mut refs = first.refs;
            refs.extend(second.refs);
            let mut conds = first.conds;
            conds.extend(second.conds);
            let mut features = first.features;
            features.extend(second.features);
            DrtExpression::Drs(Drs {
                refs,
                conds,
                features,
            })
        }
        (first, second) => {
            DrtExpression::Concatenation(Box::new(first), Box::new(second))
        }
    }
}

impl PartialEq for Drs {
    /// Equality modulo alphabetic variance: rename the other DRS's referents
    /// pairwise onto ours, then compare conditions and feature maps. Feature
    /// map comparison is independent of iteration order.
    fn eq(&self, other: &Self) -> bool {
        if self.refs.len() != other.refs.len() {
            return false;
        }
        let other_refs = other.refs.clone();
        let mut converted = other.clone();
        for (r1, r2) in self.refs.iter().zip(other_refs) {
            converted = converted.replace(r2, &DrtExpression::Variable(*r1), true);
        }
        self.conds == converted.conds && self.features == converted.features
    }
}

impl fmt::Display for Drs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut refs = Vec::with_capacity(self.refs.len());
        for r in &self.refs {
            match self.features.get(r) {
                Some(set) => {
                    let values: Vec<&str> =
                        set.iter().map(|s| symbols::resolve(*s)).collect();
                    refs.push(format!("{}{{{}}}", r, values.join(",")));
                }
                None => refs.push(r.to_string()),
            }
        }
        let conds: Vec<String> = self.conds.iter().map(|c| c.to_string()).collect();
        write!(f, "([{}],[{}])", refs.join(","), conds.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Application;
    use crate::symbols::intern;

    fn var(name: &str) -> Variable {
        Variable::new(name)
    }

    fn pred(name: &str, arg: &str) -> DrtExpression {
        DrtExpression::Application(Application::new(
            DrtExpression::Constant(intern(name)),
            DrtExpression::Variable(var(arg)),
        ))
    }

    fn features(entries: &[(&str, &[&str])]) -> FeatureMap {
        let mut map = FeatureMap::default();
        for (name, values) in entries {
            map.insert(var(name), values.iter().map(|v| intern(v)).collect());
        }
        map
    }

    fn merge(a: Drs, b: Drs) -> Drs {
        match (a + b).simplify() {
            DrtExpression::Drs(d) => d,
            other => panic!("merge did not produce a DRS: {other}"),
        }
    }

    #[test]
    fn featured_rendering() {
        let d = Drs::with_features(
            vec![var("x"), var("y")],
            vec![pred("boy", "x")],
            features(&[("x", &["masc", "sg"])]),
        );
        assert_eq!(d.to_string(), "([x{masc,sg},y],[boy(x)])");
    }

    #[test]
    fn alpha_equality_with_features() {
        let d1 = Drs::with_features(
            vec![var("x")],
            vec![pred("boy", "x")],
            features(&[("x", &["masc", "sg"])]),
        );
        let d2 = Drs::with_features(
            vec![var("y")],
            vec![pred("boy", "y")],
            features(&[("y", &["masc", "sg"])]),
        );
        assert_eq!(d1, d2);
    }

    #[test]
    fn feature_order_matters() {
        let d1 = Drs::with_features(
            vec![var("x")],
            vec![],
            features(&[("x", &["masc", "sg"])]),
        );
        let d2 = Drs::with_features(
            vec![var("x")],
            vec![],
            features(&[("x", &["sg", "masc"])]),
        );
        assert_ne!(d1, d2);
    }

    #[test]
    fn plain_and_featured_boxes_differ() {
        let plain = Drs::new(vec![var("x")], vec![]);
        let featured = Drs::with_features(
            vec![var("x")],
            vec![],
            features(&[("x", &["masc", "sg"])]),
        );
        assert_ne!(plain, featured);
    }

    #[test]
    fn replace_bound_is_noop_without_replace_bound_flag() {
        let d = Drs::new(vec![var("x")], vec![pred("boy", "x")]);
        let replaced = d.replace(var("x"), &DrtExpression::Variable(var("y")), false);
        assert_eq!(replaced.refs, vec![var("x")]);
        assert_eq!(replaced.conds, vec![pred("boy", "x")]);
    }

    #[test]
    fn replace_bound_renames_and_carries_features() {
        let d = Drs::with_features(
            vec![var("x")],
            vec![pred("boy", "x")],
            features(&[("x", &["masc", "sg"])]),
        );
        let replaced = d.replace(var("x"), &DrtExpression::Variable(var("y")), true);
        assert_eq!(replaced.refs, vec![var("y")]);
        assert_eq!(replaced.conds, vec![pred("boy", "y")]);
        assert_eq!(replaced.features, features(&[("y", &["masc", "sg"])]));
    }

    #[test]
    fn replace_free_avoids_capture() {
        // substituting x for the free u must first rename the bound x
        let d = Drs::new(
            vec![var("x")],
            vec![pred("boy", "x"), pred("own", "u")],
        );
        let replaced = d.replace(var("u"), &DrtExpression::Variable(var("x")), false);
        assert_eq!(replaced.refs.len(), 1);
        assert_ne!(replaced.refs[0], var("x"));
        // the incoming x stays free
        assert!(replaced
            .conds
            .iter()
            .any(|c| c == &pred("own", "x")));
        // the bound occurrence followed the rename
        let renamed = replaced.refs[0];
        assert!(replaced
            .conds
            .iter()
            .any(|c| c == &pred("boy", renamed.name())));
    }

    #[test]
    fn merge_unions_feature_maps() {
        let a = Drs::with_features(
            vec![var("x")],
            vec![],
            features(&[("x", &["masc", "sg"])]),
        );
        let b = Drs::with_features(
            vec![var("y")],
            vec![],
            features(&[("y", &["fem", "sg"])]),
        );
        let merged = merge(a, b);
        assert_eq!(merged.refs, vec![var("x"), var("y")]);
        assert_eq!(
            merged.features,
            features(&[("x", &["masc", "sg"]), ("y", &["fem", "sg"])])
        );
    }

    #[test]
    fn merge_renames_colliding_referents() {
        let a = Drs::with_features(
            vec![var("x")],
            vec![pred("boy", "x")],
            features(&[("x", &["masc", "sg"])]),
        );
        let b = Drs::with_features(
            vec![var("x")],
            vec![pred("girl", "x")],
            features(&[("x", &["fem", "sg"])]),
        );
        let merged = merge(a, b);
        assert_eq!(merged.refs.len(), 2);
        assert_eq!(merged.refs[0], var("x"));
        let renamed = merged.refs[1];
        assert_ne!(renamed, var("x"));
        assert_eq!(
            merged.features.get(&var("x")),
            Some(&vec![intern("masc"), intern("sg")])
        );
        assert_eq!(
            merged.features.get(&renamed),
            Some(&vec![intern("fem"), intern("sg")])
        );
        assert!(merged.conds.contains(&pred("boy", "x")));
        assert!(merged.conds.contains(&pred("girl", renamed.name())));
    }

    #[test]
    fn merge_with_one_featured_side_keeps_its_map() {
        let a = Drs::new(vec![var("x")], vec![pred("boy", "x")]);
        let b = Drs::with_features(
            vec![var("y")],
            vec![],
            features(&[("y", &["fem", "sg"])]),
        );
        let merged = merge(a, b);
        assert_eq!(merged.features, features(&[("y", &["fem", "sg"])]));
    }

    #[test]
    fn merge_renames_nested_collisions() {
        // x is bound one level down on the right side; still a collision
        let inner = Drs::new(vec![var("x")], vec![pred("cat", "x")]);
        let a = Drs::new(vec![var("x")], vec![pred("boy", "x")]);
        let b = Drs::new(
            vec![var("y")],
            vec![DrtExpression::Negation(Box::new(DrtExpression::Drs(inner)))],
        );
        let merged = merge(a, b);
        match &merged.conds[1] {
            DrtExpression::Negation(term) => match term.as_ref() {
                DrtExpression::Drs(d) => assert_ne!(d.refs[0], var("x")),
                other => panic!("expected a nested DRS, got {other}"),
            },
            other => panic!("expected a negation, got {other}"),
        }
    }

    #[test]
    fn unsimplifiable_concatenation_is_rebuilt() {
        let a = Drs::new(vec![var("x")], vec![]);
        let combined = DrtExpression::Concatenation(
            Box::new(DrtExpression::Drs(a)),
            Box::new(DrtExpression::Variable(var("p"))),
        );
        assert!(matches!(
            combined.simplify(),
            DrtExpression::Concatenation(_, _)
        ));
    }
}
