//! The DRT expression tree.
//!
//! One closed enum covers the whole language: lambda-calculus scaffolding
//! (variables, constants, application, abstraction), logical connectives,
//! DRS boxes and their concatenation, and the two special leaves the
//! anaphora machinery needs (feature-annotated constants and ranked
//! antecedent sets). Application nodes are classified once, at construction,
//! into pronoun/event/role/plain kinds instead of being re-inspected at
//! every use site.
//!
//! All operations are pure: `replace`, `simplify`, `substitute_bindings` and
//! `resolve` build new trees and leave their input untouched.

use crate::antecedents::PossibleEventAntecedents;
use crate::drs::{self, Drs, FeatureMap};
use crate::error::DrtError;
use crate::symbols::{self, Symbol, Variable};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Reserved predicate name marking a plain anaphoric pronoun condition.
pub const PRONOUN: &str = "PRO";
/// Reserved predicate name marking a reflexive pronoun condition.
pub const REFLEXIVE_PRONOUN: &str = "REFPRO";
/// Reserved predicate name marking a possessive pronoun condition.
pub const POSSESSIVE_PRONOUN: &str = "POSPRO";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PronounKind {
    Anaphoric,
    Reflexive,
    Possessive,
}

/// Shape of a function application, fixed when the node is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Plain,
    /// A predicate applied to an event referent, e.g. `walk(e)`.
    Event,
    /// A role predication `Role(e)(x)`: participant `x` fills `Role` in
    /// event `e`. Also reached by the curried form `Role(e,x)`.
    Role,
    /// `PRO(x)` / `REFPRO(x)` / `POSPRO(x)` over an individual referent.
    Pronoun(PronounKind),
}

#[derive(Debug, Clone)]
pub struct Application {
    pub kind: AppKind,
    pub function: Box<DrtExpression>,
    pub argument: Box<DrtExpression>,
}

impl Application {
    /// Build an application, dispatching on shape. Priority order: pronoun
    /// names over individual referents, then event arguments, then role
    /// applications (function is itself an event application), then plain.
    pub fn new(function: DrtExpression, argument: DrtExpression) -> Self {
        let kind = Self::classify(&function, &argument);
        Application {
            kind,
            function: Box::new(function),
            argument: Box::new(argument),
        }
    }

    fn classify(function: &DrtExpression, argument: &DrtExpression) -> AppKind {
        if let DrtExpression::Variable(v) = argument {
            if v.is_individual() {
                match function.leaf_name() {
                    Some(PRONOUN) => return AppKind::Pronoun(PronounKind::Anaphoric),
                    Some(REFLEXIVE_PRONOUN) => return AppKind::Pronoun(PronounKind::Reflexive),
                    Some(POSSESSIVE_PRONOUN) => return AppKind::Pronoun(PronounKind::Possessive),
                    _ => {}
                }
            }
            if v.is_event() {
                return AppKind::Event;
            }
        }
        if let DrtExpression::Application(inner) = function {
            if inner.kind == AppKind::Event {
                return AppKind::Role;
            }
        }
        AppKind::Plain
    }

    pub fn is_pronoun(&self) -> bool {
        matches!(self.kind, AppKind::Pronoun(_))
    }

    pub fn pronoun_kind(&self) -> Option<PronounKind> {
        match self.kind {
            AppKind::Pronoun(kind) => Some(kind),
            _ => None,
        }
    }

    /// The argument, if it is a bare variable.
    pub fn argument_variable(&self) -> Option<Variable> {
        match self.argument.as_ref() {
            DrtExpression::Variable(v) => Some(*v),
            _ => None,
        }
    }

    /// Role predicate of a role application: the function of the inner
    /// event application.
    pub fn role(&self) -> Option<&DrtExpression> {
        match self.function.as_ref() {
            DrtExpression::Application(inner) if self.kind == AppKind::Role => {
                Some(inner.function.as_ref())
            }
            _ => None,
        }
    }

    /// Event referent of a role application.
    pub fn event(&self) -> Option<Variable> {
        match self.function.as_ref() {
            DrtExpression::Application(inner) if self.kind == AppKind::Role => {
                inner.argument_variable()
            }
            _ => None,
        }
    }

    /// Participant referent of a role application.
    pub fn participant(&self) -> Option<Variable> {
        if self.kind == AppKind::Role {
            self.argument_variable()
        } else {
            None
        }
    }
}

/// A value a grammar binding can carry: a full expression, or a bare string
/// feature value destined for a placeholder.
#[derive(Debug, Clone)]
pub enum Binding {
    Expression(DrtExpression),
    Feature(Symbol),
}

pub type Bindings = FxHashMap<Variable, Binding>;

#[derive(Debug, Clone)]
pub enum DrtExpression {
    Variable(Variable),
    Constant(Symbol),
    /// A constant carrying unresolved feature-variable placeholders; turned
    /// into a featured DRS body by [`DrtExpression::substitute_bindings`].
    FeatureConstant {
        expression: Box<DrtExpression>,
        placeholders: Vec<Variable>,
    },
    Application(Application),
    Lambda(Variable, Box<DrtExpression>),
    Equality(Box<DrtExpression>, Box<DrtExpression>),
    Negation(Box<DrtExpression>),
    Or(Box<DrtExpression>, Box<DrtExpression>),
    Implication(Box<DrtExpression>, Box<DrtExpression>),
    Drs(Drs),
    /// Transient merge node; reduced to a single [`Drs`] by `simplify`.
    Concatenation(Box<DrtExpression>, Box<DrtExpression>),
    /// A ranked antecedent set standing in for an ambiguous resolution.
    Antecedents(PossibleEventAntecedents),
}

impl DrtExpression {
    /// Name of a variable or constant leaf, for dispatch on reserved
    /// predicate names.
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            DrtExpression::Variable(v) => Some(v.name()),
            DrtExpression::Constant(s) => Some(symbols::resolve(*s)),
            _ => None,
        }
    }

    /// The variable a leaf denotes, if any. Constants count: a bound-referent
    /// rename may legitimately target a constant-shaped name.
    pub fn variable(&self) -> Option<Variable> {
        match self {
            DrtExpression::Variable(v) => Some(*v),
            DrtExpression::Constant(s) => Some(Variable::from_symbol(*s)),
            _ => None,
        }
    }

    /// Set of free variables.
    pub fn free(&self) -> FxHashSet<Variable> {
        let mut out = FxHashSet::default();
        self.collect_free(&mut out);
        out
    }

    pub(crate) fn collect_free(&self, out: &mut FxHashSet<Variable>) {
        match self {
            DrtExpression::Variable(v) => {
                out.insert(*v);
            }
            DrtExpression::Constant(_) => {}
            DrtExpression::FeatureConstant { expression, .. } => expression.collect_free(out),
            DrtExpression::Application(app) => {
                app.function.collect_free(out);
                app.argument.collect_free(out);
            }
            DrtExpression::Lambda(v, body) => {
                let mut inner = body.free();
                inner.remove(v);
                out.extend(inner);
            }
            DrtExpression::Equality(a, b)
            | DrtExpression::Or(a, b)
            | DrtExpression::Concatenation(a, b) => {
                a.collect_free(out);
                b.collect_free(out);
            }
            DrtExpression::Negation(term) => term.collect_free(out),
            DrtExpression::Implication(antecedent, consequent) => {
                antecedent.collect_free(out);
                // the antecedent's referents scope over the consequent
                let mut inner = consequent.free();
                if let DrtExpression::Drs(d) = antecedent.as_ref() {
                    for r in &d.refs {
                        inner.remove(r);
                    }
                }
                out.extend(inner);
            }
            DrtExpression::Drs(d) => d.collect_free(out),
            DrtExpression::Antecedents(ants) => out.extend(ants.variables()),
        }
    }

    /// Referents bound by DRS boxes in this expression. With `recursive`,
    /// nested scopes are included.
    pub fn referents(&self, recursive: bool) -> Vec<Variable> {
        match self {
            DrtExpression::Drs(d) => d.referents(recursive),
            DrtExpression::Concatenation(a, b) => {
                let mut refs = a.referents(recursive);
                refs.extend(b.referents(recursive));
                refs
            }
            _ if !recursive => Vec::new(),
            DrtExpression::Variable(_)
            | DrtExpression::Constant(_)
            | DrtExpression::Antecedents(_) => Vec::new(),
            DrtExpression::FeatureConstant { expression, .. } => expression.referents(true),
            DrtExpression::Application(app) => {
                let mut refs = app.function.referents(true);
                refs.extend(app.argument.referents(true));
                refs
            }
            DrtExpression::Lambda(_, body) => body.referents(true),
            DrtExpression::Equality(a, b)
            | DrtExpression::Or(a, b)
            | DrtExpression::Implication(a, b) => {
                let mut refs = a.referents(true);
                refs.extend(b.referents(true));
                refs
            }
            DrtExpression::Negation(term) => term.referents(true),
        }
    }

    /// Capture-avoiding substitution of `expression` for `variable`.
    /// `replace_bound` additionally renames binding occurrences.
    pub fn replace(
        &self,
        variable: Variable,
        expression: &DrtExpression,
        replace_bound: bool,
    ) -> DrtExpression {
        match self {
            DrtExpression::Variable(v) => {
                if *v == variable {
                    expression.clone()
                } else {
                    self.clone()
                }
            }
            DrtExpression::Constant(_) => self.clone(),
            DrtExpression::FeatureConstant {
                expression: inner,
                placeholders,
            } => DrtExpression::FeatureConstant {
                expression: Box::new(inner.replace(variable, expression, replace_bound)),
                placeholders: placeholders.clone(),
            },
            DrtExpression::Application(app) => DrtExpression::Application(Application::new(
                app.function.replace(variable, expression, replace_bound),
                app.argument.replace(variable, expression, replace_bound),
            )),
            DrtExpression::Lambda(v, body) => {
                if *v == variable {
                    if !replace_bound {
                        self.clone()
                    } else {
                        let target = expression.variable().unwrap_or(*v);
                        DrtExpression::Lambda(
                            target,
                            Box::new(body.replace(variable, expression, true)),
                        )
                    }
                } else if expression.free().contains(v) {
                    // rename our binder out of the way first
                    let renamed = symbols::fresh(*v);
                    let body =
                        body.replace(*v, &DrtExpression::Variable(renamed), true);
                    DrtExpression::Lambda(
                        renamed,
                        Box::new(body.replace(variable, expression, replace_bound)),
                    )
                } else {
                    DrtExpression::Lambda(
                        *v,
                        Box::new(body.replace(variable, expression, replace_bound)),
                    )
                }
            }
            DrtExpression::Equality(a, b) => DrtExpression::Equality(
                Box::new(a.replace(variable, expression, replace_bound)),
                Box::new(b.replace(variable, expression, replace_bound)),
            ),
            DrtExpression::Negation(term) => DrtExpression::Negation(Box::new(term.replace(
                variable,
                expression,
                replace_bound,
            ))),
            DrtExpression::Or(a, b) => DrtExpression::Or(
                Box::new(a.replace(variable, expression, replace_bound)),
                Box::new(b.replace(variable, expression, replace_bound)),
            ),
            DrtExpression::Implication(a, b) => DrtExpression::Implication(
                Box::new(a.replace(variable, expression, replace_bound)),
                Box::new(b.replace(variable, expression, replace_bound)),
            ),
            DrtExpression::Drs(d) => {
                DrtExpression::Drs(d.replace(variable, expression, replace_bound))
            }
            DrtExpression::Concatenation(a, b) => DrtExpression::Concatenation(
                Box::new(a.replace(variable, expression, replace_bound)),
                Box::new(b.replace(variable, expression, replace_bound)),
            ),
            DrtExpression::Antecedents(ants) => {
                DrtExpression::Antecedents(ants.replace(variable, expression))
            }
        }
    }

    /// Apply grammar bindings. Plain variables take their bound expression;
    /// [`DrtExpression::FeatureConstant`] resolves its placeholders to string
    /// feature values and splices them into the bound lambda body.
    pub fn substitute_bindings(&self, bindings: &Bindings) -> Result<DrtExpression, DrtError> {
        match self {
            DrtExpression::Variable(v) => match bindings.get(v) {
                Some(Binding::Expression(e)) => Ok(e.clone()),
                Some(Binding::Feature(_)) => Err(DrtError::FeatureBinding {
                    placeholder: v.name().to_owned(),
                }),
                None => Ok(self.clone()),
            },
            DrtExpression::Constant(_) | DrtExpression::Antecedents(_) => Ok(self.clone()),
            DrtExpression::FeatureConstant {
                expression,
                placeholders,
            } => {
                let substituted = expression.substitute_bindings(bindings)?;
                let mut features = Vec::new();
                for placeholder in placeholders {
                    match bindings.get(placeholder) {
                        Some(Binding::Feature(value)) => features.push(*value),
                        Some(Binding::Expression(_)) => {
                            return Err(DrtError::FeatureBinding {
                                placeholder: placeholder.name().to_owned(),
                            })
                        }
                        // feature not yet determined
                        None => {}
                    }
                }
                attach_features(substituted, features)
            }
            DrtExpression::Application(app) => Ok(DrtExpression::Application(Application::new(
                app.function.substitute_bindings(bindings)?,
                app.argument.substitute_bindings(bindings)?,
            ))),
            DrtExpression::Lambda(v, body) => Ok(DrtExpression::Lambda(
                *v,
                Box::new(body.substitute_bindings(bindings)?),
            )),
            DrtExpression::Equality(a, b) => Ok(DrtExpression::Equality(
                Box::new(a.substitute_bindings(bindings)?),
                Box::new(b.substitute_bindings(bindings)?),
            )),
            DrtExpression::Negation(term) => Ok(DrtExpression::Negation(Box::new(
                term.substitute_bindings(bindings)?,
            ))),
            DrtExpression::Or(a, b) => Ok(DrtExpression::Or(
                Box::new(a.substitute_bindings(bindings)?),
                Box::new(b.substitute_bindings(bindings)?),
            )),
            DrtExpression::Implication(a, b) => Ok(DrtExpression::Implication(
                Box::new(a.substitute_bindings(bindings)?),
                Box::new(b.substitute_bindings(bindings)?),
            )),
            DrtExpression::Drs(d) => Ok(DrtExpression::Drs(d.substitute_bindings(bindings)?)),
            DrtExpression::Concatenation(a, b) => Ok(DrtExpression::Concatenation(
                Box::new(a.substitute_bindings(bindings)?),
                Box::new(b.substitute_bindings(bindings)?),
            )),
        }
    }

    /// Simplify the tree: beta-reduce lambda applications and collapse
    /// concatenation nodes into merged DRSs.
    pub fn simplify(&self) -> DrtExpression {
        match self {
            DrtExpression::Variable(_)
            | DrtExpression::Constant(_)
            | DrtExpression::Antecedents(_) => self.clone(),
            DrtExpression::FeatureConstant {
                expression,
                placeholders,
            } => DrtExpression::FeatureConstant {
                expression: Box::new(expression.simplify()),
                placeholders: placeholders.clone(),
            },
            DrtExpression::Application(app) => {
                let function = app.function.simplify();
                let argument = app.argument.simplify();
                if let DrtExpression::Lambda(v, body) = function {
                    body.replace(v, &argument, false).simplify()
                } else {
                    DrtExpression::Application(Application::new(function, argument))
                }
            }
            DrtExpression::Lambda(v, body) => {
                DrtExpression::Lambda(*v, Box::new(body.simplify()))
            }
            DrtExpression::Equality(a, b) => {
                DrtExpression::Equality(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            DrtExpression::Negation(term) => DrtExpression::Negation(Box::new(term.simplify())),
            DrtExpression::Or(a, b) => {
                DrtExpression::Or(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            DrtExpression::Implication(a, b) => {
                DrtExpression::Implication(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            DrtExpression::Drs(d) => DrtExpression::Drs(d.simplify()),
            DrtExpression::Concatenation(a, b) => drs::simplify_concatenation(a, b),
        }
    }

    /// Resolve all pronoun conditions in the tree. `trail` is the chain of
    /// enclosing DRSs, outermost first; start with an empty slice at the top
    /// of a discourse.
    pub fn resolve(&self, trail: &[&Drs]) -> Result<DrtExpression, DrtError> {
        match self {
            DrtExpression::Variable(_)
            | DrtExpression::Constant(_)
            | DrtExpression::Antecedents(_) => Ok(self.clone()),
            DrtExpression::FeatureConstant {
                expression,
                placeholders,
            } => Ok(DrtExpression::FeatureConstant {
                expression: Box::new(expression.resolve(trail)?),
                placeholders: placeholders.clone(),
            }),
            DrtExpression::Application(app) if app.is_pronoun() => {
                match (app.pronoun_kind(), app.argument_variable()) {
                    (Some(kind), Some(pro_var)) => {
                        crate::resolve::resolve_pronoun(kind, pro_var, trail)
                    }
                    // classification guarantees a variable argument
                    _ => Ok(self.clone()),
                }
            }
            DrtExpression::Application(app) => Ok(DrtExpression::Application(Application::new(
                app.function.resolve(trail)?,
                app.argument.resolve(trail)?,
            ))),
            DrtExpression::Lambda(v, body) => {
                Ok(DrtExpression::Lambda(*v, Box::new(body.resolve(trail)?)))
            }
            DrtExpression::Equality(a, b) => Ok(DrtExpression::Equality(
                Box::new(a.resolve(trail)?),
                Box::new(b.resolve(trail)?),
            )),
            DrtExpression::Negation(term) => {
                Ok(DrtExpression::Negation(Box::new(term.resolve(trail)?)))
            }
            DrtExpression::Or(a, b) => Ok(DrtExpression::Or(
                Box::new(a.resolve(trail)?),
                Box::new(b.resolve(trail)?),
            )),
            DrtExpression::Implication(a, b) => {
                let antecedent = a.resolve(trail)?;
                // the antecedent box is accessible from the consequent
                let consequent = if let DrtExpression::Drs(d) = &antecedent {
                    let mut inner: Vec<&Drs> = trail.to_vec();
                    inner.push(d);
                    b.resolve(&inner)?
                } else {
                    b.resolve(trail)?
                };
                Ok(DrtExpression::Implication(
                    Box::new(antecedent),
                    Box::new(consequent),
                ))
            }
            DrtExpression::Drs(d) => Ok(DrtExpression::Drs(d.resolve(trail)?)),
            DrtExpression::Concatenation(a, b) => Ok(DrtExpression::Concatenation(
                Box::new(a.resolve(trail)?),
                Box::new(b.resolve(trail)?),
            )),
        }
    }
}

/// Splice a resolved feature list into a lambda body. Exactly two shapes are
/// recognized, matching how grammar rules introduce agreement features; any
/// other shape is a construction mismatch and fails.
fn attach_features(
    expression: DrtExpression,
    features: Vec<Symbol>,
) -> Result<DrtExpression, DrtError> {
    if let DrtExpression::Lambda(v, body) = &expression {
        // Concatenated-DRS shape: \v.(D1 + P(u)) with u among D1's referents.
        if let DrtExpression::Concatenation(first, second) = body.as_ref() {
            if let (DrtExpression::Drs(d1), Some(target)) =
                (first.as_ref(), application_argument(second))
            {
                if d1.refs.contains(&target) {
                    let mut map = FeatureMap::default();
                    map.insert(target, features);
                    // existing entries on D1 win over the incoming list
                    map.extend(d1.features.iter().map(|(k, fs)| (*k, fs.clone())));
                    let annotated = Drs::with_features(d1.refs.clone(), d1.conds.clone(), map);
                    return Ok(DrtExpression::Lambda(
                        *v,
                        Box::new(DrtExpression::Concatenation(
                            Box::new(DrtExpression::Drs(annotated)),
                            second.clone(),
                        )),
                    ));
                }
            }
        }
        // Implication shape: \v.([refs],[D1 -> P(u)]) with u among D1's referents.
        if let DrtExpression::Drs(outer) = body.as_ref() {
            if outer.conds.len() == 1 {
                if let DrtExpression::Implication(antecedent, consequent) = &outer.conds[0] {
                    if let (DrtExpression::Drs(d1), Some(target)) =
                        (antecedent.as_ref(), application_argument(consequent))
                    {
                        if d1.refs.contains(&target) {
                            let mut map = FeatureMap::default();
                            map.insert(target, features);
                            let annotated =
                                Drs::with_features(d1.refs.clone(), d1.conds.clone(), map);
                            let rebuilt = Drs::new(
                                outer.refs.clone(),
                                vec![DrtExpression::Implication(
                                    Box::new(DrtExpression::Drs(annotated)),
                                    consequent.clone(),
                                )],
                            );
                            return Ok(DrtExpression::Lambda(
                                *v,
                                Box::new(DrtExpression::Drs(rebuilt)),
                            ));
                        }
                    }
                }
            }
        }
    }
    Err(DrtError::UnsupportedConstruction {
        expression: expression.to_string(),
    })
}

fn application_argument(expression: &DrtExpression) -> Option<Variable> {
    match expression {
        DrtExpression::Application(app) => app.argument_variable(),
        _ => None,
    }
}

impl PartialEq for DrtExpression {
    /// Structural equality, modulo alphabetic variance of lambda binders and
    /// DRS referents.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DrtExpression::Variable(a), DrtExpression::Variable(b)) => a == b,
            (DrtExpression::Constant(a), DrtExpression::Constant(b)) => a == b,
            (
                DrtExpression::FeatureConstant {
                    expression: e1,
                    placeholders: p1,
                },
                DrtExpression::FeatureConstant {
                    expression: e2,
                    placeholders: p2,
                },
            ) => e1 == e2 && p1 == p2,
            (DrtExpression::Application(a), DrtExpression::Application(b)) => {
                a.function == b.function && a.argument == b.argument
            }
            (DrtExpression::Lambda(v1, b1), DrtExpression::Lambda(v2, b2)) => {
                if v1 == v2 {
                    b1 == b2
                } else {
                    let converted = b2.replace(*v2, &DrtExpression::Variable(*v1), true);
                    **b1 == converted
                }
            }
            (DrtExpression::Equality(a1, b1), DrtExpression::Equality(a2, b2)) => {
                a1 == a2 && b1 == b2
            }
            (DrtExpression::Negation(a), DrtExpression::Negation(b)) => a == b,
            (DrtExpression::Or(a1, b1), DrtExpression::Or(a2, b2)) => a1 == a2 && b1 == b2,
            (DrtExpression::Implication(a1, b1), DrtExpression::Implication(a2, b2)) => {
                a1 == a2 && b1 == b2
            }
            (DrtExpression::Drs(a), DrtExpression::Drs(b)) => a == b,
            (DrtExpression::Concatenation(a1, b1), DrtExpression::Concatenation(a2, b2)) => {
                a1 == a2 && b1 == b2
            }
            (DrtExpression::Antecedents(a), DrtExpression::Antecedents(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for DrtExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrtExpression::Variable(v) => write!(f, "{v}"),
            DrtExpression::Constant(s) => f.write_str(symbols::resolve(*s)),
            DrtExpression::FeatureConstant {
                expression,
                placeholders,
            } => {
                let names: Vec<&str> = placeholders.iter().map(|p| p.name()).collect();
                write!(f, "{}{{{}}}", expression, names.join(","))
            }
            DrtExpression::Application(app) => {
                // uncurry: F(a)(b) prints as F(a,b)
                let mut head = &app.function;
                let mut args = vec![app.argument.as_ref()];
                while let DrtExpression::Application(inner) = head.as_ref() {
                    args.push(inner.argument.as_ref());
                    head = &inner.function;
                }
                let rendered: Vec<String> =
                    args.iter().rev().map(|a| a.to_string()).collect();
                write!(f, "{}({})", head, rendered.join(","))
            }
            DrtExpression::Lambda(v, body) => write!(f, "\\{v}.{body}"),
            DrtExpression::Equality(a, b) => write!(f, "({a} = {b})"),
            DrtExpression::Negation(term) => write!(f, "-{term}"),
            DrtExpression::Or(a, b) => write!(f, "({a} | {b})"),
            DrtExpression::Implication(a, b) => write!(f, "({a} -> {b})"),
            DrtExpression::Drs(d) => write!(f, "{d}"),
            DrtExpression::Concatenation(a, b) => write!(f, "({a} + {b})"),
            DrtExpression::Antecedents(ants) => write!(f, "{ants}"),
        }
    }
}
