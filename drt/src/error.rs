//! Library error types.
//!
//! All failures are deterministic functions of the input tree and propagate
//! synchronously through `resolve`/`substitute_bindings` without wrapping.
//! Parse failures have their own type, [`crate::parser::ParseError`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrtError {
    /// A feature placeholder resolved to something other than a string value.
    #[error("expected a string feature value for placeholder '{placeholder}'")]
    FeatureBinding { placeholder: String },

    /// The feature-annotated wrapper met a lambda body it cannot splice
    /// features into. A silent fallback here would drop agreement features,
    /// so this fails loudly.
    #[error("cannot attach features to expression: {expression}")]
    UnsupportedConstruction { expression: String },

    /// No eligible antecedent was found for a pronoun.
    #[error("variable '{variable}' does not resolve to anything")]
    Anaphora { variable: String },
}
