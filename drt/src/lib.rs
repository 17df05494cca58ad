//! Discourse Representation Structures with feature-annotated referents and
//! rule-based anaphora resolution.
//!
//! The surface syntax extends the usual box notation with `{...}` feature
//! lists: literal on discourse referents (`([x{masc,sg}],[boy(x)])`), and as
//! placeholders on constants (`dog{?g,?n}`) that grammar bindings fill in
//! later. Pronoun conditions (`PRO`, `REFPRO`, `POSPRO`) resolve against
//! feature-matching referents introduced earlier in the discourse, filtered
//! by event structure and ranked by role agreement and proximity.
//!
//! The usual pipeline is parse, simplify, resolve:
//!
//! ```
//! use drt::parse;
//!
//! let discourse = parse(
//!     "([x{masc,sg},e],[boy(x), walk(e), Agent(e,x)]) + \
//!      ([u{masc,sg},e1],[PRO(u), smile(e1), Agent(e1,u)])",
//! )?;
//! let resolved = discourse.simplify().resolve(&[])?;
//! assert!(resolved.to_string().contains("(u = x)"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod antecedents;
pub mod drs;
pub mod error;
pub mod expr;
pub mod lexer;
pub mod parser;
mod resolve;
pub mod symbols;

pub use antecedents::PossibleEventAntecedents;
pub use drs::{Drs, FeatureMap, FeatureSet};
pub use error::DrtError;
pub use expr::{AppKind, Application, Binding, Bindings, DrtExpression, PronounKind};
pub use parser::{parse, ParseError};
pub use symbols::{fresh, Symbol, Variable, VariableKind};
