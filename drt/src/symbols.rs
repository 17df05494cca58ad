//! Interned symbols and discourse-referent variables.
//!
//! Every name in an expression tree — referents, constants, feature values —
//! is a [`lasso::Spur`] key into one process-global interner, so variable
//! equality is a key comparison and rendering never allocates a lookup table.
//!
//! Alpha-renaming draws from a single monotonic counter for the lifetime of
//! the process. Two renames can therefore never produce colliding referents,
//! no matter which merge or substitution requested them.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

/// Interned string key.
pub type Symbol = Spur;

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);
static RENAME_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Intern a name, returning its key.
pub fn intern(name: &str) -> Symbol {
    INTERNER.get_or_intern(name)
}

/// Resolve an interned key back to its text.
pub fn resolve(symbol: Symbol) -> &'static str {
    INTERNER.resolve(&symbol)
}

/// Which scope class a variable name belongs to, by naming convention:
/// `e` plus digits is an event referent, a single letter `f`..`t` plus
/// digits is a function variable, any other single lowercase letter plus
/// digits is an individual referent. Names outside these shapes (multi-letter
/// words, capitalized names, `?`-prefixed placeholders) are not variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Individual,
    Event,
    Function,
}

/// An interned variable. Equality is identity-by-name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable(Symbol);

impl Variable {
    pub fn new(name: &str) -> Self {
        Variable(intern(name))
    }

    pub fn from_symbol(symbol: Symbol) -> Self {
        Variable(symbol)
    }

    pub fn symbol(&self) -> Symbol {
        self.0
    }

    pub fn name(&self) -> &'static str {
        resolve(self.0)
    }

    pub fn kind(&self) -> Option<VariableKind> {
        let name = self.name();
        let mut chars = name.chars();
        let first = chars.next()?;
        if !first.is_ascii_lowercase() || !chars.all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(match first {
            'e' => VariableKind::Event,
            'f'..='t' => VariableKind::Function,
            _ => VariableKind::Individual,
        })
    }

    pub fn is_individual(&self) -> bool {
        self.kind() == Some(VariableKind::Individual)
    }

    pub fn is_event(&self) -> bool {
        self.kind() == Some(VariableKind::Event)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable({})", self.name())
    }
}

/// A globally fresh variable of the same kind as `like`.
pub fn fresh(like: Variable) -> Variable {
    let n = RENAME_COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = match like.kind() {
        Some(VariableKind::Event) => format!("e0{n}"),
        Some(VariableKind::Function) => format!("f0{n}"),
        _ => format!("z{n}"),
    };
    Variable::new(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_variables() {
        assert_eq!(Variable::new("x").kind(), Some(VariableKind::Individual));
        assert_eq!(Variable::new("u12").kind(), Some(VariableKind::Individual));
        assert_eq!(Variable::new("a").kind(), Some(VariableKind::Individual));
    }

    #[test]
    fn event_variables() {
        assert_eq!(Variable::new("e").kind(), Some(VariableKind::Event));
        assert_eq!(Variable::new("e42").kind(), Some(VariableKind::Event));
    }

    #[test]
    fn function_variables() {
        assert_eq!(Variable::new("f").kind(), Some(VariableKind::Function));
        assert_eq!(Variable::new("t3").kind(), Some(VariableKind::Function));
    }

    #[test]
    fn constants_are_not_variables() {
        assert_eq!(Variable::new("dog").kind(), None);
        assert_eq!(Variable::new("PRO").kind(), None);
        assert_eq!(Variable::new("Agent").kind(), None);
        assert_eq!(Variable::new("?n").kind(), None);
    }

    #[test]
    fn fresh_preserves_kind() {
        let v = fresh(Variable::new("x"));
        assert_eq!(v.kind(), Some(VariableKind::Individual));
        let e = fresh(Variable::new("e1"));
        assert_eq!(e.kind(), Some(VariableKind::Event));
    }

    #[test]
    fn fresh_never_repeats() {
        let a = fresh(Variable::new("x"));
        let b = fresh(Variable::new("x"));
        assert_ne!(a, b);
    }

    #[test]
    fn interning_is_identity_by_name() {
        assert_eq!(Variable::new("x"), Variable::new("x"));
        assert_ne!(Variable::new("x"), Variable::new("y"));
    }
}
