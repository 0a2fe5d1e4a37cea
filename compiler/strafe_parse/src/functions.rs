//! Arity table of user-declared functions.

use rustc_hash::FxHashMap;

/// `(name, parameter count)` for every `fn` seen so far.
///
/// Consulted while parsing to decide whether a bare name is a call and how
/// many trailing expressions it takes. Redeclaring a name replaces its arity.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    arities: FxHashMap<String, usize>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str, arity: usize) {
        self.arities.insert(name.to_owned(), arity);
    }

    pub fn arity(&self, name: &str) -> Option<usize> {
        self.arities.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.arities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.arities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }
}
