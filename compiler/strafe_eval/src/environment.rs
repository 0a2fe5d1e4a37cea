//! Variable bindings as a single flat stack.
//!
//! Entering a scope records the stack depth; leaving it truncates back to
//! that depth. Lookup scans from the most recent binding, so an inner
//! declaration shadows an outer one of the same name until its scope ends.

use crate::Value;

#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: Vec<(String, Value)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stack depth, to be handed back to [`Environment::truncate`].
    #[inline]
    pub fn depth(&self) -> usize {
        self.bindings.len()
    }

    /// Drop every binding declared since `depth` was recorded.
    #[inline]
    pub fn truncate(&mut self, depth: usize) {
        self.bindings.truncate(depth);
    }

    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.push((name.to_owned(), value));
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// The most recent binding of `name`, for assignment.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.bindings
            .iter_mut()
            .rev()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests;
