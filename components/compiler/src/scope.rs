//! Lexical scope arena used by the code generator
//!
//! Scopes form a tree, so they live in an arena indexed by integer handle;
//! lookup walks parent handles iteratively. A child scope is discarded by
//! abandoning its handle, never merged back into its parent.

use std::collections::HashSet;

/// Handle to a scope record in the arena.
pub type ScopeId = usize;

#[derive(Debug)]
struct ScopeRecord {
    parent: Option<ScopeId>,
    symbols: HashSet<String>,
}

/// Arena of lexical scopes, created with a single root scope.
#[derive(Debug)]
pub struct ScopeArena {
    scopes: Vec<ScopeRecord>,
}

impl ScopeArena {
    /// Create an arena holding only the root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![ScopeRecord {
                parent: None,
                symbols: HashSet::new(),
            }],
        }
    }

    /// Handle of the root scope.
    pub fn root(&self) -> ScopeId {
        0
    }

    /// Create a child scope of `parent` and return its handle.
    pub fn inherit(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(ScopeRecord {
            parent: Some(parent),
            symbols: HashSet::new(),
        });
        self.scopes.len() - 1
    }

    /// Whether `name` is visible from `scope`: the local set first, then
    /// every ancestor up to the root.
    pub fn has_symbol(&self, scope: ScopeId, name: &str) -> bool {
        let mut current = Some(scope);

        while let Some(id) = current {
            if self.scopes[id].symbols.contains(name) {
                return true;
            }
            current = self.scopes[id].parent;
        }

        false
    }

    /// Register `name` in `scope`'s local set only.
    pub fn add_symbol(&mut self, scope: ScopeId, name: &str) {
        self.scopes[scope].symbols.insert(name.to_string());
    }
}

impl Default for ScopeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut arena = ScopeArena::new();
        let root = arena.root();
        assert!(!arena.has_symbol(root, "x"));
        arena.add_symbol(root, "x");
        assert!(arena.has_symbol(root, "x"));
    }

    #[test]
    fn test_child_sees_ancestor_symbols() {
        let mut arena = ScopeArena::new();
        let root = arena.root();
        arena.add_symbol(root, "x");

        let child = arena.inherit(root);
        let grandchild = arena.inherit(child);
        assert!(arena.has_symbol(child, "x"));
        assert!(arena.has_symbol(grandchild, "x"));
    }

    #[test]
    fn test_parent_does_not_see_child_symbols() {
        let mut arena = ScopeArena::new();
        let root = arena.root();
        let child = arena.inherit(root);
        arena.add_symbol(child, "y");

        assert!(arena.has_symbol(child, "y"));
        assert!(!arena.has_symbol(root, "y"));
    }

    #[test]
    fn test_siblings_are_isolated() {
        let mut arena = ScopeArena::new();
        let root = arena.root();
        let first = arena.inherit(root);
        let second = arena.inherit(root);
        arena.add_symbol(first, "z");

        assert!(!arena.has_symbol(second, "z"));
    }
}
