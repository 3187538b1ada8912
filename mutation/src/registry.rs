//! Registry of mutation kinds by name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::kind::MutationKind;
use crate::ops::{IncMutation, PushMutation, SetMutation};

/// Name of the assignment kind. The empty kind name resolves to it.
pub const SET: &str = "set";
/// Name of the numeric increment kind.
pub const INC: &str = "inc";
/// Name of the sequence append kind.
pub const PUSH: &str = "push";

/// Maps mutation kind names to implementations.
///
/// Lookup is by exact name. Unknown names are reported at dispatch time.
#[derive(Clone, Default)]
pub struct MutationRegistry {
    kinds: HashMap<String, Arc<dyn MutationKind>>,
}

impl MutationRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `set` (also under `""`), `inc` and `push`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(SET, SetMutation);
        registry.register(INC, IncMutation);
        registry.register(PUSH, PushMutation);
        registry
    }

    /// Register `kind` under `name`, replacing any previous entry.
    ///
    /// Registering `set` also rebinds the empty name.
    pub fn register(&mut self, name: impl Into<String>, kind: impl MutationKind + 'static) {
        self.register_arc(name, Arc::new(kind));
    }

    pub fn register_arc(&mut self, name: impl Into<String>, kind: Arc<dyn MutationKind>) {
        let name = name.into();
        if name == SET {
            self.kinds.insert(String::new(), Arc::clone(&kind));
        }
        self.kinds.insert(name, kind);
    }

    pub fn get(&self, name: &str) -> Option<&dyn MutationKind> {
        self.kinds.get(name).map(|kind| kind.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl fmt::Debug for MutationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationRegistry")
            .field("kinds", &self.names())
            .finish()
    }
}
