//! Name-keyed algorithm registry.
//!
//! This module provides the insertion-ordered map that holds an engine's
//! algorithms under unique, caller-chosen names.

use std::sync::Arc;

use crate::traits::Algorithm;

/// Insertion-ordered registry of named algorithms.
///
/// Names are unique: inserting under an existing name replaces the old
/// algorithm in place. This is deliberate "named slot" semantics so that a
/// named algorithm can be redefined, not an error condition. The original
/// position of a replaced name is preserved, which keeps the prediction
/// order seen by serving strategies stable across redefinitions.
///
/// # Examples
///
/// ```rust
/// use enginekit::AlgorithmRegistry;
/// use enginekit::traits::Algorithm;
/// use enginekit::Result;
/// use async_trait::async_trait;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Echo;
///
/// #[async_trait]
/// impl Algorithm<String, String, String> for Echo {
///     async fn predict(&self, _data: &String, query: &String) -> Result<String> {
///         Ok(query.clone())
///     }
/// }
///
/// let echo: Arc<dyn Algorithm<String, String, String>> = Arc::new(Echo);
/// let mut registry = AlgorithmRegistry::new();
/// registry.insert("echo", echo);
/// assert!(registry.contains("echo"));
/// assert_eq!(registry.names(), vec!["echo"]);
/// ```
pub struct AlgorithmRegistry<TD, Q, P> {
    entries: Vec<(String, Arc<dyn Algorithm<TD, Q, P>>)>,
}

impl<TD, Q, P> AlgorithmRegistry<TD, Q, P> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an algorithm under a name.
    ///
    /// If the name is already taken, the new algorithm replaces the old one
    /// in its original position and the replaced handle is returned.
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        algorithm: Arc<dyn Algorithm<TD, Q, P>>,
    ) -> Option<Arc<dyn Algorithm<TD, Q, P>>> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, algorithm)),
            None => {
                self.entries.push((name, algorithm));
                None
            }
        }
    }

    /// Look up an algorithm by its registry name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Algorithm<TD, Q, P>>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, algorithm)| algorithm)
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Get all registered names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate over `(name, algorithm)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Algorithm<TD, Q, P>>)> {
        self.entries
            .iter()
            .map(|(n, algorithm)| (n.as_str(), algorithm))
    }

    /// Get the number of registered algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<TD, Q, P> Default for AlgorithmRegistry<TD, Q, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TD, Q, P> Clone for AlgorithmRegistry<TD, Q, P> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<TD, Q, P> std::fmt::Debug for AlgorithmRegistry<TD, Q, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Tagged(&'static str);

    #[async_trait]
    impl Algorithm<String, String, String> for Tagged {
        async fn predict(&self, _data: &String, _query: &String) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn algo(tag: &'static str) -> Arc<dyn Algorithm<String, String, String>> {
        Arc::new(Tagged(tag))
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = AlgorithmRegistry::new();
        assert!(registry.insert("a", algo("one")).is_none());
        assert!(registry.contains("a"));
        assert!(registry.get("a").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_overwrite_returns_replaced_handle() {
        let mut registry = AlgorithmRegistry::new();
        registry.insert("a", algo("one"));
        let replaced = registry.insert("a", algo("two"));
        assert!(replaced.is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_overwrite_preserves_position() {
        let mut registry = AlgorithmRegistry::new();
        registry.insert("a", algo("one"));
        registry.insert("b", algo("two"));
        registry.insert("a", algo("three"));
        // Re-insertion replaces in place, it never moves the name to the end.
        assert_eq!(registry.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_iteration_order() {
        let mut registry = AlgorithmRegistry::new();
        registry.insert("c", algo("one"));
        registry.insert("a", algo("two"));
        registry.insert("b", algo("three"));
        let names: Vec<&str> = registry.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_clone_shares_handles() {
        let mut registry = AlgorithmRegistry::new();
        registry.insert("a", algo("one"));
        let cloned = registry.clone();
        assert!(Arc::ptr_eq(
            registry.get("a").unwrap(),
            cloned.get("a").unwrap()
        ));
    }
}
