//! The assembled engine.
//!
//! This module defines the immutable pipeline configuration produced by a
//! successful [`EngineBuilder::build`](crate::builder::EngineBuilder::build)
//! call, plus a lightweight introspection snapshot of it.

use std::sync::Arc;

use crate::builder::EngineBuilder;
use crate::traits::{DataSource, Preparator, Serving};
use crate::types::registry::AlgorithmRegistry;

/// An immutable, fully resolved pipeline configuration.
///
/// An engine wraps exactly four resolved pieces: one data source, one
/// preparator, a non-empty registry of named algorithms, and one serving
/// strategy. It is produced by [`EngineBuilder::build`] and can only exist
/// in a state that already passed that call's validation, so its accessors
/// have no error conditions and no mutators exist.
///
/// Cloning an engine clones the `Arc` handles, not the components; a built
/// engine is safe to share read-only across arbitrarily many concurrent
/// consumers.
///
/// # Examples
///
/// ```rust
/// use enginekit::prelude::*;
/// use async_trait::async_trait;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct EventLogSource;
///
/// #[async_trait]
/// impl DataSource<usize, Vec<String>, String, String> for EventLogSource {
///     async fn read_training(&self) -> Result<(Vec<String>, usize)> {
///         Ok((vec!["view item-1".to_string()], 1))
///     }
///
///     async fn read_eval(&self) -> Result<EvalStream<String, String>> {
///         Ok(Box::pin(futures::stream::empty()))
///     }
/// }
///
/// #[derive(Debug)]
/// struct PopularityRank;
///
/// #[async_trait]
/// impl Algorithm<Vec<String>, String, String> for PopularityRank {
///     async fn predict(&self, data: &Vec<String>, _query: &String) -> Result<String> {
///         data.first()
///             .cloned()
///             .ok_or_else(|| Error::prediction("no training data"))
///     }
/// }
///
/// let source: Arc<dyn DataSource<usize, Vec<String>, String, String>> =
///     Arc::new(EventLogSource);
/// let ranker: Arc<dyn Algorithm<Vec<String>, String, String>> = Arc::new(PopularityRank);
///
/// let engine = Engine::builder()
///     .with_data_source(source)
///     .with_algorithm("popularity", ranker)
///     .build()?;
///
/// assert_eq!(engine.algorithms().names(), vec!["popularity"]);
/// # Ok::<(), enginekit::Error>(())
/// ```
pub struct Engine<TD, DP, Q, P, A> {
    data_source: Arc<dyn DataSource<DP, TD, Q, A>>,
    preparator: Arc<dyn Preparator<TD>>,
    algorithms: AlgorithmRegistry<TD, Q, P>,
    serving: Arc<dyn Serving<Q, P>>,
}

impl<TD, DP, Q, P, A> Engine<TD, DP, Q, P, A> {
    /// Assemble an engine from already validated parts.
    pub(crate) fn from_parts(
        data_source: Arc<dyn DataSource<DP, TD, Q, A>>,
        preparator: Arc<dyn Preparator<TD>>,
        algorithms: AlgorithmRegistry<TD, Q, P>,
        serving: Arc<dyn Serving<Q, P>>,
    ) -> Self {
        Self {
            data_source,
            preparator,
            algorithms,
            serving,
        }
    }

    /// Get the data source component.
    #[must_use]
    pub fn data_source(&self) -> &Arc<dyn DataSource<DP, TD, Q, A>> {
        &self.data_source
    }

    /// Get the preparator component.
    #[must_use]
    pub fn preparator(&self) -> &Arc<dyn Preparator<TD>> {
        &self.preparator
    }

    /// Get a read-only view of the algorithm registry.
    #[must_use]
    pub fn algorithms(&self) -> &AlgorithmRegistry<TD, Q, P> {
        &self.algorithms
    }

    /// Get the serving component.
    #[must_use]
    pub fn serving(&self) -> &Arc<dyn Serving<Q, P>> {
        &self.serving
    }

    /// Get an introspection snapshot of this engine.
    #[must_use]
    pub fn info(&self) -> EngineInfo {
        EngineInfo {
            data_source: self.data_source.name().to_string(),
            preparator: self.preparator.name().to_string(),
            algorithms: self
                .algorithms
                .names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            serving: self.serving.name().to_string(),
        }
    }
}

impl<TD, DP, Q, P, A> Engine<TD, DP, Q, P, A>
where
    TD: Send + Sync + 'static,
    Q: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    /// Create a builder for assembling an engine with a fluent API.
    #[must_use]
    pub fn builder() -> EngineBuilder<TD, DP, Q, P, A> {
        EngineBuilder::new()
    }
}

impl<TD, DP, Q, P, A> Clone for Engine<TD, DP, Q, P, A> {
    fn clone(&self) -> Self {
        Self {
            data_source: Arc::clone(&self.data_source),
            preparator: Arc::clone(&self.preparator),
            algorithms: self.algorithms.clone(),
            serving: Arc::clone(&self.serving),
        }
    }
}

impl<TD, DP, Q, P, A> std::fmt::Debug for Engine<TD, DP, Q, P, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("data_source", &self.data_source.name())
            .field("preparator", &self.preparator.name())
            .field("algorithms", &self.algorithms.names())
            .field("serving", &self.serving.name())
            .finish()
    }
}

/// Introspection snapshot of an assembled engine.
///
/// Component entries carry the implementation type names; the algorithm
/// entries carry the registry names, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    /// Implementation type name of the data source.
    pub data_source: String,

    /// Implementation type name of the preparator.
    pub preparator: String,

    /// Registry names of all algorithms, in insertion order.
    pub algorithms: Vec<String>,

    /// Implementation type name of the serving strategy.
    pub serving: String,
}
