//! Data source traits.
//!
//! This module defines the contract for the component that feeds an engine:
//! it extracts training data together with its data parameters, and
//! separately yields query/actual pairs for evaluation runs.

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::Result;

/// A finite, restartable stream of query/actual pairs for evaluation.
///
/// Each call to [`DataSource::read_eval`] produces a fresh stream, which is
/// what makes evaluation restartable per run.
pub type EvalStream<Q, A> = Pin<Box<dyn Stream<Item = Result<(Q, A)>> + Send>>;

/// Produces training data and evaluation pairs for an engine.
///
/// The role type parameters are shared with the engine that the source is
/// assembled into: `DP` is the data-parameters value produced alongside the
/// training data (e.g. partition or fold metadata), `TD` the training data
/// itself, and `Q`/`A` the query and ground-truth representations used for
/// evaluation pairing.
///
/// # Examples
///
/// ```rust
/// use enginekit::traits::{DataSource, EvalStream};
/// use enginekit::Result;
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct EventLogSource {
///     path: String,
/// }
///
/// #[async_trait]
/// impl DataSource<usize, Vec<String>, String, String> for EventLogSource {
///     async fn read_training(&self) -> Result<(Vec<String>, usize)> {
///         // Implementation would read events from the path
///         Ok((vec!["view item-1".to_string()], 1))
///     }
///
///     async fn read_eval(&self) -> Result<EvalStream<String, String>> {
///         // Implementation would return held-out query/actual pairs
///         Ok(Box::pin(futures::stream::empty()))
///     }
/// }
/// ```
#[async_trait]
pub trait DataSource<DP, TD, Q, A>: Send + Sync + std::fmt::Debug {
    /// Extract the training data and its data parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be accessed or its
    /// contents cannot be turned into training data.
    async fn read_training(&self) -> Result<(TD, DP)>;

    /// Produce a fresh, finite stream of query/actual pairs for evaluation.
    ///
    /// The pairs are consumed only by evaluation tooling, never by the
    /// pipeline proper.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation set cannot be enumerated.
    async fn read_eval(&self) -> Result<EvalStream<Q, A>>;

    /// Get a human-readable name for this data source.
    ///
    /// This is used for logging and debugging purposes.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
