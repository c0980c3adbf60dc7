//! Serving traits.
//!
//! This module defines the contract for the component that combines the
//! predictions of all registered algorithms into a single answer.

use async_trait::async_trait;

use crate::Result;

/// Combines per-algorithm predictions for one query into a single prediction.
///
/// The predictions arrive in algorithm registry insertion order, one slot
/// per registered algorithm. A `None` slot stands for an algorithm that
/// produced nothing for this query.
///
/// # Examples
///
/// ```rust
/// use enginekit::traits::Serving;
/// use enginekit::{Error, Result};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct ShortestAnswer;
///
/// #[async_trait]
/// impl Serving<String, String> for ShortestAnswer {
///     async fn serve(&self, _query: &String, predictions: Vec<Option<String>>) -> Result<String> {
///         predictions
///             .into_iter()
///             .flatten()
///             .min_by_key(String::len)
///             .ok_or_else(|| Error::serving("no prediction to serve"))
///     }
/// }
/// ```
#[async_trait]
pub trait Serving<Q, P>: Send + Sync + std::fmt::Debug {
    /// Combine the ordered per-algorithm predictions into one prediction.
    ///
    /// # Errors
    ///
    /// Returns an error if no combined prediction can be produced.
    async fn serve(&self, query: &Q, predictions: Vec<Option<P>>) -> Result<P>;

    /// Get a human-readable name for this serving strategy.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
