//! Algorithm traits.
//!
//! This module defines the contract for the components that answer queries
//! from prepared training data. An engine holds one or more algorithms,
//! each registered under a unique name.

use async_trait::async_trait;

use crate::Result;

/// Maps prepared training data and a query to a prediction.
///
/// Whatever model an implementation derives from the training data is its
/// own private business; this crate only sees the `(TD, Q) -> P` surface.
/// Internal failures are reported through the [`Result`], opaque to the
/// assembly core.
///
/// # Examples
///
/// ```rust
/// use enginekit::traits::Algorithm;
/// use enginekit::Result;
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct PopularityRank;
///
/// #[async_trait]
/// impl Algorithm<Vec<String>, String, String> for PopularityRank {
///     async fn predict(&self, data: &Vec<String>, _query: &String) -> Result<String> {
///         data.first()
///             .cloned()
///             .ok_or_else(|| enginekit::Error::prediction("no training data"))
///     }
/// }
/// ```
#[async_trait]
pub trait Algorithm<TD, Q, P>: Send + Sync + std::fmt::Debug {
    /// Produce a prediction for one query from the prepared training data.
    ///
    /// # Errors
    ///
    /// Returns an error if the algorithm cannot produce a prediction for
    /// this query.
    async fn predict(&self, data: &TD, query: &Q) -> Result<P>;

    /// Get a human-readable name for this algorithm implementation.
    ///
    /// This is distinct from the registry name the algorithm is registered
    /// under, which is chosen by the engine author.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
