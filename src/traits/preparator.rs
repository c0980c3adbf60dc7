//! Data preparator traits.
//!
//! This module defines the contract for the component that transforms
//! training data before it reaches any algorithm.

use async_trait::async_trait;

use crate::Result;

/// Transforms training data ahead of algorithm consumption.
///
/// This is the "simple" preparator shape: a single `TD` parameter stands
/// for both the input and the output, so a preparator can never change the
/// training data representation, only its contents. Cleaning, filtering,
/// and re-weighting all fit; re-encoding does not.
///
/// # Examples
///
/// ```rust
/// use enginekit::traits::Preparator;
/// use enginekit::Result;
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct DedupPreparator;
///
/// #[async_trait]
/// impl Preparator<Vec<String>> for DedupPreparator {
///     async fn prepare(&self, mut data: Vec<String>) -> Result<Vec<String>> {
///         data.dedup();
///         Ok(data)
///     }
/// }
/// ```
#[async_trait]
pub trait Preparator<TD>: Send + Sync + std::fmt::Debug {
    /// Transform the training data, keeping its representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be prepared.
    async fn prepare(&self, data: TD) -> Result<TD>;

    /// Get a human-readable name for this preparator.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
