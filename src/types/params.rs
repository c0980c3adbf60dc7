//! Per-slot component parameters for an assembled engine.
//!
//! An engine holds already constructed components; the execution layer that
//! drives it may still want to carry the raw parameter blobs the components
//! were (or will be) configured from, e.g. to re-instantiate them on other
//! workers. This module provides that container. The blobs are opaque JSON
//! values; decoding them into each component's private configuration type
//! is the component factory's business, not this crate's.

use serde::{Deserialize, Serialize};

use crate::types::engine::Engine;
use crate::{Error, Result};

/// Opaque per-slot parameters for the four engine roles.
///
/// Algorithm parameters are an ordered list of `(registry name, value)`
/// pairs rather than a map: order is meaningful to the execution layer, and
/// the same registry name may appear several times so one algorithm can be
/// run under several parameter sets.
///
/// # Examples
///
/// ```rust
/// use enginekit::EngineParams;
/// use serde_json::json;
///
/// let params = EngineParams::new()
///     .with_data_source_params(json!({ "path": "events.log" }))
///     .add_algorithm_params("als", json!({ "rank": 10 }))
///     .add_algorithm_params("als", json!({ "rank": 50 }));
///
/// assert_eq!(params.algorithms.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EngineParams {
    /// Parameters for the data source slot.
    pub data_source: serde_json::Value,

    /// Parameters for the preparator slot.
    pub preparator: serde_json::Value,

    /// Ordered `(registry name, parameters)` pairs for algorithms.
    pub algorithms: Vec<(String, serde_json::Value)>,

    /// Parameters for the serving slot.
    pub serving: serde_json::Value,
}

impl EngineParams {
    /// Create an empty parameter set (all slots `null`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data source parameters.
    #[must_use]
    pub fn with_data_source_params<V: Into<serde_json::Value>>(mut self, params: V) -> Self {
        self.data_source = params.into();
        self
    }

    /// Set the preparator parameters.
    #[must_use]
    pub fn with_preparator_params<V: Into<serde_json::Value>>(mut self, params: V) -> Self {
        self.preparator = params.into();
        self
    }

    /// Append a parameter set for a named algorithm.
    #[must_use]
    pub fn add_algorithm_params<K, V>(mut self, name: K, params: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.algorithms.push((name.into(), params.into()));
        self
    }

    /// Set the serving parameters.
    #[must_use]
    pub fn with_serving_params<V: Into<serde_json::Value>>(mut self, params: V) -> Self {
        self.serving = params.into();
        self
    }

    /// Check this parameter set against an assembled engine.
    ///
    /// Every algorithm parameter entry must refer to a name that exists in
    /// the engine's registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for the first entry naming an algorithm
    /// the engine does not have.
    pub fn validate_for<TD, DP, Q, P, A>(&self, engine: &Engine<TD, DP, Q, P, A>) -> Result<()> {
        for (name, _) in &self.algorithms {
            if !engine.algorithms().contains(name) {
                return Err(Error::not_found(format!(
                    "algorithm `{name}` referenced by params"
                )));
            }
        }
        Ok(())
    }
}
