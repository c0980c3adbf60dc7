//! Builder for assembling engines.
//!
//! This module provides a fluent API for linking up a data source, a
//! preparator, named algorithms, and a serving strategy into an
//! [`Engine`], with validation and default substitution performed at
//! build time.

use std::sync::Arc;

use crate::defaults::{FirstServing, IdentityPreparator};
use crate::traits::{Algorithm, DataSource, Preparator, Serving};
use crate::types::{AlgorithmRegistry, Engine};
use crate::{Error, Result};

/// Builder for assembling engines.
///
/// The builder accumulates one component per singular slot (data source,
/// preparator, serving) and any number of named algorithms, then produces
/// an immutable [`Engine`] snapshot on [`build`](Self::build). Setters
/// consume and return the builder to support fluent chaining; a builder has
/// a single owner, so there is never concurrent mutation to guard against.
///
/// Re-assigning a singular slot replaces the previous component (last write
/// wins), and registering an algorithm under a taken name replaces that
/// named slot without changing its position.
///
/// The preparator and serving slots are optional: a slot left unset is
/// resolved at build time to the built-in [`IdentityPreparator`] or
/// [`FirstServing`] component. The
/// [`with_default_preparator`](Self::with_default_preparator) and
/// [`with_default_serving`](Self::with_default_serving) methods assign the
/// same built-ins eagerly, for callers who want the substitution visible at
/// the call site.
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
/// let engine = EngineBuilder::new()
///     .with_data_source(source)
///     .with_default_preparator()
///     .with_algorithm("popularity", ranker)
///     .with_default_serving()
///     .build()?;
///
/// assert_eq!(engine.algorithms().len(), 1);
/// # Ok::<(), enginekit::Error>(())
/// ```
pub struct EngineBuilder<TD, DP, Q, P, A> {
    /// Data source component (required).
    data_source: Option<Arc<dyn DataSource<DP, TD, Q, A>>>,

    /// Preparator component (optional, defaulted at build).
    preparator: Option<Arc<dyn Preparator<TD>>>,

    /// Named algorithm components (at least one required).
    algorithms: AlgorithmRegistry<TD, Q, P>,

    /// Serving component (optional, defaulted at build).
    serving: Option<Arc<dyn Serving<Q, P>>>,
}

impl<TD, DP, Q, P, A> EngineBuilder<TD, DP, Q, P, A>
where
    TD: Send + Sync + 'static,
    Q: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    /// Create a new engine builder with every slot unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_source: None,
            preparator: None,
            algorithms: AlgorithmRegistry::new(),
            serving: None,
        }
    }

    /// Set the data source component.
    ///
    /// Replaces any previously set data source.
    #[must_use]
    pub fn with_data_source(mut self, source: Arc<dyn DataSource<DP, TD, Q, A>>) -> Self {
        self.data_source = Some(source);
        self
    }

    /// Set the preparator component.
    ///
    /// Replaces any previously set preparator. The preparator's input and
    /// output training data types are the same `TD` by construction.
    #[must_use]
    pub fn with_preparator(mut self, preparator: Arc<dyn Preparator<TD>>) -> Self {
        self.preparator = Some(preparator);
        self
    }

    /// Set the preparator slot to the built-in [`IdentityPreparator`].
    #[must_use]
    pub fn with_default_preparator(mut self) -> Self {
        self.preparator = Some(Arc::new(IdentityPreparator::new()));
        self
    }

    /// Register an algorithm under a name.
    ///
    /// If the name is already taken, the new algorithm replaces the old one
    /// in its original registry position.
    #[must_use]
    pub fn with_algorithm<S: Into<String>>(
        mut self,
        name: S,
        algorithm: Arc<dyn Algorithm<TD, Q, P>>,
    ) -> Self {
        let name = name.into();
        if self.algorithms.insert(name.clone(), algorithm).is_some() {
            tracing::debug!(name = %name, "replaced algorithm registered under existing name");
        }
        self
    }

    /// Set the serving component.
    ///
    /// Replaces any previously set serving strategy.
    #[must_use]
    pub fn with_serving(mut self, serving: Arc<dyn Serving<Q, P>>) -> Self {
        self.serving = Some(serving);
        self
    }

    /// Set the serving slot to the built-in [`FirstServing`] strategy.
    #[must_use]
    pub fn with_default_serving(mut self) -> Self {
        self.serving = Some(Arc::new(FirstServing::new()));
        self
    }

    /// Validate the builder state.
    ///
    /// Checks everything [`build`](Self::build) checks, without producing
    /// an engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteConfiguration`] if the data source is
    /// unset or no algorithm is registered, and [`Error::Configuration`]
    /// if an algorithm was registered under an empty name.
    pub fn validate(&self) -> Result<()> {
        if self.data_source.is_none() {
            return Err(Error::incomplete_configuration("no data source set"));
        }

        if self.algorithms.is_empty() {
            return Err(Error::incomplete_configuration("no algorithm registered"));
        }

        if self.algorithms.contains("") {
            return Err(Error::configuration(
                "algorithm registered under an empty name",
            ));
        }

        Ok(())
    }

    /// Validate the current state and snapshot it into an [`Engine`].
    ///
    /// An unset preparator or serving slot is resolved to the built-in
    /// default here. The snapshot shares component handles with the
    /// builder, so mutating the builder afterwards never affects an engine
    /// it already produced, and one builder can produce several engines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteConfiguration`] if the data source is
    /// unset or no algorithm is registered, and [`Error::Configuration`]
    /// if an algorithm was registered under an empty name. A failed build
    /// never yields an engine.
    pub fn build(&self) -> Result<Engine<TD, DP, Q, P, A>> {
        self.validate()?;

        let data_source = self
            .data_source
            .clone()
            .ok_or_else(|| Error::incomplete_configuration("no data source set"))?;

        let preparator: Arc<dyn Preparator<TD>> = match &self.preparator {
            Some(preparator) => Arc::clone(preparator),
            None => {
                tracing::debug!("preparator slot unset, using identity preparator");
                Arc::new(IdentityPreparator::new())
            }
        };

        let serving: Arc<dyn Serving<Q, P>> = match &self.serving {
            Some(serving) => Arc::clone(serving),
            None => {
                tracing::debug!("serving slot unset, using first-result serving");
                Arc::new(FirstServing::new())
            }
        };

        let engine = Engine::from_parts(
            data_source,
            preparator,
            self.algorithms.clone(),
            serving,
        );

        tracing::info!(
            data_source = engine.data_source().name(),
            algorithms = engine.algorithms().len(),
            "engine assembled"
        );

        Ok(engine)
    }

    /// Check if all required slots are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.data_source.is_some() && !self.algorithms.is_empty()
    }

    /// Get information about the current builder state.
    #[must_use]
    pub fn info(&self) -> BuilderInfo {
        BuilderInfo {
            has_data_source: self.data_source.is_some(),
            has_preparator: self.preparator.is_some(),
            has_serving: self.serving.is_some(),
            algorithm_count: self.algorithms.len(),
            is_complete: self.is_complete(),
        }
    }
}

impl<TD, DP, Q, P, A> Default for EngineBuilder<TD, DP, Q, P, A>
where
    TD: Send + Sync + 'static,
    Q: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<TD, DP, Q, P, A> std::fmt::Debug for EngineBuilder<TD, DP, Q, P, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineBuilder")
            .field(
                "data_source",
                &self.data_source.as_ref().map(|source| source.name()),
            )
            .field(
                "preparator",
                &self.preparator.as_ref().map(|preparator| preparator.name()),
            )
            .field("algorithms", &self.algorithms.names())
            .field(
                "serving",
                &self.serving.as_ref().map(|serving| serving.name()),
            )
            .finish()
    }
}

/// Information about the builder state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderInfo {
    /// Whether a data source is set.
    pub has_data_source: bool,

    /// Whether a preparator is explicitly set.
    pub has_preparator: bool,

    /// Whether a serving strategy is explicitly set.
    pub has_serving: bool,

    /// Number of registered algorithms.
    pub algorithm_count: usize,

    /// Whether all required slots are set.
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::traits::EvalStream;

    #[derive(Debug)]
    struct StubSource;

    #[async_trait]
    impl DataSource<(), String, String, String> for StubSource {
        async fn read_training(&self) -> Result<(String, ())> {
            Ok(("training".to_string(), ()))
        }

        async fn read_eval(&self) -> Result<EvalStream<String, String>> {
            Ok(Box::pin(futures::stream::empty()))
        }
    }

    #[derive(Debug)]
    struct StubAlgorithm;

    #[async_trait]
    impl Algorithm<String, String, String> for StubAlgorithm {
        async fn predict(&self, _data: &String, query: &String) -> Result<String> {
            Ok(query.clone())
        }
    }

    fn source() -> Arc<dyn DataSource<(), String, String, String>> {
        Arc::new(StubSource)
    }

    fn algorithm() -> Arc<dyn Algorithm<String, String, String>> {
        Arc::new(StubAlgorithm)
    }

    #[test]
    fn test_new_builder_is_empty() {
        let builder: EngineBuilder<String, (), String, String, String> = EngineBuilder::new();
        let info = builder.info();

        assert!(!info.has_data_source);
        assert!(!info.has_preparator);
        assert!(!info.has_serving);
        assert_eq!(info.algorithm_count, 0);
        assert!(!info.is_complete);
    }

    #[test]
    fn test_required_slots_complete_the_builder() {
        let builder = EngineBuilder::new()
            .with_data_source(source())
            .with_algorithm("stub", algorithm());

        assert!(builder.is_complete());
        assert!(builder.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_data_source() {
        let builder: EngineBuilder<String, (), String, String, String> =
            EngineBuilder::new().with_algorithm("stub", algorithm());

        let err = builder.validate().unwrap_err();
        assert!(matches!(err, Error::IncompleteConfiguration { .. }));
    }

    #[test]
    fn test_validate_requires_an_algorithm() {
        let builder: EngineBuilder<String, (), String, String, String> =
            EngineBuilder::new().with_data_source(source());

        let err = builder.validate().unwrap_err();
        assert!(matches!(err, Error::IncompleteConfiguration { .. }));
    }

    #[test]
    fn test_empty_algorithm_name_is_a_configuration_error() {
        let builder = EngineBuilder::new()
            .with_data_source(source())
            .with_algorithm("", algorithm());

        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_default_methods_fill_optional_slots() {
        let builder = EngineBuilder::new()
            .with_data_source(source())
            .with_default_preparator()
            .with_algorithm("stub", algorithm())
            .with_default_serving();

        let info = builder.info();
        assert!(info.has_preparator);
        assert!(info.has_serving);
    }

    #[test]
    fn test_debug_reports_slot_state() {
        let builder = EngineBuilder::new()
            .with_data_source(source())
            .with_algorithm("stub", algorithm());

        let rendered = format!("{builder:?}");
        assert!(rendered.contains("StubSource"));
        assert!(rendered.contains("stub"));
    }
}
