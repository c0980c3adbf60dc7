//! # enginekit
//!
//! Typed assembly core for machine-learning engines.
//!
//! This crate provides the building blocks for declaring a four-stage
//! ML pipeline ("engine") out of independently swappable components:
//!
//! - **Capability traits**: [`DataSource`], [`Preparator`], [`Algorithm`],
//!   and [`Serving`], the contracts pluggable components implement
//! - **Builder**: [`EngineBuilder`], a fluent API for populating the four
//!   pipeline slots with validation at build time
//! - **Engine**: the immutable, fully resolved configuration a separate
//!   execution layer consumes through read-only accessors
//! - **Default components**: an identity preparator and a first-result
//!   serving strategy, substituted for slots the caller leaves unset
//! - **Error handling**: configuration and component error types with
//!   context
//!
//! The crate assembles and validates wiring only; training and evaluation
//! loops belong to the execution layer that receives the built engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use enginekit::prelude::*;
//! # use async_trait::async_trait;
//! # use std::sync::Arc;
//! # #[derive(Debug)]
//! # struct EventLogSource;
//! # #[async_trait]
//! # impl DataSource<usize, Vec<String>, String, String> for EventLogSource {
//! #     async fn read_training(&self) -> Result<(Vec<String>, usize)> {
//! #         Ok((vec!["view item-1".to_string()], 1))
//! #     }
//! #     async fn read_eval(&self) -> Result<EvalStream<String, String>> {
//! #         Ok(Box::pin(futures::stream::empty()))
//! #     }
//! # }
//! # #[derive(Debug)]
//! # struct PopularityRank;
//! # #[async_trait]
//! # impl Algorithm<Vec<String>, String, String> for PopularityRank {
//! #     async fn predict(&self, data: &Vec<String>, _query: &String) -> Result<String> {
//! #         data.first().cloned().ok_or_else(|| Error::prediction("no training data"))
//! #     }
//! # }
//! let source: Arc<dyn DataSource<usize, Vec<String>, String, String>> =
//!     Arc::new(EventLogSource);
//! let ranker: Arc<dyn Algorithm<Vec<String>, String, String>> = Arc::new(PopularityRank);
//!
//! let engine = Engine::builder()
//!     .with_data_source(source)
//!     .with_algorithm("popularity", ranker)
//!     .build()?;
//!
//! assert_eq!(engine.algorithms().names(), vec!["popularity"]);
//! # Ok::<(), enginekit::Error>(())
//! ```
//!
//! ## Architecture
//!
//! Five role type parameters are threaded through the builder and the
//! engine, keeping the data flowing between stages mutually consistent at
//! compile time:
//!
//! - `TD`: training data, produced by the data source and transformed in
//!   place by the preparator (its input and output are the same type)
//! - `DP`: data parameters produced alongside the training data
//! - `Q`: queries consumed by algorithms and serving
//! - `P`: predictions produced by algorithms and combined by serving
//! - `A`: actual values paired with queries for evaluation only

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used types and traits
pub mod prelude;

// Core modules
pub mod builder;
pub mod defaults;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key types at crate root for convenience
pub use builder::{BuilderInfo, EngineBuilder};
pub use error::{Error, Result};
pub use types::{AlgorithmRegistry, Engine, EngineInfo, EngineParams};

// Re-export traits for convenience
pub use traits::*;

/// Version information for the enginekit library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the enginekit library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
