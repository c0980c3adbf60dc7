//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits from the
//! enginekit library for easy importing.
//!
//! # Examples
//!
//! ```rust
//! use enginekit::prelude::*;
//!
//! let params = EngineParams::new()
//!     .add_algorithm_params("als", serde_json::json!({ "rank": 10 }));
//! assert_eq!(params.algorithms.len(), 1);
//! ```

// Re-export core error types
pub use crate::error::{Error, Result};

// Re-export all data types
pub use crate::types::{
    // Registry
    AlgorithmRegistry,
    // Engine types
    Engine,
    EngineInfo,
    // Params
    EngineParams,
};

// Re-export capability traits
pub use crate::traits::{Algorithm, DataSource, EvalStream, Preparator, Serving};

// Re-export builder types
pub use crate::builder::{BuilderInfo, EngineBuilder};

// Re-export default components
pub use crate::defaults::{FirstServing, IdentityPreparator};
