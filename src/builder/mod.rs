//! Builder pattern for assembling engines.
//!
//! This module provides the fluent API for declaring, at construction time,
//! which concrete component implementations populate each pipeline slot,
//! with validation performed when the engine is built.

pub mod engine;

pub use engine::{BuilderInfo, EngineBuilder};
