//! Core data types for engine assembly.
//!
//! This module defines the assembled [`Engine`], the insertion-ordered
//! [`AlgorithmRegistry`] it carries, and the opaque per-slot
//! [`EngineParams`] container handed to the execution layer.

pub mod engine;
pub mod params;
pub mod registry;

pub use engine::{Engine, EngineInfo};
pub use params::EngineParams;
pub use registry::AlgorithmRegistry;
