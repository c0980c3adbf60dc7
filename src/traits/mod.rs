//! Capability traits for pluggable engine components.
//!
//! This module defines the contracts that components must implement to
//! occupy one of the four engine slots. The traits provide a consistent
//! interface for different implementations while the shared role type
//! parameters keep the data flowing between stages mutually consistent.

pub mod algorithm;
pub mod data_source;
pub mod preparator;
pub mod serving;

// Re-export all traits for convenience
pub use algorithm::*;
pub use data_source::*;
pub use preparator::*;
pub use serving::*;
