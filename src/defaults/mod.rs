//! Built-in default components.
//!
//! These are ordinary implementations of the public capability traits,
//! selected by the builder's default methods rather than special-cased in
//! its `build()` logic. Both take no configuration of their own.

pub mod first_serving;
pub mod identity;

pub use first_serving::FirstServing;
pub use identity::IdentityPreparator;
