//! Expected deployment topology module.
//!
//! This module contains the declarative model of the expected wiring
//! between deployed components, and the standard topology declaration
//! for the settlement suite.

pub mod standard;
pub mod types;

// Re-export key types and functions for easier access
pub use standard::standard_topology;
pub use types::{Component, ConfigValue, OwnerRule, Reference, ScalarExpectation, Topology};
