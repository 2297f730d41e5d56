//! Configuration module for packaging
//!
//! This module provides the `PackagerConfig` struct and its builder for
//! choosing which rewriting passes run and the per-resource size limit.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::PackagerConfigBuilder;
pub use types::PackagerConfig;
