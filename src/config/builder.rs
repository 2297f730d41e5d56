//! Fluent builder for `PackagerConfig`
//!
//! Every field has a default, so `build()` is infallible and the builder can
//! be used to override only what a caller cares about.

use super::types::PackagerConfig;

#[derive(Debug, Clone, Default)]
pub struct PackagerConfigBuilder {
    config: PackagerConfig,
}

impl PackagerConfig {
    /// Create a builder for configuring a `PackagerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> PackagerConfigBuilder {
        PackagerConfigBuilder::default()
    }
}

impl PackagerConfigBuilder {
    /// Cap the size of a single embedded resource
    #[must_use]
    pub fn max_resource_bytes(mut self, limit: u64) -> Self {
        self.config.max_resource_bytes = Some(limit);
        self
    }

    /// Embed resources of any size
    #[must_use]
    pub fn unlimited_resource_size(mut self) -> Self {
        self.config.max_resource_bytes = None;
        self
    }

    #[must_use]
    pub fn normalize_units(mut self, enabled: bool) -> Self {
        self.config.normalize_units = enabled;
        self
    }

    #[must_use]
    pub fn inline_stylesheets(mut self, enabled: bool) -> Self {
        self.config.inline_stylesheets = enabled;
        self
    }

    #[must_use]
    pub fn embed_style_attributes(mut self, enabled: bool) -> Self {
        self.config.embed_style_attributes = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> PackagerConfig {
        self.config
    }
}
