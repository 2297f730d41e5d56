//! Getter methods for `PackagerConfig`

use super::types::PackagerConfig;

impl PackagerConfig {
    #[must_use]
    pub fn max_resource_bytes(&self) -> Option<u64> {
        self.max_resource_bytes
    }

    #[must_use]
    pub fn normalize_units(&self) -> bool {
        self.normalize_units
    }

    #[must_use]
    pub fn inline_stylesheets(&self) -> bool {
        self.inline_stylesheets
    }

    #[must_use]
    pub fn embed_style_attributes(&self) -> bool {
        self.embed_style_attributes
    }
}
