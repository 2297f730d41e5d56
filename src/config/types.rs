//! Core configuration types for packaging
//!
//! This module contains the `PackagerConfig` struct that controls which
//! rewriting passes run and how large an embedded resource may be.

use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_MAX_RESOURCE_BYTES;

/// Configuration for a packaging run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagerConfig {
    /// Maximum size in bytes for embedding a single resource.
    /// Larger files keep their original reference.
    /// `None` embeds everything regardless of size.
    pub(crate) max_resource_bytes: Option<u64>,

    /// Convert `Npt` lengths to `Mpx` after resource embedding
    pub(crate) normalize_units: bool,

    /// Replace local `<link rel="stylesheet">` elements with `<style>` blocks
    pub(crate) inline_stylesheets: bool,

    /// Rewrite `url()` references inside `style="..."` attributes
    pub(crate) embed_style_attributes: bool,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            max_resource_bytes: Some(DEFAULT_MAX_RESOURCE_BYTES),
            normalize_units: true,
            inline_stylesheets: true,
            embed_style_attributes: true,
        }
    }
}
