//! Shared constants for docpack
//!
//! Default values and fixed ratios used throughout the packager, kept in one
//! place so the pipeline stages agree on them.

/// CSS pixels per inch
///
/// Converter output sizes everything in points; browsers and embedded
/// renderers lay out in CSS pixels. A length of `N` pt becomes
/// `N * PX_PER_INCH / PT_PER_INCH` px.
pub const PX_PER_INCH: f64 = 96.0;

/// Typographic points per inch
pub const PT_PER_INCH: f64 = 72.0;

/// Default maximum size for a single embedded resource: 25MB
pub const DEFAULT_MAX_RESOURCE_BYTES: u64 = 25 * 1024 * 1024;

/// MIME type used when the extension is unknown
pub const FALLBACK_MIME: &str = "application/octet-stream";
