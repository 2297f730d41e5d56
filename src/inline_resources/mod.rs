//! Resource inlining functionality
//!
//! This module turns converter output plus its resource directory into
//! self-contained HTML: local images, fonts and stylesheets are embedded as
//! base64 data URIs while remote and already-embedded references pass through.

// Sub-modules
mod context;
pub mod css_rewriter;
pub mod dom_rewriter;
pub mod encoder;
pub mod mime;
pub mod orchestrator;
pub mod resolver;
pub mod types;


// Re-exports for public API
pub use orchestrator::{Packager, package, package_file};
pub use resolver::{classify, resolve, try_resolve};
pub use types::{
    BaseDirectory, EncodeFailure, PackageReport, ReferenceKind, ResolvedResource, ResourceKind,
    SkipReason, SkippedReference, Unresolved,
};
