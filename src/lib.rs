//! Self-contained document packaging
//!
//! Takes the HTML written by a document-to-HTML converter together with the
//! directory holding its images, fonts and stylesheets, and returns a single
//! HTML string with every local resource embedded as a base64 data URI and
//! point lengths converted to pixels.
//!
//! ```no_run
//! use docpack::{BaseDirectory, package};
//!
//! let base_dir = BaseDirectory::new("/tmp/pdf2html_out")?;
//! let html = std::fs::read_to_string("/tmp/pdf2html_out/page.html")?;
//! let self_contained = package(&html, &base_dir)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod inline_resources;
pub mod units;
pub mod utils;

pub use batch::{PackageJob, package_all};
pub use config::PackagerConfig;
pub use error::{PackageError, PackageResult};
pub use inline_resources::{
    BaseDirectory, PackageReport, Packager, ResourceKind, SkipReason, SkippedReference, package,
    package_file,
};
