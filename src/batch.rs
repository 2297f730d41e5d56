//! Concurrent packaging of independent documents
//!
//! Each job owns its HTML and base directory; jobs share nothing but the
//! read-only configuration, so they run on the rayon pool without locking.

use rayon::prelude::*;

use crate::config::PackagerConfig;
use crate::error::PackageResult;
use crate::inline_resources::{BaseDirectory, PackageReport, Packager};

/// One document to package
#[derive(Debug, Clone)]
pub struct PackageJob {
    pub html: String,
    pub base_dir: BaseDirectory,
}

impl PackageJob {
    #[must_use]
    pub fn new(html: impl Into<String>, base_dir: BaseDirectory) -> Self {
        Self {
            html: html.into(),
            base_dir,
        }
    }
}

/// Package every job in parallel, returning results in input order
#[must_use]
pub fn package_all(jobs: &[PackageJob], config: &PackagerConfig) -> Vec<PackageResult<PackageReport>> {
    let packager = Packager::new(config.clone());

    jobs.par_iter()
        .map(|job| packager.package_with_report(&job.html, &job.base_dir))
        .collect()
}
