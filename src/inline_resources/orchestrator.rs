//! Packaging entry points
//!
//! `package` runs the DOM resource rewriter and then the unit normalizer.
//! Resource problems never fail a call; the only hard error is markup that
//! cannot be read or serialized at all.

use std::fs;
use std::path::Path;

use super::context::InlineContext;
use super::dom_rewriter;
use super::types::{BaseDirectory, PackageReport};
use crate::config::PackagerConfig;
use crate::error::{PackageError, PackageResult};
use crate::units;

/// Reusable packager holding a configuration
///
/// Holds no per-call state, so one instance can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Packager {
    config: PackagerConfig,
}

impl Packager {
    #[must_use]
    pub fn new(config: PackagerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PackagerConfig {
        &self.config
    }

    /// Produce self-contained HTML from converter output
    pub fn package(&self, html_text: &str, base_dir: &BaseDirectory) -> PackageResult<String> {
        self.package_with_report(html_text, base_dir)
            .map(|report| report.html)
    }

    /// Produce self-contained HTML plus a tally of embedded and skipped references
    pub fn package_with_report(
        &self,
        html_text: &str,
        base_dir: &BaseDirectory,
    ) -> PackageResult<PackageReport> {
        let mut ctx = InlineContext::new(base_dir, &self.config);
        let rewritten = dom_rewriter::rewrite_document(html_text, &mut ctx, &self.config)?;

        let html = if self.config.normalize_units() {
            units::normalize(&rewritten)
        } else {
            rewritten
        };

        let (embedded, skipped) = ctx.finish();
        log::debug!(
            "Packaged document from {}: {embedded} embedded, {} skipped",
            base_dir.path().display(),
            skipped.len()
        );

        Ok(PackageReport {
            html,
            embedded,
            skipped,
        })
    }

    /// Read the converter's HTML file and package it
    pub fn package_file(
        &self,
        html_path: impl AsRef<Path>,
        base_dir: &BaseDirectory,
    ) -> PackageResult<PackageReport> {
        let html_text = read_markup(html_path.as_ref())?;
        self.package_with_report(&html_text, base_dir)
    }
}

/// Package `html_text` with the default configuration
pub fn package(html_text: &str, base_dir: &BaseDirectory) -> PackageResult<String> {
    Packager::default().package(html_text, base_dir)
}

/// Package the HTML file at `html_path` with the default configuration
pub fn package_file(html_path: impl AsRef<Path>, base_dir: &BaseDirectory) -> PackageResult<String> {
    Packager::default()
        .package_file(html_path, base_dir)
        .map(|report| report.html)
}

fn read_markup(path: &Path) -> PackageResult<String> {
    let bytes = fs::read(path).map_err(|source| PackageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| {
        PackageError::MalformedMarkup(format!("{} is not UTF-8 text", path.display()))
    })
}
