//! Per-call embedding state
//!
//! One `InlineContext` lives for exactly one packaging call. It ties the
//! resolver and encoder together and tallies what was embedded or skipped.

use std::path::{Path, PathBuf};

use super::encoder;
use super::mime;
use super::resolver;
use super::types::{
    BaseDirectory, EncodeFailure, ResourceKind, SkipReason, SkippedReference, Unresolved,
};
use crate::config::PackagerConfig;

pub(crate) struct InlineContext<'a> {
    base_dir: &'a BaseDirectory,
    max_resource_bytes: Option<u64>,
    embedded: usize,
    skipped: Vec<SkippedReference>,
}

impl<'a> InlineContext<'a> {
    pub(crate) fn new(base_dir: &'a BaseDirectory, config: &PackagerConfig) -> Self {
        Self {
            base_dir,
            max_resource_bytes: config.max_resource_bytes(),
            embedded: 0,
            skipped: Vec::new(),
        }
    }

    pub(crate) fn base_path(&self) -> &'a Path {
        self.base_dir.path()
    }

    pub(crate) fn embedded(&self) -> usize {
        self.embedded
    }

    /// Data URI for `reference`, or `None` if it must stay as written
    pub(crate) fn embed(
        &mut self,
        reference: &str,
        from_dir: &Path,
        kind: ResourceKind,
    ) -> Option<String> {
        let resolved = match resolver::try_resolve_from(reference, from_dir, self.base_dir) {
            Ok(resolved) => resolved,
            Err(reason) => {
                self.skip_unresolved(reference, kind, reason);
                return None;
            }
        };

        match encoder::encode_with_limit(&resolved, self.max_resource_bytes) {
            Ok(data_uri) => {
                self.embedded += 1;
                log::debug!(
                    "Embedded {kind} {reference} as {} ({} bytes)",
                    mime::infer_path(resolved.path()),
                    resolved.size()
                );
                Some(data_uri)
            }
            Err(failure) => {
                self.skip_encode(reference, kind, failure);
                None
            }
        }
    }

    /// Text of a linked stylesheet and the directory its `url()`s are relative to
    pub(crate) fn load_stylesheet(&mut self, reference: &str) -> Option<(String, PathBuf)> {
        let kind = ResourceKind::Stylesheet;
        let resolved = match resolver::try_resolve(reference, self.base_dir) {
            Ok(resolved) => resolved,
            Err(reason) => {
                self.skip_unresolved(reference, kind, reason);
                return None;
            }
        };

        let text = encoder::read_resource(&resolved, self.max_resource_bytes)
            .and_then(|bytes| String::from_utf8(bytes).map_err(|_| EncodeFailure::NotText));

        match text {
            Ok(css) => {
                self.embedded += 1;
                log::debug!("Inlined stylesheet {reference} ({} bytes)", resolved.size());
                let css_dir = resolved
                    .path()
                    .parent()
                    .map_or_else(|| self.base_path().to_path_buf(), Path::to_path_buf);
                Some((css, css_dir))
            }
            Err(failure) => {
                self.skip_encode(reference, kind, failure);
                None
            }
        }
    }

    pub(crate) fn finish(self) -> (usize, Vec<SkippedReference>) {
        (self.embedded, self.skipped)
    }

    fn skip_unresolved(&mut self, reference: &str, kind: ResourceKind, reason: Unresolved) {
        if reason.is_passthrough() {
            return;
        }
        if reason == Unresolved::OutsideBase {
            log::warn!("Refusing {kind} reference outside the base directory: {reference}");
        } else {
            log::debug!("Keeping {kind} reference {reference}: {reason}");
        }
        self.record(reference, kind, reason.into());
    }

    fn skip_encode(&mut self, reference: &str, kind: ResourceKind, failure: EncodeFailure) {
        log::debug!("Keeping {kind} reference {reference}: {failure}");
        self.record(reference, kind, failure.into());
    }

    fn record(&mut self, reference: &str, kind: ResourceKind, reason: SkipReason) {
        self.skipped.push(SkippedReference {
            reference: reference.to_string(),
            kind,
            reason,
        });
    }
}
