//! `url()` rewriting for CSS text
//!
//! CSS is scanned for `url(...)` tokens only; there is no stylesheet model.
//! Each local, resolvable argument becomes a data URI and every other byte of
//! the input is kept as written.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::context::InlineContext;
use super::resolver;
use super::types::{BaseDirectory, ReferenceKind, ResourceKind};
use crate::config::PackagerConfig;

/// `url(` + optional whitespace + a double-quoted, single-quoted or bare
/// argument + optional whitespace + `)`
static CSS_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)url\(\s*(?:"([^"]*)"|'([^']*)'|([^"'\s)][^\s)]*))\s*\)"#,
    )
    .expect("CSS_URL_RE: hardcoded regex is valid")
});

/// Rewrite every resolvable `url()` in `css_text` relative to `base_dir`
#[must_use]
pub fn rewrite(css_text: &str, base_dir: &BaseDirectory) -> String {
    let config = PackagerConfig::default();
    let mut ctx = InlineContext::new(base_dir, &config);
    rewrite_with(css_text, base_dir.path(), &mut ctx)
}

/// Rewrite `url()` references resolved from `from_dir`, tallying into `ctx`
pub(crate) fn rewrite_with(css_text: &str, from_dir: &Path, ctx: &mut InlineContext<'_>) -> String {
    CSS_URL_RE
        .replace_all(css_text, |caps: &Captures<'_>| {
            let (argument, _) = url_argument(caps);

            match ctx.embed(argument, from_dir, ResourceKind::CssUrl) {
                Some(data_uri) => format!("url({data_uri})"),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Rewrite a linked stylesheet whose text moves into the document
///
/// Local references that stay unresolved are rebased from `from_dir` onto
/// the base directory, so they name the same file from their new location
/// and a later pass resolves them exactly as this one did.
pub(crate) fn rewrite_relocated(
    css_text: &str,
    from_dir: &Path,
    ctx: &mut InlineContext<'_>,
) -> String {
    let base = ctx.base_path();

    CSS_URL_RE
        .replace_all(css_text, |caps: &Captures<'_>| {
            let (argument, quote) = url_argument(caps);

            if let Some(data_uri) = ctx.embed(argument, from_dir, ResourceKind::CssUrl) {
                return format!("url({data_uri})");
            }
            match rebase(argument, from_dir, base) {
                Some(rebased) => format!("url({quote}{rebased}{quote})"),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// The `url()` argument and the quote it was written with
fn url_argument<'t>(caps: &Captures<'t>) -> (&'t str, &'static str) {
    if let Some(m) = caps.get(1) {
        (m.as_str(), "\"")
    } else if let Some(m) = caps.get(2) {
        (m.as_str(), "'")
    } else {
        (caps.get(3).map_or("", |m| m.as_str()), "")
    }
}

fn rebase(reference: &str, from_dir: &Path, base: &Path) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty()
        || from_dir == base
        || resolver::classify(reference) != ReferenceKind::Local
        || Path::new(reference).is_absolute()
    {
        return None;
    }

    let rebased = pathdiff::diff_paths(from_dir.join(reference), base)?;
    Some(rebased.to_string_lossy().replace('\\', "/"))
}
