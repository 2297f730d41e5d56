//! Resolution of resource references against the base directory
//!
//! A reference resolves only when it is local, its canonical path lies inside
//! the base directory and it names a regular file. Everything else is a
//! routine outcome reported through [`Unresolved`], never an error.

use std::fs;
use std::path::Path;

use super::types::{BaseDirectory, ReferenceKind, ResolvedResource, Unresolved};

/// Classify a reference by its scheme (case-insensitive)
#[must_use]
pub fn classify(reference: &str) -> ReferenceKind {
    let reference = reference.trim_start();
    if has_scheme(reference, "data:") {
        ReferenceKind::AlreadyEmbedded
    } else if has_scheme(reference, "http:") || has_scheme(reference, "https:") {
        ReferenceKind::Remote
    } else {
        ReferenceKind::Local
    }
}

/// Resolve `reference` relative to `base_dir`
#[must_use]
pub fn resolve(reference: &str, base_dir: &BaseDirectory) -> Option<ResolvedResource> {
    try_resolve(reference, base_dir).ok()
}

/// Resolve `reference` relative to `base_dir`, keeping the failure reason
pub fn try_resolve(
    reference: &str,
    base_dir: &BaseDirectory,
) -> Result<ResolvedResource, Unresolved> {
    try_resolve_from(reference, base_dir.path(), base_dir)
}

/// Resolve `reference` relative to `from_dir` with containment checked
/// against `base_dir`
///
/// `from_dir` differs from the base directory for `url()` references inside
/// a linked stylesheet, which are relative to the stylesheet itself.
pub fn try_resolve_from(
    reference: &str,
    from_dir: &Path,
    base_dir: &BaseDirectory,
) -> Result<ResolvedResource, Unresolved> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(Unresolved::Empty);
    }

    match classify(reference) {
        ReferenceKind::Remote => return Err(Unresolved::Remote),
        ReferenceKind::AlreadyEmbedded => return Err(Unresolved::AlreadyEmbedded),
        ReferenceKind::Local => {}
    }

    match locate(reference, from_dir, base_dir) {
        Err(Unresolved::Missing) => match decoded_path(reference) {
            Some(decoded) => locate(&decoded, from_dir, base_dir),
            None => Err(Unresolved::Missing),
        },
        outcome => outcome,
    }
}

fn locate(
    reference: &str,
    from_dir: &Path,
    base_dir: &BaseDirectory,
) -> Result<ResolvedResource, Unresolved> {
    let canonical = fs::canonicalize(from_dir.join(reference)).map_err(|_| Unresolved::Missing)?;

    if !base_dir.contains(&canonical) {
        return Err(Unresolved::OutsideBase);
    }

    let metadata = fs::metadata(&canonical).map_err(|_| Unresolved::Missing)?;
    if !metadata.is_file() {
        return Err(Unresolved::NotAFile);
    }

    Ok(ResolvedResource {
        path: canonical,
        size: metadata.len(),
    })
}

/// URL form of a path reference: drop `?query`/`#fragment` and percent-decode.
/// Returns `None` when that changes nothing.
fn decoded_path(reference: &str) -> Option<String> {
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference);
    let decoded = urlencoding::decode(path).ok()?;

    (decoded != reference && !decoded.is_empty()).then(|| decoded.into_owned())
}

fn has_scheme(reference: &str, scheme: &str) -> bool {
    reference
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, BaseDirectory) {
        let root = TempDir::new().unwrap();
        let base = root.path().join("out");
        fs::create_dir_all(base.join("fonts")).unwrap();
        fs::write(base.join("logo.png"), [1u8, 2, 3]).unwrap();
        fs::write(base.join("fonts").join("f 1.woff2"), b"font").unwrap();
        fs::write(root.path().join("secret.txt"), b"secret").unwrap();
        let base_dir = BaseDirectory::new(&base).unwrap();
        (root, base_dir)
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("data:image/png;base64,AAAA"), ReferenceKind::AlreadyEmbedded);
        assert_eq!(classify("DATA:text/plain,x"), ReferenceKind::AlreadyEmbedded);
        assert_eq!(classify("https://example.com/a.png"), ReferenceKind::Remote);
        assert_eq!(classify("HTTP://example.com/a.png"), ReferenceKind::Remote);
        assert_eq!(classify("img/a.png"), ReferenceKind::Local);
        assert_eq!(classify("/abs/a.png"), ReferenceKind::Local);
        assert_eq!(classify("dat"), ReferenceKind::Local);
    }

    #[test]
    fn test_resolves_local_file() {
        let (_root, base) = fixture();
        let resolved = resolve("logo.png", &base).expect("logo resolves");

        assert_eq!(resolved.size(), 3);
        assert!(base.contains(resolved.path()));
        assert!(resolve("./fonts/../logo.png", &base).is_some());
    }

    #[test]
    fn test_rejects_traversal_and_remote() {
        let (_root, base) = fixture();

        assert_eq!(try_resolve("../secret.txt", &base), Err(Unresolved::OutsideBase));
        assert_eq!(
            try_resolve("../../../../../../etc/passwd", &base),
            Err(Unresolved::OutsideBase)
        );
        assert_eq!(try_resolve("https://x.org/logo.png", &base), Err(Unresolved::Remote));
        assert_eq!(try_resolve("data:,x", &base), Err(Unresolved::AlreadyEmbedded));
        assert_eq!(try_resolve("   ", &base), Err(Unresolved::Empty));
    }

    #[test]
    fn test_absolute_paths_are_contained_too() {
        let (root, base) = fixture();
        let inside = base.path().join("logo.png");
        let outside = root.path().join("secret.txt");

        assert!(resolve(inside.to_str().unwrap(), &base).is_some());
        assert_eq!(
            try_resolve(outside.to_str().unwrap(), &base),
            Err(Unresolved::OutsideBase)
        );
    }

    #[test]
    fn test_missing_and_directories() {
        let (_root, base) = fixture();

        assert_eq!(try_resolve("nope.png", &base), Err(Unresolved::Missing));
        assert_eq!(try_resolve("fonts", &base), Err(Unresolved::NotAFile));
    }

    #[test]
    fn test_percent_encoded_and_query_suffix() {
        let (_root, base) = fixture();

        assert!(resolve("fonts/f%201.woff2", &base).is_some());
        assert!(resolve("logo.png?v=3", &base).is_some());
        assert!(resolve("logo.png#frag", &base).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape_is_rejected() {
        let (root, base) = fixture();
        std::os::unix::fs::symlink(root.path().join("secret.txt"), base.path().join("link.txt"))
            .unwrap();

        assert_eq!(try_resolve("link.txt", &base), Err(Unresolved::OutsideBase));
    }
}
