//! Extension based MIME inference
//!
//! MIME types are derived from the file extension only; file content is never
//! sniffed. Unknown extensions fall back to `application/octet-stream`.

use std::path::Path;

use crate::utils::FALLBACK_MIME;

/// Web-facing types a converter's resource directory can contain
static MIME_TYPES: &[(&str, &str)] = &[
    // Fonts
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("eot", "application/vnd.ms-fontobject"),
    // Images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpe", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("svgz", "image/svg+xml"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("ico", "image/x-icon"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("avif", "image/avif"),
    ("apng", "image/apng"),
    // Text
    ("css", "text/css"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("txt", "text/plain"),
    // Documents and media
    ("pdf", "application/pdf"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
];

/// Infer the MIME type for a path or a bare extension
///
/// Accepts `"fonts/a.WOFF2"`, `".png"` or `"png"`. Matching is case-insensitive.
#[must_use]
pub fn infer(path_or_extension: &str) -> &'static str {
    let extension = Path::new(path_or_extension)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_else(|| path_or_extension.trim_start_matches('.'));

    lookup(extension).unwrap_or(FALLBACK_MIME)
}

/// Infer the MIME type for a filesystem path
#[must_use]
pub fn infer_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(lookup)
        .unwrap_or(FALLBACK_MIME)
}

fn lookup(extension: &str) -> Option<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_font_and_image_types() {
        assert_eq!(infer("a.ttf"), "font/ttf");
        assert_eq!(infer("a.otf"), "font/otf");
        assert_eq!(infer("a.woff"), "font/woff");
        assert_eq!(infer("a.woff2"), "font/woff2");
        assert_eq!(infer("a.png"), "image/png");
        assert_eq!(infer("a.jpg"), "image/jpeg");
        assert_eq!(infer("a.jpeg"), "image/jpeg");
        assert_eq!(infer("a.gif"), "image/gif");
        assert_eq!(infer("a.svg"), "image/svg+xml");
        assert_eq!(infer("a.webp"), "image/webp");
    }

    #[test]
    fn test_bare_extensions_and_case() {
        assert_eq!(infer("png"), "image/png");
        assert_eq!(infer(".png"), "image/png");
        assert_eq!(infer("PNG"), "image/png");
        assert_eq!(infer("fonts/Sub.WOFF2"), "font/woff2");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(infer("data.xyz"), "application/octet-stream");
        assert_eq!(infer(""), "application/octet-stream");
        assert_eq!(infer_path(Path::new("/tmp/noext")), "application/octet-stream");
        assert_eq!(infer_path(Path::new("/tmp/bg.JPG")), "image/jpeg");
    }
}
