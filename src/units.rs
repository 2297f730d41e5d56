//! Point to pixel length normalization
//!
//! A plain text pass over the whole document: every `<number>pt` token becomes
//! `<number * 96 / 72>px` with two decimals. The number must not be glued to a
//! preceding identifier character and `pt` must end the word, so `pointer`,
//! `3ptX` and `h12pt` stay as written.
//!
//! Reference text is never touched: `src`/`href`-style attribute values,
//! `url(...)` arguments, `data:` URIs and `http(s)://` URLs are matched as
//! protected spans and copied through, so remote, embedded and unresolved
//! references keep their exact bytes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::utils::{PT_PER_INCH, PX_PER_INCH};

/// Protected reference spans, then a point length
static PT_LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?P<keep>"#,
        r#"(?i:\b(?:src|href|xlink:href|srcset|poster)\s*=\s*)(?:"[^"]*"|'[^']*'|[^\s"'>]+)"#,
        r#"|(?i:url\()\s*(?:"[^"]*"|'[^']*'|[^)]*)[^)]*\)"#,
        r#"|\b(?i:data:)[^\s"'<>)]*"#,
        r#"|\b(?i:https?://)[^\s"'<>)]*"#,
        r#")"#,
        r#"|(?P<num>\d+(?:\.\d+)?|\.\d+)pt\b"#,
    ))
    .expect("PT_LENGTH_RE: hardcoded regex is valid")
});

/// Convert point lengths in `html_text` to pixel lengths
#[must_use]
pub fn normalize(html_text: &str) -> String {
    normalize_cow(html_text).into_owned()
}

/// Like [`normalize`], borrowing the input when nothing changes
#[must_use]
pub fn normalize_cow(html_text: &str) -> Cow<'_, str> {
    PT_LENGTH_RE.replace_all(html_text, |caps: &Captures<'_>| {
        let whole = &caps[0];
        let Some(num) = caps.name("num") else {
            return whole.to_string();
        };
        if glued_to_identifier(html_text, num.start()) {
            return whole.to_string();
        }

        match num.as_str().parse::<f64>() {
            Ok(points) => format_px(points),
            Err(_) => whole.to_string(),
        }
    })
}

/// Pixel equivalent of a point length, e.g. `12.0` -> `16.00px`
#[must_use]
pub fn format_px(points: f64) -> String {
    format!("{:.2}px", points * PX_PER_INCH / PT_PER_INCH)
}

fn glued_to_identifier(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '.')
}
