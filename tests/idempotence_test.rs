//! Packaging an already packaged document changes nothing

mod common;

use common::{IMG_BYTES, ResourceDir};
use docpack::package;
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    r#"<img src="logo.png">"#,
    r#"<img src="missing.png">"#,
    r#"<img src="https://example.com/x.png">"#,
    r#"<img src="../../../etc/passwd">"#,
    r#"<p style="font-size:12pt;margin:0 4.5pt">text</p>"#,
    "<style>.a{background:url(bg.jpg)} .b{src:url('nope.woff')}</style>",
    r#"<div style="background:url('logo.png')">x</div>"#,
    "<span>pointer 3ptX h12pt</span>",
    "<p>unclosed <b>bold",
    "<table><td>cell",
    r#"<img src="https://cdn.example.com/sizes/12pt.png">"#,
    r#"<img src="data:image/svg+xml,<svg width='12pt'/>">"#,
    r#"<div style="background:url(fonts/12pt.woff)">x</div>"#,
    r#"<link rel="stylesheet" href="css/page.css">"#,
    r#"<link rel="stylesheet" href="css/missing.css">"#,
];

fn resources() -> ResourceDir {
    let dir = ResourceDir::new();
    dir.write("logo.png", IMG_BYTES);
    dir.write("bg.jpg", b"jpeg");
    dir.write("img/bg.png", b"base-level-image");
    dir.write("css/fonts/f.woff", b"woff");
    dir.write(
        "css/page.css",
        ".a{background:url(img/bg.png);width:3pt} .b{src:url(fonts/f.woff)} .c{src:url(../bg.jpg)} .d{background:url(https://x.org/9pt.png)}",
    );
    dir
}

#[test]
fn test_second_pass_is_identity() {
    let dir = resources();
    let html = FRAGMENTS.concat();

    let once = package(&html, dir.base()).unwrap();
    let twice = package(&once, dir.base()).unwrap();

    assert_ne!(once, html);
    assert_eq!(twice, once);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_package_is_idempotent(
        parts in prop::collection::vec(prop::sample::select(FRAGMENTS.to_vec()), 0..8)
    ) {
        let dir = resources();
        let html = parts.concat();

        let once = package(&html, dir.base()).unwrap();
        let twice = package(&once, dir.base()).unwrap();

        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_units_normalization_is_a_fixed_point(text in "[a-z0-9 .:;-]{0,64}(pt)?") {
        let once = docpack::units::normalize(&text);
        prop_assert_eq!(docpack::units::normalize(&once), once);
    }
}
