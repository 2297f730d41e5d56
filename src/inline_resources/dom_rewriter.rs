//! DOM-based resource embedding
//!
//! The document is parsed once with kuchiki's forgiving HTML5 tree builder,
//! every embedding site is rewritten in place, and the tree is serialized once.
//! If nothing was embedded the input text is returned as-is, so documents whose
//! references are all remote or already embedded come back byte-identical.

use kuchiki::traits::*;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use super::context::InlineContext;
use super::css_rewriter;
use super::types::{BaseDirectory, ResourceKind};
use crate::config::PackagerConfig;
use crate::error::{PackageError, PackageResult};

/// Embed `<img src>`, `style=""` and `<style>` resources found in `html_text`
pub fn rewrite(html_text: &str, base_dir: &BaseDirectory) -> PackageResult<String> {
    let config = PackagerConfig::default();
    let mut ctx = InlineContext::new(base_dir, &config);
    rewrite_document(html_text, &mut ctx, &config)
}

pub(crate) fn rewrite_document(
    html_text: &str,
    ctx: &mut InlineContext<'_>,
    config: &PackagerConfig,
) -> PackageResult<String> {
    let document = kuchiki::parse_html().one(html_text);

    // Collected up front: stylesheet inlining detaches nodes during the walk
    let elements: Vec<NodeDataRef<ElementData>> = document.descendants().elements().collect();
    let embedded_before = ctx.embedded();

    embed_image_sources(&elements, ctx);
    if config.embed_style_attributes() {
        rewrite_style_attributes(&elements, ctx);
    }
    rewrite_style_elements(&elements, ctx);
    if config.inline_stylesheets() {
        inline_linked_stylesheets(&elements, ctx);
    }

    if ctx.embedded() == embedded_before {
        return Ok(html_text.to_string());
    }

    serialize(&document)
}

fn embed_image_sources(elements: &[NodeDataRef<ElementData>], ctx: &mut InlineContext<'_>) {
    let base = ctx.base_path();

    for element in elements.iter().filter(|e| is_tag(e, "img")) {
        let Some(src) = non_empty_attr(element, "src") else {
            continue;
        };

        if let Some(data_uri) = ctx.embed(&src, base, ResourceKind::Image) {
            element.attributes.borrow_mut().insert("src", data_uri);
        }
    }
}

fn rewrite_style_attributes(elements: &[NodeDataRef<ElementData>], ctx: &mut InlineContext<'_>) {
    let base = ctx.base_path();

    for element in elements {
        let Some(style) = non_empty_attr(element, "style") else {
            continue;
        };

        let rewritten = css_rewriter::rewrite_with(&style, base, ctx);
        if rewritten != style {
            element.attributes.borrow_mut().insert("style", rewritten);
        }
    }
}

fn rewrite_style_elements(elements: &[NodeDataRef<ElementData>], ctx: &mut InlineContext<'_>) {
    let base = ctx.base_path();

    for element in elements.iter().filter(|e| is_tag(e, "style")) {
        let node = element.as_node();
        let css = node.text_contents();

        let rewritten = css_rewriter::rewrite_with(&css, base, ctx);
        if rewritten != css {
            replace_text(node, rewritten);
        }
    }
}

/// Replace `<link rel="stylesheet" href="local.css">` with an equivalent `<style>`
fn inline_linked_stylesheets(elements: &[NodeDataRef<ElementData>], ctx: &mut InlineContext<'_>) {
    for element in elements.iter().filter(|e| is_tag(e, "link")) {
        let is_stylesheet = element.attributes.borrow().get("rel").is_some_and(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        });
        if !is_stylesheet {
            continue;
        }
        let Some(href) = non_empty_attr(element, "href") else {
            continue;
        };

        let Some((css, css_dir)) = ctx.load_stylesheet(&href) else {
            continue;
        };
        let rewritten = css_rewriter::rewrite_relocated(&css, &css_dir, ctx);

        let Some(style) = new_style_element() else {
            continue;
        };
        if let Some(media) = element.attributes.borrow().get("media") {
            style
                .attributes
                .borrow_mut()
                .insert("media", media.to_string());
        }
        style.as_node().append(NodeRef::new_text(rewritten));

        let link = element.as_node();
        link.insert_before(style.as_node().clone());
        link.detach();
    }
}

/// A detached, empty `<style>` element built by the HTML parser
fn new_style_element() -> Option<NodeDataRef<ElementData>> {
    let fragment = kuchiki::parse_html().one("<style></style>");
    let style = fragment
        .descendants()
        .elements()
        .find(|e| is_tag(e, "style"))?;
    style.as_node().detach();
    Some(style)
}

fn replace_text(node: &NodeRef, text: String) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        child.detach();
    }
    node.append(NodeRef::new_text(text));
}

fn is_tag(element: &NodeDataRef<ElementData>, tag: &str) -> bool {
    &*element.name.local == tag
}

fn non_empty_attr(element: &NodeDataRef<ElementData>, name: &str) -> Option<String> {
    element
        .attributes
        .borrow()
        .get(name)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

fn serialize(document: &NodeRef) -> PackageResult<String> {
    let mut html_output = Vec::new();
    document.serialize(&mut html_output).map_err(|e| {
        PackageError::MalformedMarkup(format!("failed to serialize rewritten document: {e}"))
    })?;

    String::from_utf8(html_output).map_err(|e| {
        PackageError::MalformedMarkup(format!("serialized document is not UTF-8: {e}"))
    })
}
