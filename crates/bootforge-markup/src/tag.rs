//! Plain-string HTML tag builders
//!
//! Attribute values are entity-escaped; element content is emitted
//! verbatim, so callers escape user data with [`encode`] before handing it
//! in. The `class` attribute always renders first, remaining attributes in
//! insertion order, keeping output deterministic.

use bootforge_core::{AttrValue, Attributes};

/// Escape content for safe embedding in HTML text or attribute positions
pub fn encode(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for ch in content.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render an attribute map to its tag-embedded string form
///
/// Each attribute is preceded by a single space; an empty map renders
/// nothing, so `<div{attrs}>` composes either way.
pub fn render_attributes(attrs: &Attributes) -> String {
    let mut out = String::new();
    if !attrs.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&attrs.classes().join(" ")));
        out.push('"');
    }
    for (name, value) in attrs.entries() {
        match value {
            AttrValue::Text(text) => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr(text));
                out.push('"');
            }
            AttrValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Flag(false) => {}
        }
    }
    out
}

/// Render a normal element with content
pub fn tag(name: &str, content: &str, attrs: &Attributes) -> String {
    format!("<{name}{}>{content}</{name}>", render_attributes(attrs))
}

/// Render a void element (`input`, `br`, ...)
pub fn void_tag(name: &str, attrs: &Attributes) -> String {
    format!("<{name}{}>", render_attributes(attrs))
}
