//! Addon/input-group rendering
//!
//! An addon is content rendered adjacent to a form input to build an
//! input-group (a currency sign before the field, a button after it). The
//! markup convention changed across Bootstrap majors: version 3 renders
//! inline `span.input-group-addon` / `span.input-group-btn` pieces, while
//! versions 4 and 5 wrap each piece in a `div.input-group-prepend` /
//! `div.input-group-append` container with non-button content inside a
//! `span.input-group-text`.

use bootforge_core::Attributes;

use crate::tag::tag;

/// Which side of the input an addon attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonSlot {
    /// Before the input
    Prepend,
    /// After the input
    Append,
}

impl AddonSlot {
    /// Parse a slot name; anything other than `"append"` means prepend
    pub fn parse(value: &str) -> Self {
        if value == "append" {
            Self::Append
        } else {
            Self::Prepend
        }
    }

    /// The slot name used in class suffixes
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prepend => "prepend",
            Self::Append => "append",
        }
    }
}

/// A single structured addon piece
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddonItem {
    /// Rendered content (already markup-safe; callers escape user data)
    pub content: String,
    /// Extra HTML attributes for the wrapping element
    pub options: Attributes,
    /// Whether the content is a button (affects wrapping)
    pub as_button: bool,
}

impl AddonItem {
    /// Create an addon piece from content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Attach wrapper attributes
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Mark the content as a button
    pub fn as_button(mut self, as_button: bool) -> Self {
        self.as_button = as_button;
        self
    }
}

/// Addon descriptor for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddonContent {
    /// Opaque pre-rendered markup
    Raw(String),
    /// One structured piece
    Item(AddonItem),
    /// Several structured pieces, rendered in order
    Items(Vec<AddonItem>),
}

impl From<&str> for AddonContent {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for AddonContent {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<AddonItem> for AddonContent {
    fn from(value: AddonItem) -> Self {
        Self::Item(value)
    }
}

/// Prepend/append addon configuration for an input widget
///
/// Constructed per render call and consumed once; missing slots render
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addon {
    /// Content before the input
    pub prepend: Option<AddonContent>,
    /// Content after the input
    pub append: Option<AddonContent>,
}

impl Addon {
    /// Create an empty addon configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prepend slot
    pub fn prepend(mut self, content: impl Into<AddonContent>) -> Self {
        self.prepend = Some(content.into());
        self
    }

    /// Set the append slot
    pub fn append(mut self, content: impl Into<AddonContent>) -> Self {
        self.append = Some(content.into());
        self
    }
}

/// Render the addon content for a slot at a Bootstrap major version
///
/// A missing descriptor renders the empty string. Raw content stays
/// verbatim at version 3 (legacy markup wraps inline elsewhere) and gets
/// the outer container at version 4 and above. Structured items render
/// independently and concatenate in order.
pub fn addon_content(addon: &Addon, slot: AddonSlot, version: u32) -> String {
    let content = match slot {
        AddonSlot::Prepend => &addon.prepend,
        AddonSlot::Append => &addon.append,
    };
    let Some(content) = content else {
        return String::new();
    };
    match content {
        AddonContent::Raw(raw) => {
            if version < 4 {
                raw.clone()
            } else {
                tag("div", raw, &group_attrs(slot))
            }
        }
        AddonContent::Item(item) => render_addon_item(item, slot, version),
        AddonContent::Items(items) => items
            .iter()
            .map(|item| render_addon_item(item, slot, version))
            .collect(),
    }
}

/// Render one structured addon piece with version-appropriate wrapping
pub fn render_addon_item(item: &AddonItem, slot: AddonSlot, version: u32) -> String {
    if version < 4 {
        let mut options = item.options.clone();
        options.add_class(if item.as_button {
            "input-group-btn"
        } else {
            "input-group-addon"
        });
        return tag("span", &item.content, &options);
    }
    let inner = if item.as_button {
        item.content.clone()
    } else {
        let mut options = item.options.clone();
        options.add_class("input-group-text");
        tag("span", &item.content, &options)
    };
    tag("div", &inner, &group_attrs(slot))
}

fn group_attrs(slot: AddonSlot) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.add_class(format!("input-group-{}", slot.as_str()));
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_parse_defaults_to_prepend() {
        assert_eq!(AddonSlot::parse("append"), AddonSlot::Append);
        assert_eq!(AddonSlot::parse("prepend"), AddonSlot::Prepend);
        assert_eq!(AddonSlot::parse("sideways"), AddonSlot::Prepend);
    }

    #[test]
    fn test_legacy_addon_span() {
        let addon = Addon::new().prepend(AddonItem::new("$"));
        assert_eq!(
            addon_content(&addon, AddonSlot::Prepend, 3),
            "<span class=\"input-group-addon\">$</span>"
        );
    }

    #[test]
    fn test_legacy_button_span() {
        let addon = Addon::new().append(AddonItem::new("Go").as_button(true));
        assert_eq!(
            addon_content(&addon, AddonSlot::Append, 3),
            "<span class=\"input-group-btn\">Go</span>"
        );
    }

    #[test]
    fn test_v4_button_unwrapped_inside_container() {
        let addon = Addon::new().append(AddonItem::new("Go").as_button(true));
        assert_eq!(
            addon_content(&addon, AddonSlot::Append, 4),
            "<div class=\"input-group-append\">Go</div>"
        );
    }

    #[test]
    fn test_v4_text_gets_input_group_text_span() {
        let addon = Addon::new().prepend(AddonItem::new("$"));
        assert_eq!(
            addon_content(&addon, AddonSlot::Prepend, 4),
            "<div class=\"input-group-prepend\"><span class=\"input-group-text\">$</span></div>"
        );
    }

    #[test]
    fn test_missing_slot_renders_nothing() {
        let addon = Addon::new().prepend(AddonItem::new("$"));
        assert_eq!(addon_content(&addon, AddonSlot::Append, 4), "");
    }
}
