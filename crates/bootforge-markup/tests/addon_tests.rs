//! End-to-end tests for addon/input-group rendering
//!
//! Tests cover:
//! - Raw vs structured descriptors per Bootstrap major version
//! - Button and non-button wrapping
//! - Multi-item descriptors
//! - Custom wrapper attributes

use bootforge_core::Attributes;
use bootforge_markup::{addon_content, Addon, AddonContent, AddonItem, AddonSlot};

#[test]
fn test_prepend_v3_plain_addon() {
    let addon = Addon::new().prepend(AddonItem::new("$"));
    assert_eq!(
        addon_content(&addon, AddonSlot::Prepend, 3),
        "<span class=\"input-group-addon\">$</span>"
    );
}

#[test]
fn test_append_v4_button() {
    let addon = Addon::new().append(AddonItem::new("Go").as_button(true));
    assert_eq!(
        addon_content(&addon, AddonSlot::Append, 4),
        "<div class=\"input-group-append\">Go</div>"
    );
}

#[test]
fn test_v5_uses_v4_markup_convention() {
    let addon = Addon::new().prepend(AddonItem::new("@"));
    assert_eq!(
        addon_content(&addon, AddonSlot::Prepend, 5),
        "<div class=\"input-group-prepend\"><span class=\"input-group-text\">@</span></div>"
    );
}

#[test]
fn test_raw_string_verbatim_at_v3() {
    let addon = Addon::new().prepend("<kbd>ctrl</kbd>");
    assert_eq!(addon_content(&addon, AddonSlot::Prepend, 3), "<kbd>ctrl</kbd>");
}

#[test]
fn test_raw_string_wrapped_at_v4() {
    let addon = Addon::new().append("<kbd>ctrl</kbd>");
    assert_eq!(
        addon_content(&addon, AddonSlot::Append, 4),
        "<div class=\"input-group-append\"><kbd>ctrl</kbd></div>"
    );
}

#[test]
fn test_item_list_concatenates_in_order() {
    let addon = Addon {
        prepend: Some(AddonContent::Items(vec![
            AddonItem::new("$"),
            AddonItem::new("0.00"),
        ])),
        append: None,
    };
    assert_eq!(
        addon_content(&addon, AddonSlot::Prepend, 3),
        "<span class=\"input-group-addon\">$</span><span class=\"input-group-addon\">0.00</span>"
    );
    assert_eq!(
        addon_content(&addon, AddonSlot::Prepend, 4),
        "<div class=\"input-group-prepend\"><span class=\"input-group-text\">$</span></div>\
         <div class=\"input-group-prepend\"><span class=\"input-group-text\">0.00</span></div>"
    );
}

#[test]
fn test_item_options_carried_through() {
    let mut options = Attributes::new();
    options.set("id", "sign").add_class("text-muted");
    let addon = Addon::new().prepend(AddonItem::new("$").with_options(options));
    assert_eq!(
        addon_content(&addon, AddonSlot::Prepend, 4),
        "<div class=\"input-group-prepend\">\
         <span class=\"text-muted input-group-text\" id=\"sign\">$</span></div>"
    );
}

#[test]
fn test_empty_addon_renders_nothing_for_both_slots() {
    let addon = Addon::new();
    assert_eq!(addon_content(&addon, AddonSlot::Prepend, 3), "");
    assert_eq!(addon_content(&addon, AddonSlot::Append, 5), "");
}
