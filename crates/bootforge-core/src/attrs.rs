//! HTML attribute maps
//!
//! [`Attributes`] keeps attribute entries in insertion order and gives the
//! `class` attribute dedicated handling: it is a deduplicated,
//! order-preserving token list so class add/remove operations are
//! idempotent. Rendering to an attribute string is the markup layer's job;
//! this type only owns the data.

/// An attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A plain string value (`name="value"`)
    Text(String),
    /// A boolean flag attribute (`disabled`); `false` renders nothing
    Flag(bool),
}

/// Ordered HTML attribute map with class-token handling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    classes: Vec<String>,
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an attribute map from name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attrs = Self::new();
        for (name, value) in pairs {
            attrs.set(name, value);
        }
        attrs
    }

    /// Set an attribute value; setting `class` replaces the token list
    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> &mut Self {
        let name = name.as_ref();
        let value = value.into();
        if name == "class" {
            self.classes.clear();
            self.add_class(value);
            return self;
        }
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = AttrValue::Text(value),
            None => self.entries.push((name.to_string(), AttrValue::Text(value))),
        }
        self
    }

    /// Set a boolean flag attribute
    pub fn set_flag(&mut self, name: impl AsRef<str>, on: bool) -> &mut Self {
        let name = name.as_ref();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = AttrValue::Flag(on),
            None => self.entries.push((name.to_string(), AttrValue::Flag(on))),
        }
        self
    }

    /// Get a string attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|(key, value)| match value {
            AttrValue::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether an attribute is present (for `class`, whether any token is set)
    pub fn contains(&self, name: &str) -> bool {
        if name == "class" {
            return !self.classes.is_empty();
        }
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Remove an attribute; returns whether anything was removed
    pub fn remove(&mut self, name: &str) -> bool {
        if name == "class" {
            let had = !self.classes.is_empty();
            self.classes.clear();
            return had;
        }
        let before = self.entries.len();
        self.entries.retain(|(key, _)| key != name);
        self.entries.len() != before
    }

    /// Add class tokens (whitespace-separated); duplicates are ignored
    pub fn add_class(&mut self, class: impl AsRef<str>) -> &mut Self {
        for token in class.as_ref().split_whitespace() {
            if !self.classes.iter().any(|existing| existing == token) {
                self.classes.push(token.to_string());
            }
        }
        self
    }

    /// Remove class tokens (whitespace-separated); absent tokens are a no-op
    pub fn remove_class(&mut self, class: impl AsRef<str>) -> &mut Self {
        for token in class.as_ref().split_whitespace() {
            self.classes.retain(|existing| existing != token);
        }
        self
    }

    /// Whether a single class token is present
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|existing| existing == token)
    }

    /// The class token list, in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Non-class attribute entries, in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Whether the map holds no attributes at all
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.entries.is_empty()
    }

    /// Layer `overrides` on top of `defaults`
    ///
    /// Override entries win per attribute name; an override class list, when
    /// non-empty, replaces the default one outright.
    pub fn merged(defaults: &Attributes, overrides: &Attributes) -> Attributes {
        let mut merged = defaults.clone();
        for (name, value) in &overrides.entries {
            match merged.entries.iter_mut().find(|(key, _)| key == name) {
                Some((_, existing)) => *existing = value.clone(),
                None => merged.entries.push((name.clone(), value.clone())),
            }
        }
        if !overrides.classes.is_empty() {
            merged.classes = overrides.classes.clone();
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tokens_dedup_preserve_order() {
        let mut attrs = Attributes::new();
        attrs.add_class("badge badge-secondary");
        attrs.add_class("badge");
        assert_eq!(attrs.classes(), ["badge", "badge-secondary"]);
    }

    #[test]
    fn test_add_class_idempotent() {
        let mut attrs = Attributes::new();
        attrs.add_class("float-right");
        attrs.add_class("float-right");
        assert_eq!(attrs.classes(), ["float-right"]);
    }

    #[test]
    fn test_remove_class() {
        let mut attrs = Attributes::new();
        attrs.add_class("float-right foo");
        attrs.remove_class("float-right");
        assert_eq!(attrs.classes(), ["foo"]);
        attrs.remove_class("not-present");
        assert_eq!(attrs.classes(), ["foo"]);
    }

    #[test]
    fn test_set_class_replaces_tokens() {
        let mut attrs = Attributes::new();
        attrs.add_class("a b");
        attrs.set("class", "c d");
        assert_eq!(attrs.classes(), ["c", "d"]);
    }

    #[test]
    fn test_set_get_remove() {
        let mut attrs = Attributes::new();
        attrs.set("id", "w0").set_flag("disabled", true);
        assert_eq!(attrs.get("id"), Some("w0"));
        assert!(attrs.contains("disabled"));
        assert!(attrs.remove("id"));
        assert!(!attrs.remove("id"));
    }

    #[test]
    fn test_merged_overrides_win() {
        let mut defaults = Attributes::new();
        defaults.set("id", "w0").set("role", "menu");
        defaults.add_class("dropdown");
        let mut overrides = Attributes::new();
        overrides.set("id", "custom");
        overrides.add_class("dropdown-menu");

        let merged = Attributes::merged(&defaults, &overrides);
        assert_eq!(merged.get("id"), Some("custom"));
        assert_eq!(merged.get("role"), Some("menu"));
        assert_eq!(merged.classes(), ["dropdown-menu"]);
    }

    #[test]
    fn test_merged_keeps_default_classes_when_no_override() {
        let mut defaults = Attributes::new();
        defaults.add_class("form-control");
        let overrides = Attributes::new();
        let merged = Attributes::merged(&defaults, &overrides);
        assert_eq!(merged.classes(), ["form-control"]);
    }
}
