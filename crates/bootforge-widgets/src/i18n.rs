//! Translation source wiring
//!
//! Modules and widgets register a message source per category; lookups fall
//! back from the full locale (`pt-BR`) to the short code (`pt`) to the
//! message itself. Loading translations from disk is the host framework's
//! concern; sources here carry whatever messages the host handed in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use bootforge_core::text;

/// Short language code for a locale (`"fr-FR"` yields `"fr"`)
pub fn short_lang(language: &str) -> String {
    let lower = text::to_lowercase(Some(language));
    lower
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// In-memory message source for one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSource {
    /// Host path the category's translation files live under
    pub base_path: String,
    /// Whether translation applies even for the source language
    pub force_translation: bool,
    messages: BTreeMap<String, BTreeMap<String, String>>,
}

impl MessageSource {
    /// Create a source rooted at a base path
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            force_translation: true,
            messages: BTreeMap::new(),
        }
    }

    /// Add a translation for a language
    pub fn add_message(
        &mut self,
        language: impl Into<String>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> &mut Self {
        self.messages
            .entry(language.into())
            .or_default()
            .insert(message.into(), translation.into());
        self
    }

    /// Look up a translation, trying the full locale then the short code
    pub fn message(&self, language: &str, message: &str) -> Option<&str> {
        if let Some(found) = self
            .messages
            .get(language)
            .and_then(|messages| messages.get(message))
        {
            return Some(found);
        }
        self.messages
            .get(&short_lang(language))
            .and_then(|messages| messages.get(message))
            .map(String::as_str)
    }
}

/// Per-application translation registry
#[derive(Debug, Clone, Default)]
pub struct I18n {
    sources: BTreeMap<String, MessageSource>,
}

impl I18n {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the message source for a category
    ///
    /// An empty category is a no-op; widgets without a message category
    /// simply skip translation wiring.
    pub fn init_i18n(&mut self, category: &str, source: MessageSource) {
        if category.is_empty() {
            return;
        }
        self.sources.insert(category.to_string(), source);
    }

    /// Whether a category (or a registered prefix of it) has a source
    pub fn has_category(&self, category: &str) -> bool {
        self.source_for(category).is_some()
    }

    /// Translate a message, falling back to the message itself
    pub fn translate(&self, category: &str, message: &str, language: &str) -> String {
        self.source_for(category)
            .and_then(|source| source.message(language, message))
            .unwrap_or(message)
            .to_string()
    }

    /// Registered source for a category: exact match, else the longest
    /// registered prefix (sources cover `{category}*`)
    fn source_for(&self, category: &str) -> Option<&MessageSource> {
        if let Some(source) = self.sources.get(category) {
            return Some(source);
        }
        self.sources
            .iter()
            .filter(|(registered, _)| category.starts_with(registered.as_str()))
            .max_by_key(|(registered, _)| registered.len())
            .map(|(_, source)| source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_source() -> MessageSource {
        let mut source = MessageSource::new("@app/messages");
        source
            .add_message("fr", "Clear", "Effacer")
            .add_message("pt-BR", "Clear", "Limpar");
        source
    }

    #[test]
    fn test_short_lang() {
        assert_eq!(short_lang("fr-FR"), "fr");
        assert_eq!(short_lang("pt_BR"), "pt");
        assert_eq!(short_lang("en"), "en");
        assert_eq!(short_lang(""), "");
    }

    #[test]
    fn test_translate_with_short_code_fallback() {
        let mut i18n = I18n::new();
        i18n.init_i18n("fileinput", demo_source());
        assert_eq!(i18n.translate("fileinput", "Clear", "fr-FR"), "Effacer");
        assert_eq!(i18n.translate("fileinput", "Clear", "pt-BR"), "Limpar");
    }

    #[test]
    fn test_translate_falls_back_to_message() {
        let mut i18n = I18n::new();
        i18n.init_i18n("fileinput", demo_source());
        assert_eq!(i18n.translate("fileinput", "Clear", "de"), "Clear");
        assert_eq!(i18n.translate("other", "Clear", "fr"), "Clear");
    }

    #[test]
    fn test_category_prefix_matches() {
        let mut i18n = I18n::new();
        i18n.init_i18n("grid", demo_source());
        // Sources cover "{category}*", so sub-categories resolve too
        assert!(i18n.has_category("grid/export"));
        assert_eq!(i18n.translate("grid/export", "Clear", "fr"), "Effacer");
    }

    #[test]
    fn test_empty_category_is_noop() {
        let mut i18n = I18n::new();
        i18n.init_i18n("", demo_source());
        assert!(!i18n.has_category(""));
    }
}
