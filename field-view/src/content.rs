//! Localized display content for the viewer.
//!
//! A single JSON document keyed by language code carries the text the
//! viewer surfaces: company name, hero headline, typewriter phrases,
//! and the contact section heading. The document is embedded at build
//! time; a malformed document logs a warning and falls back to a
//! built-in English entry, since a missing label is cosmetic and
//! should never take the app down.

use serde::Deserialize;
use std::collections::BTreeMap;

const EMBEDDED: &str = include_str!("../assets/content.json");

#[derive(Debug, Deserialize)]
pub struct ContentBook {
    pub languages: BTreeMap<String, LanguageContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageContent {
    pub company: Company,
    pub hero: Hero,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    pub name: String,
    /// Phrase list cycled by the typewriter effect.
    pub subheadline: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub headline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub heading: String,
}

impl ContentBook {
    /// Parses the embedded content document, falling back to the
    /// built-in English entry if it does not parse.
    pub fn load() -> Self {
        match serde_json::from_str(EMBEDDED) {
            Ok(book) => book,
            Err(err) => {
                log::warn!("embedded content failed to parse, using fallback: {err}");
                Self::fallback()
            }
        }
    }

    fn fallback() -> Self {
        let en = LanguageContent {
            company: Company {
                name: "NEXAFLOW".to_string(),
                subheadline: vec!["Digital Architecture.".to_string()],
            },
            hero: Hero {
                headline: "Engineering the Invisible".to_string(),
            },
            contact: Contact {
                heading: "Open a Channel".to_string(),
            },
        };

        Self {
            languages: BTreeMap::from([("en".to_string(), en)]),
        }
    }

    /// Resolves a preferred language code, falling back to `"en"`,
    /// then to the first available language.
    pub fn resolve_lang(&self, preferred: &str) -> Option<&str> {
        if let Some((key, _)) = self.languages.get_key_value(preferred) {
            return Some(key.as_str());
        }
        if self.languages.contains_key("en") {
            return Some("en");
        }
        self.languages.keys().next().map(String::as_str)
    }

    pub fn get(&self, lang: &str) -> Option<&LanguageContent> {
        self.languages.get(lang)
    }

    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_parses() {
        let book: ContentBook = serde_json::from_str(EMBEDDED).expect("embedded content is valid");
        assert!(book.languages.contains_key("en"));

        let en = &book.languages["en"];
        assert!(!en.company.subheadline.is_empty());
        assert!(!en.hero.headline.is_empty());
    }

    #[test]
    fn resolve_prefers_requested_language() {
        let book = ContentBook::load();
        assert_eq!(book.resolve_lang("en"), Some("en"));
    }

    #[test]
    fn resolve_falls_back_to_english_for_unknown_codes() {
        let book = ContentBook::load();
        assert_eq!(book.resolve_lang("xx"), Some("en"));
    }

    #[test]
    fn resolved_language_outlives_the_query() {
        let book = ContentBook::load();

        // The returned code borrows from the book, not from the
        // (shorter-lived) query string.
        let resolved = {
            let query = String::from("de");
            book.resolve_lang(&query)
        };

        assert_eq!(resolved, Some("de"));
    }

    #[test]
    fn fallback_book_resolves_somewhere() {
        let book = ContentBook::fallback();
        let lang = book.resolve_lang("de").expect("fallback has a language");
        assert!(book.get(lang).is_some());
    }
}
