//! Static tag registry
//!
//! The registry is immutable reference data loaded once per run and injected
//! into the aggregator. Entry order in the registry file is the iteration
//! order everywhere downstream.

use crate::error::{Result, TagPagesError};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;

fn key_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap())
}

/// A single registry entry with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagDefinition {
    pub key: String,
    pub title: String,
    pub description: String,
    /// Site-relative path for the tag's landing page (e.g. `/tags/css/`)
    pub href: String,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    tags: Vec<TagDefinition>,
}

/// Ordered tag registry
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    entries: Vec<TagDefinition>,
}

impl TagRegistry {
    /// Build a registry from definitions, validating keys and hrefs.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate keys, keys outside `[A-Za-z0-9_-]+`, or
    /// hrefs that are not absolute paths.
    pub fn new(entries: Vec<TagDefinition>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();

        for entry in &entries {
            if !key_regex().is_match(&entry.key) {
                return Err(TagPagesError::Registry(format!(
                    "invalid key '{}'",
                    entry.key
                )));
            }
            if !entry.href.starts_with('/') {
                return Err(TagPagesError::Registry(format!(
                    "href for '{}' must start with '/', got '{}'",
                    entry.key, entry.href
                )));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(TagPagesError::Registry(format!(
                    "duplicate key '{}'",
                    entry.key
                )));
            }
        }

        Ok(TagRegistry { entries })
    }

    /// Parse a registry from the `tags.toml` format: an array of
    /// `[[tags]]` tables whose file order is preserved.
    pub fn parse(text: &str) -> Result<Self> {
        let file: RegistryFile =
            toml::from_str(text).map_err(|e| TagPagesError::Registry(e.message().to_string()))?;
        Self::new(file.tags)
    }

    /// Entries in registry order
    pub fn entries(&self) -> &[TagDefinition] {
        &self.entries
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(key: &str) -> TagDefinition {
        TagDefinition {
            key: key.to_string(),
            title: key.to_uppercase(),
            description: format!("All about {}", key),
            href: format!("/tags/{}/", key),
        }
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let registry = TagRegistry::parse(
            "[[tags]]\n\
             key = \"css\"\n\
             title = \"CSS\"\n\
             description = \"Style\"\n\
             href = \"/tags/css/\"\n\
             \n\
             [[tags]]\n\
             key = \"accessibility\"\n\
             title = \"Accessibility\"\n\
             description = \"A11y\"\n\
             href = \"/tags/accessibility/\"\n",
        )
        .unwrap();

        let keys: Vec<&str> = registry.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["css", "accessibility"]);
    }

    #[test]
    fn test_parse_empty_registry() {
        let registry = TagRegistry::parse("").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_parse_missing_field_is_error() {
        let result = TagRegistry::parse("[[tags]]\nkey = \"css\"\n");
        assert!(matches!(result.unwrap_err(), TagPagesError::Registry(_)));
    }

    #[test]
    fn test_duplicate_key_is_error() {
        let result = TagRegistry::new(vec![definition("css"), definition("css")]);
        match result.unwrap_err() {
            TagPagesError::Registry(msg) => assert!(msg.contains("duplicate key 'css'")),
            other => panic!("Expected Registry error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_key_charset_is_error() {
        let mut bad = definition("css");
        bad.key = "css tricks".to_string();
        let result = TagRegistry::new(vec![bad]);
        assert!(matches!(result.unwrap_err(), TagPagesError::Registry(_)));
    }

    #[test]
    fn test_empty_key_is_error() {
        let mut bad = definition("css");
        bad.key = String::new();
        let result = TagRegistry::new(vec![bad]);
        assert!(matches!(result.unwrap_err(), TagPagesError::Registry(_)));
    }

    #[test]
    fn test_relative_href_is_error() {
        let mut bad = definition("css");
        bad.href = "tags/css/".to_string();
        let result = TagRegistry::new(vec![bad]);
        match result.unwrap_err() {
            TagPagesError::Registry(msg) => assert!(msg.contains("must start with '/'")),
            other => panic!("Expected Registry error, got {:?}", other),
        }
    }

    #[test]
    fn test_contains_key() {
        let registry = TagRegistry::new(vec![definition("css")]).unwrap();
        assert!(registry.contains_key("css"));
        assert!(!registry.contains_key("CSS"));
        assert!(!registry.contains_key("js"));
    }
}
