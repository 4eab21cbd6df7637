//! Configuration management

use crate::error::{Result, TagPagesError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Keys accepted by the config get/set surface. `created` is read-only.
pub const SETTABLE_KEYS: [&str; 5] = ["locale", "content_dir", "registry", "output", "tags_href"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Locale segment prepended to tag urls (e.g. `en`)
    pub locale: String,
    /// Content directory, relative to the project root
    pub content_dir: String,
    /// Registry file, relative to the project root
    pub registry: String,
    /// Build output file, relative to the project root
    pub output: String,
    /// Path prefix for the paginated tag listing
    pub tags_href: String,
    pub created: DateTime<Utc>,
}

impl SiteConfig {
    /// Create a new config with default values
    pub fn new(locale: &str) -> Self {
        SiteConfig {
            locale: locale.to_string(),
            content_dir: "content".to_string(),
            registry: "tags.toml".to_string(),
            output: "_data/tag_pages.json".to_string(),
            tags_href: "/tags/".to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .tagpages/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tagpages").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagPagesError::NotProjectDirectory(path.to_path_buf())
            } else {
                TagPagesError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagPagesError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagpages/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let marker_dir = path.join(".tagpages");
        let config_path = marker_dir.join("config.toml");

        if !marker_dir.exists() {
            fs::create_dir(&marker_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagPagesError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Read a config value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "locale" => Some(self.locale.clone()),
            "content_dir" => Some(self.content_dir.clone()),
            "registry" => Some(self.registry.clone()),
            "output" => Some(self.output.clone()),
            "tags_href" => Some(self.tags_href.clone()),
            "created" => Some(self.created.to_rfc3339()),
            _ => None,
        }
    }

    /// Set a config value by key.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys and for `created`, which is fixed at
    /// init time.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "locale" => self.locale = value.to_string(),
            "content_dir" => self.content_dir = value.to_string(),
            "registry" => self.registry = value.to_string(),
            "output" => self.output = value.to_string(),
            "tags_href" => self.tags_href = value.to_string(),
            "created" => {
                return Err(TagPagesError::Config(
                    "'created' is read-only".to_string(),
                ));
            }
            _ => {
                return Err(TagPagesError::Config(format!(
                    "Unknown config key '{}'. Valid keys: {}",
                    key,
                    SETTABLE_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = SiteConfig::new("en");
        assert_eq!(config.locale, "en");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.registry, "tags.toml");
        assert_eq!(config.output, "_data/tag_pages.json");
        assert_eq!(config.tags_href, "/tags/");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = SiteConfig::new("de");

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".tagpages").exists());
        assert!(temp.path().join(".tagpages/config.toml").exists());

        let loaded = SiteConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = SiteConfig::load_from_dir(temp.path());

        match result.unwrap_err() {
            TagPagesError::NotProjectDirectory(_) => {}
            other => panic!("Expected NotProjectDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".tagpages")).unwrap();
        std::fs::write(temp.path().join(".tagpages/config.toml"), "locale = [").unwrap();

        let result = SiteConfig::load_from_dir(temp.path());

        match result.unwrap_err() {
            TagPagesError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_known_keys() {
        let config = SiteConfig::new("en");
        assert_eq!(config.get("locale").as_deref(), Some("en"));
        assert_eq!(config.get("tags_href").as_deref(), Some("/tags/"));
        assert!(config.get("created").is_some());
        assert_eq!(config.get("unknown"), None);
    }

    #[test]
    fn test_set_known_key() {
        let mut config = SiteConfig::new("en");
        config.set("locale", "fr").unwrap();
        assert_eq!(config.locale, "fr");
    }

    #[test]
    fn test_set_created_is_rejected() {
        let mut config = SiteConfig::new("en");
        let result = config.set("created", "2025-01-01T00:00:00Z");
        match result.unwrap_err() {
            TagPagesError::Config(msg) => assert!(msg.contains("read-only")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_set_unknown_key_is_rejected() {
        let mut config = SiteConfig::new("en");
        let result = config.set("colour", "blue");
        match result.unwrap_err() {
            TagPagesError::Config(msg) => assert!(msg.contains("Unknown config key 'colour'")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
