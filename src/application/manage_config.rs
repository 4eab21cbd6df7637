//! Config management use case

use crate::error::{Result, TagPagesError};
use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository, SETTABLE_KEYS};

/// Service for managing project configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        config.get(key).ok_or_else(|| {
            TagPagesError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}, created",
                key,
                SETTABLE_KEYS.join(", ")
            ))
        })
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        config.set(key, value)?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<SiteConfig> {
        self.repository.load_config()
    }
}
