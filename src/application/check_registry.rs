//! Registry consistency check use case

use crate::domain::TagPageAggregator;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::Local;

/// Outcome of a registry audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Keys used by live content but missing from the registry.
    /// These silently vanish from build output.
    pub unregistered: Vec<String>,

    /// Registered keys no live content uses, in registry order.
    /// Informational only.
    pub unused: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.unregistered.is_empty() && self.unused.is_empty()
    }
}

/// Service for auditing the registry against content
pub struct CheckRegistryService {
    repository: FileSystemRepository,
}

impl CheckRegistryService {
    /// Create a new check service
    pub fn new(repository: FileSystemRepository) -> Self {
        CheckRegistryService { repository }
    }

    /// Execute the audit
    pub fn execute(&self) -> Result<CheckReport> {
        let config = self.repository.load_config()?;
        let registry = self.repository.load_registry(&config)?;
        let items = self.repository.scan_content(&config)?;

        let used = TagPageAggregator::used_tags(&items, Local::now().date_naive());

        let unregistered = TagPageAggregator::unregistered(&registry, &used);
        let unused = registry
            .entries()
            .iter()
            .filter(|entry| !used.contains(&entry.key))
            .map(|entry| entry.key.clone())
            .collect();

        Ok(CheckReport {
            unregistered,
            unused,
        })
    }
}
