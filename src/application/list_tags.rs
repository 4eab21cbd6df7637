//! List tags use case

use crate::domain::TagPageAggregator;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::Local;
use std::collections::BTreeSet;

/// Service for listing the tag keys used by content
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Execute the tag listing.
    ///
    /// By default only live content contributes keys; `drafts` widens the
    /// scan to every item. Keys come back sorted and deduplicated.
    pub fn execute(&self, drafts: bool) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        let items = self.repository.scan_content(&config)?;

        let tags: BTreeSet<String> = if drafts {
            items
                .iter()
                .flat_map(|item| item.tags.iter().cloned())
                .collect()
        } else {
            TagPageAggregator::used_tags(&items, Local::now().date_naive())
        };

        Ok(tags.into_iter().collect())
    }
}
