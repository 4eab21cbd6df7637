//! Build tag pages use case
//!
//! Orchestrates the full workflow of turning content and the registry into
//! the JSON data file the templating layer reads.

use crate::domain::{AggregateOptions, TagPageAggregator};
use crate::error::{Result, TagPagesError};
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::Local;
use std::path::PathBuf;

/// Options for a build run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Output file path (None = the configured output)
    pub output: Option<PathBuf>,
}

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub pages: usize,
    pub output_path: PathBuf,
}

/// Service for building the tag page data file
pub struct BuildPagesService {
    repository: FileSystemRepository,
}

impl BuildPagesService {
    /// Create a new build service
    pub fn new(repository: FileSystemRepository) -> Self {
        BuildPagesService { repository }
    }

    /// Execute the build.
    ///
    /// Returns the page count and the path of the written data file. The
    /// visibility cutoff is captured once at the start of the run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registry is missing or invalid
    /// - Any content file has malformed front matter
    /// - The output path falls outside the project directory
    /// - File I/O fails
    pub fn execute(&self, options: BuildOptions) -> Result<BuildOutcome> {
        let config = self.repository.load_config()?;
        let registry = self.repository.load_registry(&config)?;
        let items = self.repository.scan_content(&config)?;

        let today = Local::now().date_naive();
        let pages = TagPageAggregator::aggregate(
            &items,
            &registry,
            today,
            &AggregateOptions {
                locale: config.locale.clone(),
                tags_href: config.tags_href.clone(),
            },
        );

        let json = serde_json::to_string_pretty(&pages)?;

        let output_path = options
            .output
            .unwrap_or_else(|| PathBuf::from(&config.output));
        let output_path = if output_path.is_absolute() {
            output_path
        } else {
            self.repository.root().join(output_path)
        };

        let relative_path = output_path
            .strip_prefix(self.repository.root())
            .map_err(|_| {
                TagPagesError::Config(
                    "Output path must be within the project directory".to_string(),
                )
            })?;

        let relative_str = relative_path
            .to_str()
            .ok_or_else(|| TagPagesError::Config("Invalid output path".to_string()))?;

        self.repository
            .write_file(relative_str, &format!("{}\n", json))?;

        Ok(BuildOutcome {
            pages: pages.len(),
            output_path,
        })
    }
}
