//! File system repository

use crate::domain::{ContentItem, TagRegistry};
use crate::error::{Result, TagPagesError};
use crate::infrastructure::SiteConfig;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for project operations
pub trait SiteRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagpages/config.toml
    fn load_config(&self) -> Result<SiteConfig>;

    /// Save configuration to .tagpages/config.toml
    fn save_config(&self, config: &SiteConfig) -> Result<()>;

    /// Check if .tagpages directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagpages directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the project root.
    ///
    /// Checks the TAGPAGES_ROOT environment variable first, then falls back
    /// to walking up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGPAGES_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_marker_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagPagesError::Config(format!(
                    "TAGPAGES_ROOT is set to '{}' but no .tagpages directory found. \
                    Run 'tagpages init' in that directory or unset TAGPAGES_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the project root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_marker_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TagPagesError::NotProjectDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .tagpages directory
    fn has_marker_dir(path: &Path) -> bool {
        path.join(".tagpages").is_dir()
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &SiteConfig) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_marker_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let marker_dir = self.root.join(".tagpages");

        if marker_dir.exists() {
            return Err(TagPagesError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&marker_dir)?;
        Ok(())
    }
}

// Site file operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Check if a file exists relative to the repository root
    pub fn file_exists(&self, filename: &str) -> bool {
        self.root.join(filename).exists()
    }

    /// Write file content (relative path), creating parent directories
    pub fn write_file(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(TagPagesError::Io)
    }

    /// Create a directory (and parents) relative to the repository root
    pub fn create_dir_all(&self, dir: &str) -> Result<()> {
        let path = self.root.join(dir);
        fs::create_dir_all(path).map_err(TagPagesError::Io)
    }

    /// Load and validate the tag registry named by the config
    pub fn load_registry(&self, config: &SiteConfig) -> Result<TagRegistry> {
        let path = self.root.join(&config.registry);

        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagPagesError::Registry(format!("registry file not found: {}", path.display()))
            } else {
                TagPagesError::Io(e)
            }
        })?;

        TagRegistry::parse(&contents)
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// Scan the content directory for markdown files and parse each one.
    ///
    /// The walk skips dot-directories. Items come back sorted by their
    /// normalized relative path so every run sees the same order.
    pub fn scan_content(&self, config: &SiteConfig) -> Result<Vec<ContentItem>> {
        let content_dir = self.root.join(&config.content_dir);

        if !content_dir.is_dir() {
            return Err(TagPagesError::Config(format!(
                "Content directory not found: {}",
                content_dir.display()
            )));
        }

        let walker = WalkDir::new(&content_dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut paths = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&content_dir) else {
                continue;
            };
            let Some(filename) = Self::normalize_relative_path(rel) else {
                continue;
            };
            if !filename.ends_with(".md") {
                continue;
            }
            paths.push(filename);
        }

        paths.sort();

        let mut items = Vec::with_capacity(paths.len());
        for filename in paths {
            let text = fs::read_to_string(content_dir.join(&filename))?;
            items.push(ContentItem::parse(Path::new(&filename), &text)?);
        }

        Ok(items)
    }
}
