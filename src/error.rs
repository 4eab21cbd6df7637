//! Error types for tagpages

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagpages application
#[derive(Debug, Error)]
pub enum TagPagesError {
    #[error("Not a tagpages project: {0}")]
    NotProjectDirectory(PathBuf),

    #[error("Invalid tag registry: {0}")]
    Registry(String),

    #[error("Invalid front matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Registry check failed: {0} tag(s) in use but not registered")]
    UnregisteredTags(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagPagesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagPagesError::NotProjectDirectory(_) => 2,
            TagPagesError::Registry(_) => 3,
            TagPagesError::FrontMatter { .. } => 4,
            TagPagesError::UnregisteredTags(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagPagesError::NotProjectDirectory(path) => {
                format!(
                    "Not a tagpages project: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagpages init' in this directory to create a new project\n\
                    • Navigate to an existing tagpages project\n\
                    • Set TAGPAGES_ROOT environment variable to your project path",
                    path.display()
                )
            }
            TagPagesError::Registry(msg) => {
                format!(
                    "Invalid tag registry: {}\n\n\
                    Suggestions:\n\
                    • Registry entries need key, title, description and href\n\
                    • Keys may only contain letters, digits, hyphens and underscores\n\
                    • hrefs must be absolute paths (e.g. /tags/css/)\n\
                    • Each key may appear only once",
                    msg
                )
            }
            TagPagesError::FrontMatter { path, message } => {
                format!(
                    "Invalid front matter in {}: {}\n\n\
                    Suggestions:\n\
                    • Front matter is TOML between '+++' lines at the top of the file\n\
                    • Dates are quoted strings in YYYY-MM-DD form (e.g. date = \"2025-01-15\")\n\
                    • Tags are an array of strings (e.g. tags = [\"css\", \"performance\"])",
                    path.display(),
                    message
                )
            }
            TagPagesError::UnregisteredTags(count) => {
                format!(
                    "Registry check failed: {} tag(s) in use but not registered\n\n\
                    Suggestions:\n\
                    • Unregistered tags are silently dropped from build output\n\
                    • Add the missing entries to tags.toml\n\
                    • Or remove the stray tags from the content front matter",
                    count
                )
            }
            TagPagesError::Config(msg) => {
                if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected format: DD-MM-YYYY\n\
                        Example: tagpages list --from 17-01-2025 --to 31-01-2025",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagPagesError
pub type Result<T> = std::result::Result<T, TagPagesError>;
