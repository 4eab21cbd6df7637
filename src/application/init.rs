//! Initialize project use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};
use std::fs;
use std::path::Path;

const STARTER_REGISTRY: &str = "\
# Tag registry. File order is the order tag pages come out in.
#
# [[tags]]
# key = \"css\"
# title = \"CSS\"
# description = \"Styling, layout and modern CSS features.\"
# href = \"/tags/css/\"
";

/// Initialize a new project at the specified path.
pub fn init(path: &Path, locale: &str) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = SiteConfig::new(locale);
    repo.save_config(&config)?;

    if !repo.file_exists(&config.registry) {
        repo.write_file(&config.registry, STARTER_REGISTRY)?;
    }
    repo.create_dir_all(&config.content_dir)?;

    println!("Initialized tagpages project at {}", path.display());
    println!("Locale: {}", locale);

    Ok(())
}
