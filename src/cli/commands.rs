//! CLI command definitions

use crate::error::{Result, TagPagesError};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagpages")]
#[command(about = "Tag page data generator for static sites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new project
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Locale segment used in tag urls
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Build the tag page data file
    Build {
        /// Output file (default: the configured output path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List content items
    List {
        /// Include draft and future-dated items
        #[arg(long)]
        drafts: bool,

        /// Start date filter, DD-MM-YYYY (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date filter, DD-MM-YYYY (inclusive)
        #[arg(long)]
        to: Option<String>,
    },

    /// List tag keys used by content
    Tags {
        /// Include tags only used by draft and future-dated items
        #[arg(long)]
        drafts: bool,
    },

    /// Audit the registry against content
    Check,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Parse a DD-MM-YYYY date argument
pub fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%d-%m-%Y")
        .map_err(|_| TagPagesError::Config(format!("Invalid date format: {}", value)))
}
