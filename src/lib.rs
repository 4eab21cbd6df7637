//! tagpages - Tag page data generator for static sites
//!
//! A command-line tool that scans a markdown content tree, matches the tags
//! used by live content against a static registry, and emits a paginated
//! tag page listing as a JSON data file for a templating layer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagPagesError;
