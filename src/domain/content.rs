//! Content items and the visibility predicate
//!
//! Content files are markdown with an optional TOML front matter block
//! delimited by `+++` lines. Missing front matter, and missing fields inside
//! it, fall back to defaults; a malformed block is a hard error naming the
//! file.

use crate::error::{Result, TagPagesError};
use chrono::NaiveDate;
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const FENCE: &str = "+++";

/// Front matter fields recognized on a content file.
///
/// Unknown fields are ignored so content can carry metadata for other build
/// steps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,

    /// Publication date as a quoted YYYY-MM-DD string
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub draft: bool,
}

/// A parsed content file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    /// Path relative to the content directory, `/`-separated
    pub path: PathBuf,

    /// Front matter title, else first heading, else the file stem
    pub title: String,

    pub date: Option<NaiveDate>,

    pub tags: Vec<String>,

    pub draft: bool,
}

impl ContentItem {
    /// Parse a markdown document into a content item.
    ///
    /// # Errors
    ///
    /// Returns an error if the front matter block is unterminated or is not
    /// valid TOML.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let (front, body) = match split_front_matter(text) {
            Split::None => (FrontMatter::default(), text),
            Split::Block(raw, body) => {
                let front: FrontMatter =
                    toml::from_str(raw).map_err(|e| TagPagesError::FrontMatter {
                        path: path.to_path_buf(),
                        message: e.message().to_string(),
                    })?;
                (front, body)
            }
            Split::Unterminated => {
                return Err(TagPagesError::FrontMatter {
                    path: path.to_path_buf(),
                    message: "unterminated front matter block".to_string(),
                });
            }
        };

        let title = front
            .title
            .clone()
            .or_else(|| first_heading(body))
            .unwrap_or_else(|| file_stem(path));

        Ok(ContentItem {
            path: path.to_path_buf(),
            title,
            date: front.date,
            tags: front.tags,
            draft: front.draft,
        })
    }

    /// Visibility predicate: not a draft, and not dated in the future.
    ///
    /// Undated items are live. `today` is captured once per build so the
    /// cutoff is consistent across all items.
    pub fn is_live(&self, today: NaiveDate) -> bool {
        !self.draft && self.date.is_none_or(|d| d <= today)
    }
}

enum Split<'a> {
    /// No front matter block present
    None,
    /// Raw TOML and remaining body
    Block(&'a str, &'a str),
    /// Opening fence without a closing fence
    Unterminated,
}

fn split_front_matter(text: &str) -> Split<'_> {
    let mut segments = text.split_inclusive('\n');
    let Some(first) = segments.next() else {
        return Split::None;
    };
    if first.trim_end() != FENCE {
        return Split::None;
    }

    let start = first.len();
    let mut cursor = start;
    for segment in segments {
        if segment.trim_end() == FENCE {
            let raw = &text[start..cursor];
            let body = &text[cursor + segment.len()..];
            return Split::Block(raw, body);
        }
        cursor += segment.len();
    }

    Split::Unterminated
}

/// Extract the text of the first heading in a markdown body
fn first_heading(body: &str) -> Option<String> {
    let mut in_heading = false;
    let mut heading = String::new();

    for event in MdParser::new(body) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                in_heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = heading.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
                heading.clear();
            }
            Event::Text(text) | Event::Code(text) if in_heading => {
                heading.push_str(&text);
            }
            _ => {}
        }
    }

    None
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}
