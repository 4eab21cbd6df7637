//! Tag page aggregation - from content items to paginated tag pages
//!
//! This module turns a set of content items and a tag registry into the
//! per-tag page groups consumed by the templating layer. Only tags that are
//! both used by live content and present in the registry produce pages, and
//! pages come out in registry order.

use super::{paginate, ContentItem, Page, PageMeta, PaginateOptions, TagRegistry};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Payload handed to the template for one tag page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagViewData {
    /// Always empty; a tag page carries no tags of its own
    pub tags: Vec<String>,
    pub title: String,
    pub subhead: String,
}

/// One registered tag prepared for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagView {
    pub key: String,
    pub title: String,
    pub description: String,
    /// Site-relative path from the registry (e.g. `/tags/css/`)
    pub href: String,
    /// Locale-prefixed output location (e.g. `/en/tags/css/`)
    pub url: String,
    pub data: TagViewData,
}

impl PageMeta for TagView {
    fn page_title(&self) -> &str {
        &self.title
    }

    fn page_description(&self) -> &str {
        &self.description
    }
}

/// Settings for a single aggregation run
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Locale segment prepended to every tag url (e.g. `en`)
    pub locale: String,
    /// Path prefix for the paginated listing (e.g. `/tags/`)
    pub tags_href: String,
}

/// Aggregator for building paginated tag pages
pub struct TagPageAggregator;

impl TagPageAggregator {
    /// Collect the set of tag keys used by live content.
    ///
    /// Draft and future-dated items contribute nothing. Keys are matched
    /// exactly, with no case folding or trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagpages::domain::{ContentItem, TagPageAggregator};
    /// use chrono::NaiveDate;
    /// use std::path::PathBuf;
    ///
    /// let item = ContentItem {
    ///     path: PathBuf::from("posts/grid.md"),
    ///     title: "Grid".to_string(),
    ///     date: None,
    ///     tags: vec!["css".to_string()],
    ///     draft: false,
    /// };
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
    /// let used = TagPageAggregator::used_tags(&[item], today);
    /// assert!(used.contains("css"));
    /// ```
    pub fn used_tags(items: &[ContentItem], today: NaiveDate) -> BTreeSet<String> {
        items
            .iter()
            .filter(|item| item.is_live(today))
            .flat_map(|item| item.tags.iter().cloned())
            .collect()
    }

    /// Build a fresh view for every registry entry whose key is in use.
    ///
    /// Views come out in registry order. Each view is constructed from
    /// scratch so repeated runs never observe state from an earlier one.
    pub fn views(registry: &TagRegistry, used: &BTreeSet<String>, locale: &str) -> Vec<TagView> {
        registry
            .entries()
            .iter()
            .filter(|entry| used.contains(&entry.key))
            .map(|entry| TagView {
                key: entry.key.clone(),
                title: entry.title.clone(),
                description: entry.description.clone(),
                href: entry.href.clone(),
                url: format!("/{}{}", locale, entry.href),
                data: TagViewData {
                    tags: Vec::new(),
                    title: entry.title.clone(),
                    subhead: entry.description.clone(),
                },
            })
            .collect()
    }

    /// Tag keys used by live content but absent from the registry.
    ///
    /// These are the keys the build silently drops; the check command
    /// reports them. Sorted lexicographically.
    pub fn unregistered(registry: &TagRegistry, used: &BTreeSet<String>) -> Vec<String> {
        used.iter()
            .filter(|key| !registry.contains_key(key))
            .cloned()
            .collect()
    }

    /// Run the full aggregation: live filter, registry filter, pagination.
    ///
    /// One page per surviving tag, in registry order. Content with no live
    /// items, or a registry with no matching entries, yields no pages.
    pub fn aggregate(
        items: &[ContentItem],
        registry: &TagRegistry,
        today: NaiveDate,
        options: &AggregateOptions,
    ) -> Vec<Page<TagView>> {
        let used = Self::used_tags(items, today);
        let views = Self::views(registry, &used, &options.locale);

        paginate(
            &views,
            &PaginateOptions {
                href: options.tags_href.clone(),
                per_page: 1,
            },
        )
    }
}
