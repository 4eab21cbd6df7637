//! List content items use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::{Local, NaiveDate};

/// Options for the content inventory listing
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Include non-live items
    pub drafts: bool,

    /// Start date filter (inclusive)
    pub from: Option<NaiveDate>,

    /// End date filter (inclusive)
    pub to: Option<NaiveDate>,
}

/// One line of the content inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub live: bool,
}

/// Service for listing content items
pub struct ListItemsService {
    repository: FileSystemRepository,
}

impl ListItemsService {
    /// Create a new list service
    pub fn new(repository: FileSystemRepository) -> Self {
        ListItemsService { repository }
    }

    /// Execute the listing.
    ///
    /// Date bounds filter on the item date; undated items pass both bounds.
    /// Results come back newest first with undated items last.
    pub fn execute(&self, options: &ListOptions) -> Result<Vec<ItemSummary>> {
        let config = self.repository.load_config()?;
        let mut items = self.repository.scan_content(&config)?;

        let today = Local::now().date_naive();

        if !options.drafts {
            items.retain(|item| item.is_live(today));
        }
        if let Some(from_date) = options.from {
            items.retain(|item| item.date.is_none_or(|d| d >= from_date));
        }
        if let Some(to_date) = options.to {
            items.retain(|item| item.date.is_none_or(|d| d <= to_date));
        }

        items.sort_by(|a, b| match (a.date, b.date) {
            (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.path.cmp(&b.path)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.path.cmp(&b.path),
        });

        Ok(items
            .into_iter()
            .map(|item| {
                let live = item.is_live(today);
                ItemSummary {
                    title: item.title,
                    date: item.date,
                    tags: item.tags,
                    live,
                }
            })
            .collect())
    }
}
