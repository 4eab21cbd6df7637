//! Generic pagination utility
//!
//! Splits a sequence into fixed-size page groups carrying index/count
//! metadata for the templating layer. Page title and description come from
//! the lead element of each group.

use serde::Serialize;

/// Display metadata a paginated element contributes to its page
pub trait PageMeta {
    fn page_title(&self) -> &str;
    fn page_description(&self) -> &str;
}

/// One page of a paginated sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub title: String,
    pub href: String,
    pub description: String,
    pub elements: Vec<T>,
    pub index: usize,
    pub pages: usize,
}

/// Pagination settings
#[derive(Debug, Clone)]
pub struct PaginateOptions {
    /// Path prefix shared by all pages (e.g. `/tags/`)
    pub href: String,
    pub per_page: usize,
}

/// Partition `elements` into pages of `per_page`.
///
/// The final page may be short. An empty input yields no pages. Page zero
/// lives at the configured prefix itself; later pages append their one-based
/// number (`/tags/`, `/tags/2/`, ...).
pub fn paginate<T>(elements: &[T], options: &PaginateOptions) -> Vec<Page<T>>
where
    T: PageMeta + Clone,
{
    let per_page = options.per_page.max(1);
    let chunks: Vec<&[T]> = elements.chunks(per_page).collect();
    let pages = chunks.len();

    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let lead = &chunk[0];
            let href = if index == 0 {
                options.href.clone()
            } else {
                format!("{}{}/", options.href, index + 1)
            };

            Page {
                title: lead.page_title().to_string(),
                href,
                description: lead.page_description().to_string(),
                elements: chunk.to_vec(),
                index,
                pages,
            }
        })
        .collect()
}
