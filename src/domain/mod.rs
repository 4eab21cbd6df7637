//! Domain layer - Business logic and domain models

pub mod aggregate;
pub mod content;
pub mod paginate;
pub mod registry;

pub use aggregate::{AggregateOptions, TagPageAggregator, TagView, TagViewData};
pub use content::{ContentItem, FrontMatter};
pub use paginate::{paginate, Page, PageMeta, PaginateOptions};
pub use registry::{TagDefinition, TagRegistry};
