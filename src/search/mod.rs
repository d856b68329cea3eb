//! Catalog search and filtering.
//!
//! Filtering is a pure function of the record list, the search text and the
//! style selector. Source order is always preserved.

pub mod filter;
pub mod query;

pub use filter::{filter_icons, DisplayState, StyleCounts, StyleFilter};
pub use query::{searchable_text, SearchQuery};
