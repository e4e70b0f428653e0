// ABOUTME: Extraction library for a code-hosting site's trending repositories and developers pages.
// ABOUTME: Re-exports the public API: TrendingParser, Options, records, query types and errors.

//! Trending page extraction.
//!
//! Raw page HTML goes through three stages: a line-based pre-filter keeps
//! only the span holding the listing, a lenient HTML parse selects one
//! container per listed entity, and a per-item extractor maps each container
//! to a record. Field failures degrade to `null`, broken items are skipped,
//! and ranks are renumbered so the output is always `1..=N`.
//!
//! # Example
//!
//! ```
//! use trending_core::TrendingParser;
//!
//! let html = r#"
//! <article class="Box-row">
//!   <h1><a href="/octocat/hello-world">octocat / hello-world</a></h1>
//! </article>"#;
//! let repos = TrendingParser::default().repositories(html, "daily");
//! assert_eq!(repos[0].url, "https://github.com/octocat/hello-world");
//! ```

pub mod dom;
pub mod error;
pub mod extract;
pub mod isolate;
pub mod options;
pub mod parser;
pub mod query;
pub mod records;

pub use crate::error::{FieldError, ItemError, OptionsError, QueryError};
pub use crate::extract::parse_count;
pub use crate::isolate::isolate_fragment;
pub use crate::options::{Options, TrendingParserBuilder, GITHUB_BASE_URL};
pub use crate::parser::TrendingParser;
pub use crate::query::{DateRange, TrendingKind, TrendingQuery};
pub use crate::records::{
    ContributorRecord, DeveloperRecord, PopularRepository, RepositoryRecord, TrendingRecord,
};

/// Extracts repositories from `raw_html` with the default github.com settings.
pub fn scrape_repositories(raw_html: &str, since: &str) -> Vec<RepositoryRecord> {
    TrendingParser::default().repositories(raw_html, since)
}

/// Extracts developers from `raw_html` with the default github.com settings.
pub fn scrape_developers(raw_html: &str, since: &str) -> Vec<DeveloperRecord> {
    TrendingParser::default().developers(raw_html, since)
}
