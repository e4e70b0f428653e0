// ABOUTME: Shared helpers for per-item extraction: counts, absolute URLs and degradation logging.
// ABOUTME: Every field-level failure passes through `recover`, which logs and yields None.

pub mod developers;
pub mod repositories;

use scraper::ElementRef;
use tracing::warn;

use crate::error::{FieldError, ItemError};

/// Per-item inputs shared by both extractors.
#[derive(Debug, Clone, Copy)]
pub struct ItemContext<'a> {
    pub base_url: &'a str,
    pub since: &'a str,
    /// 1-based position of the container on the page.
    pub position: usize,
    /// Rank the record gets if it survives extraction.
    pub rank: usize,
}

/// Runs `extract` over every container, numbering survivors `1..=N` without
/// gaps. Items that fail identity extraction are logged and left out.
pub fn extract_all<'a, T>(
    items: &[ElementRef<'a>],
    base_url: &str,
    since: &str,
    mut extract: impl FnMut(ElementRef<'a>, &ItemContext<'_>) -> Result<T, ItemError>,
) -> Vec<T> {
    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let ctx = ItemContext {
            base_url,
            since,
            position: idx + 1,
            rank: records.len() + 1,
        };
        match extract(*item, &ctx) {
            Ok(record) => records.push(record),
            Err(err) => warn!(position = ctx.position, error = %err, "skipping item"),
        }
    }
    records
}

/// Logs a field-level failure and degrades it to `None`.
pub(crate) fn recover<T>(ctx: &ItemContext<'_>, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                position = ctx.position,
                field = err.field(),
                error = %err,
                "field degraded to null"
            );
            None
        }
    }
}

/// Parses a displayed count such as `"1,234"`.
pub fn parse_count(field: &'static str, text: &str) -> Result<u64, FieldError> {
    let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Err(FieldError::missing(field));
    }
    digits
        .parse::<u64>()
        .map_err(|source| FieldError::InvalidNumber {
            field,
            text: text.to_string(),
            source,
        })
}

/// Joins a site-relative `href` onto the base URL. Absolute hrefs pass through.
pub fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if href.starts_with('/') {
        format!("{}{}", base_url, href)
    } else {
        format!("{}/{}", base_url, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_strips_separators() {
        assert_eq!(parse_count("totalStars", "1,234").unwrap(), 1234);
        assert_eq!(parse_count("totalStars", "1,234,567").unwrap(), 1_234_567);
        assert_eq!(parse_count("forks", " 56 ").unwrap(), 56);
        assert_eq!(parse_count("forks", "0").unwrap(), 0);
    }

    #[test]
    fn test_parse_count_rejects_non_numbers() {
        assert!(matches!(
            parse_count("forks", "1.2k"),
            Err(FieldError::InvalidNumber { field: "forks", .. })
        ));
        assert!(matches!(
            parse_count("forks", "-3"),
            Err(FieldError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_count("starsSince", ""),
            Err(FieldError::Missing { field: "starsSince" })
        ));
        assert!(matches!(
            parse_count("starsSince", ","),
            Err(FieldError::Missing { .. })
        ));
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url("https://github.com", "/octocat/hello-world"),
            "https://github.com/octocat/hello-world"
        );
        assert_eq!(
            absolute_url("https://github.com", "octocat"),
            "https://github.com/octocat"
        );
        assert_eq!(
            absolute_url("https://github.com", "https://example.com/a"),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_recover_maps_errors_to_none() {
        let ctx = ItemContext {
            base_url: "https://github.com",
            since: "daily",
            position: 1,
            rank: 1,
        };
        assert_eq!(recover(&ctx, parse_count("forks", "12")), Some(12));
        assert_eq!(recover(&ctx, parse_count("forks", "n/a")), None);
    }
}
