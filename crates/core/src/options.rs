// ABOUTME: Configuration for the trending parser: Options plus a fluent TrendingParserBuilder.
// ABOUTME: Defaults target github.com's trending listing markup.

use crate::error::OptionsError;
use crate::parser::TrendingParser;

pub const GITHUB_BASE_URL: &str = "https://github.com";
pub const DEFAULT_CONTAINER_TAG: &str = "article";
pub const DEFAULT_ITEM_SELECTOR: &str = "article.Box-row";

/// Configuration options for a [`TrendingParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Prefix for every relative link in the output, without a trailing `/`.
    pub base_url: String,
    /// Substring the line pre-filter looks for.
    pub container_tag: String,
    /// CSS selector for one item container.
    pub item_selector: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: GITHUB_BASE_URL.to_string(),
            container_tag: DEFAULT_CONTAINER_TAG.to_string(),
            item_selector: DEFAULT_ITEM_SELECTOR.to_string(),
        }
    }
}

/// Builder for constructing TrendingParser instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct TrendingParserBuilder {
    opts: Options,
}

impl TrendingParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the site root used to absolutize links. A trailing `/` is dropped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn container_tag(mut self, tag: impl Into<String>) -> Self {
        self.opts.container_tag = tag.into();
        self
    }

    pub fn item_selector(mut self, selector: impl Into<String>) -> Self {
        self.opts.item_selector = selector.into();
        self
    }

    /// Build the parser. Fails when the item selector is not valid CSS.
    pub fn build(self) -> Result<TrendingParser, OptionsError> {
        TrendingParser::new(self.opts)
    }
}
