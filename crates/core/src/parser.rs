// ABOUTME: TrendingParser runs the full pipeline: isolate fragment, parse, extract per item.
// ABOUTME: Stateless between calls; one instance can serve many threads.

use scraper::Selector;
use tracing::debug;

use crate::dom::selectors::ITEM_ROW;
use crate::dom::TrendingDocument;
use crate::error::OptionsError;
use crate::extract::developers::extract_developer;
use crate::extract::extract_all;
use crate::extract::repositories::extract_repository;
use crate::isolate::isolate_fragment;
use crate::options::{Options, TrendingParserBuilder};
use crate::query::TrendingKind;
use crate::records::{DeveloperRecord, RepositoryRecord, TrendingRecord};

/// Turns the HTML of a trending page into records.
///
/// No call ever fails: missing fields become `None`, malformed items are
/// dropped, and a page with no recognizable items yields an empty list.
#[derive(Debug, Clone)]
pub struct TrendingParser {
    opts: Options,
    item_selector: Selector,
}

impl TrendingParser {
    pub fn builder() -> TrendingParserBuilder {
        TrendingParserBuilder::new()
    }

    pub fn new(mut opts: Options) -> Result<Self, OptionsError> {
        opts.base_url = opts.base_url.trim_end_matches('/').to_string();
        let item_selector =
            Selector::parse(&opts.item_selector).map_err(|err| OptionsError::InvalidSelector {
                selector: opts.item_selector.clone(),
                message: err.to_string(),
            })?;
        Ok(Self {
            opts,
            item_selector,
        })
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// The part of `raw_html` that the item parser will see.
    pub fn isolate<'a>(&self, raw_html: &'a str) -> &'a str {
        isolate_fragment(raw_html, &self.opts.container_tag)
    }

    /// Extracts the trending repositories listed in `raw_html`.
    pub fn repositories(&self, raw_html: &str, since: &str) -> Vec<RepositoryRecord> {
        let doc = TrendingDocument::parse(self.isolate(raw_html));
        let items = doc.items(&self.item_selector);
        let records = extract_all(&items, &self.opts.base_url, since, extract_repository);
        debug!(
            containers = items.len(),
            records = records.len(),
            "extracted repositories"
        );
        records
    }

    /// Extracts the trending developers listed in `raw_html`.
    pub fn developers(&self, raw_html: &str, since: &str) -> Vec<DeveloperRecord> {
        let doc = TrendingDocument::parse(self.isolate(raw_html));
        let items = doc.items(&self.item_selector);
        let records = extract_all(&items, &self.opts.base_url, since, extract_developer);
        debug!(
            containers = items.len(),
            records = records.len(),
            "extracted developers"
        );
        records
    }

    /// Runs the extractor matching `kind`.
    pub fn parse(&self, kind: TrendingKind, raw_html: &str, since: &str) -> Vec<TrendingRecord> {
        match kind {
            TrendingKind::Repositories => self
                .repositories(raw_html, since)
                .into_iter()
                .map(TrendingRecord::from)
                .collect(),
            TrendingKind::Developers => self
                .developers(raw_html, since)
                .into_iter()
                .map(TrendingRecord::from)
                .collect(),
        }
    }
}

impl Default for TrendingParser {
    fn default() -> Self {
        Self {
            opts: Options::default(),
            item_selector: ITEM_ROW.clone(),
        }
    }
}
