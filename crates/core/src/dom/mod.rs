// ABOUTME: Lenient parsing of an isolated fragment into item containers.
// ABOUTME: NodeExt turns every element lookup into an Option so missing markup degrades to None.

pub mod selectors;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// A parsed fragment. Item containers borrow from it for the duration of
/// one extraction.
pub struct TrendingDocument {
    html: Html,
}

impl TrendingDocument {
    /// Parses with the HTML5 fragment algorithm, which accepts markup with no
    /// `<html>`/`<body>` and recovers from unclosed or stray tags.
    pub fn parse(fragment: &str) -> Self {
        Self {
            html: Html::parse_fragment(fragment),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn items(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        let items: Vec<_> = self.html.select(selector).collect();
        debug!(count = items.len(), "item containers found");
        items
    }
}

/// Optional-field accessors over a parsed element.
pub trait NodeExt<'a> {
    /// First descendant matching `selector`.
    fn first(&self, selector: &Selector) -> Option<ElementRef<'a>>;

    /// Closest following sibling element named `tag`.
    fn next_sibling_tag(&self, tag: &str) -> Option<ElementRef<'a>>;

    /// Descendant text with runs of whitespace collapsed to one space and
    /// the ends trimmed.
    fn text_trimmed(&self) -> String;

    fn attr_owned(&self, name: &str) -> Option<String>;
}

impl<'a> NodeExt<'a> for ElementRef<'a> {
    fn first(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }

    fn next_sibling_tag(&self, tag: &str) -> Option<ElementRef<'a>> {
        self.next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == tag)
    }

    fn text_trimmed(&self) -> String {
        let text: String = self.text().collect();
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn attr_owned(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_owned)
    }
}
