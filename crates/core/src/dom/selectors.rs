// ABOUTME: Compiled CSS selectors for the trending listing markup.
// ABOUTME: Compiled once on first use and shared read-only by every extraction.

use once_cell::sync::Lazy;
use scraper::Selector;

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Default item container: one per listed repository or developer.
pub static ITEM_ROW: Lazy<Selector> = Lazy::new(|| compile("article.Box-row"));

pub static DIV: Lazy<Selector> = Lazy::new(|| compile("div"));
pub static PARAGRAPH: Lazy<Selector> = Lazy::new(|| compile("p"));
pub static HEADING: Lazy<Selector> = Lazy::new(|| compile("h1"));
pub static LINK: Lazy<Selector> = Lazy::new(|| compile("a"));
pub static IMAGE: Lazy<Selector> = Lazy::new(|| compile("img"));
pub static ARTICLE: Lazy<Selector> = Lazy::new(|| compile("article"));

pub static LANGUAGE: Lazy<Selector> =
    Lazy::new(|| compile(r#"span[itemprop="programmingLanguage"]"#));
pub static LANGUAGE_COLOR: Lazy<Selector> = Lazy::new(|| compile("span.repo-language-color"));

// The next three match the whole class attribute. The language wrapper is
// `d-inline-block ml-0 mr-3` and must not be taken for the contributor strip.

/// "N stars today" counter in the stats row.
pub static STARS_SINCE: Lazy<Selector> =
    Lazy::new(|| compile(r#"span[class="d-inline-block float-sm-right"]"#));

/// "Built by" avatar strip in the stats row.
pub static CONTRIBUTORS: Lazy<Selector> =
    Lazy::new(|| compile(r#"span[class="d-inline-block mr-3"]"#));

/// Description line of a developer's popular repository.
pub static SECONDARY_TEXT: Lazy<Selector> =
    Lazy::new(|| compile(r#"div[class="f6 color-text-secondary mt-1"]"#));
