// ABOUTME: Maps one trending-repository container to a RepositoryRecord.
// ABOUTME: Only the heading link is mandatory; every other field degrades to None on its own.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;
use tracing::warn;

use super::{absolute_url, parse_count, recover, ItemContext};
use crate::dom::selectors::{
    CONTRIBUTORS, DIV, HEADING, IMAGE, LANGUAGE, LANGUAGE_COLOR, LINK, PARAGRAPH, STARS_SINCE,
};
use crate::dom::NodeExt;
use crate::error::{FieldError, ItemError};
use crate::records::{ContributorRecord, RepositoryRecord};

/// Value of a `background-color` (or `color`) declaration in an inline style.
static STYLE_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*(?:background-color|color)\s*:\s*([^;]+)").unwrap()
});

/// Extracts one repository. Fails only when the heading link, which carries
/// the owner and name, is missing or unusable.
pub fn extract_repository(
    item: ElementRef<'_>,
    ctx: &ItemContext<'_>,
) -> Result<RepositoryRecord, ItemError> {
    let description = item.first(&PARAGRAPH).map(|p| p.text_trimmed());

    let href = item
        .first(&HEADING)
        .and_then(|h1| h1.first(&LINK))
        .and_then(|a| a.attr_owned("href"))
        .ok_or_else(|| ItemError::missing_identity(ctx.position, "heading link not found"))?;
    let (username, repository_name) = split_repo_path(&href).ok_or_else(|| {
        ItemError::missing_identity(ctx.position, format!("{href:?} is not an /owner/repo path"))
    })?;
    let url = absolute_url(ctx.base_url, &href);

    let (language, language_color) = match language(item, ctx) {
        Some((name, color)) => (Some(name), Some(color)),
        None => (None, None),
    };

    // Stats row: the div following the first div of the item.
    let stats = item.first(&DIV).and_then(|div| div.next_sibling_tag("div"));
    let stars_link = stats.and_then(|s| s.first(&LINK));

    let total_stars =
        stars_link.and_then(|a| recover(ctx, parse_count("totalStars", &a.text_trimmed())));
    let forks = stars_link
        .and_then(|a| a.next_sibling_tag("a"))
        .and_then(|a| recover(ctx, parse_count("forks", &a.text_trimmed())));
    let stars_since = stats
        .and_then(|s| s.first(&STARS_SINCE))
        .and_then(|span| {
            let text = span.text_trimmed();
            let count = text.split_whitespace().next().unwrap_or_default();
            recover(ctx, parse_count("starsSince", count))
        });

    let built_by = stats
        .and_then(|s| s.first(&CONTRIBUTORS))
        .map(|span| contributors(span, ctx))
        .unwrap_or_default();

    Ok(RepositoryRecord {
        rank: ctx.rank,
        username,
        repository_name,
        url,
        description,
        language,
        language_color,
        total_stars,
        forks,
        stars_since,
        since: ctx.since.to_string(),
        built_by,
    })
}

/// Splits `/owner/repo` into `(owner, repo)`. A trailing slash is ignored.
fn split_repo_path(href: &str) -> Option<(String, String)> {
    let mut segments = href.trim_end_matches('/').rsplit('/');
    let repository_name = segments.next()?;
    let username = segments.next()?;
    Some((username.to_string(), repository_name.to_string()))
}

/// Language name and swatch colour, or neither.
fn language(item: ElementRef<'_>, ctx: &ItemContext<'_>) -> Option<(String, String)> {
    let name = item.first(&LANGUAGE)?.text_trimmed();
    let color = item
        .first(&LANGUAGE_COLOR)
        .ok_or_else(|| FieldError::missing("languageColor"))
        .and_then(|swatch| {
            let style = swatch.attr_owned("style").unwrap_or_default();
            style_color(&style).ok_or(FieldError::InvalidStyle { style })
        });
    let color = recover(ctx, color)?;
    Some((name, color))
}

fn style_color(style: &str) -> Option<String> {
    STYLE_COLOR_RE
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|color| !color.is_empty())
}

/// Each contributor stands alone: one with a missing attribute is dropped
/// without affecting the others.
fn contributors(span: ElementRef<'_>, ctx: &ItemContext<'_>) -> Vec<ContributorRecord> {
    span.select(&LINK)
        .filter_map(|anchor| match contributor(anchor, ctx.base_url) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(position = ctx.position, error = %err, "skipping contributor");
                None
            }
        })
        .collect()
}

fn contributor(anchor: ElementRef<'_>, base_url: &str) -> Result<ContributorRecord, FieldError> {
    let href = anchor
        .attr_owned("href")
        .ok_or_else(|| FieldError::missing("builtBy.href"))?;
    let avatar = anchor
        .first(&IMAGE)
        .and_then(|img| img.attr_owned("src"))
        .ok_or_else(|| FieldError::missing("builtBy.avatar"))?;
    Ok(ContributorRecord {
        username: href.trim_matches('/').to_string(),
        url: absolute_url(base_url, &href),
        avatar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selectors::ITEM_ROW;
    use crate::dom::TrendingDocument;

    fn ctx() -> ItemContext<'static> {
        ItemContext {
            base_url: "https://github.com",
            since: "weekly",
            position: 3,
            rank: 2,
        }
    }

    fn extract(html: &str) -> Result<RepositoryRecord, ItemError> {
        let doc = TrendingDocument::parse(html);
        let items = doc.items(&ITEM_ROW);
        extract_repository(items[0], &ctx())
    }

    #[test]
    fn test_split_repo_path() {
        assert_eq!(
            split_repo_path("/rust-lang/rust"),
            Some(("rust-lang".to_string(), "rust".to_string()))
        );
        assert_eq!(
            split_repo_path("/rust-lang/rust/"),
            Some(("rust-lang".to_string(), "rust".to_string()))
        );
        assert_eq!(split_repo_path("rust"), None);
    }

    #[test]
    fn test_style_color() {
        assert_eq!(
            style_color("background-color: #dea584").as_deref(),
            Some("#dea584")
        );
        assert_eq!(
            style_color("width: 12px; background-color:#3572A5;").as_deref(),
            Some("#3572A5")
        );
        assert_eq!(style_color("width: 12px"), None);
        assert_eq!(style_color(""), None);
    }

    #[test]
    fn test_rank_and_since_come_from_context() {
        let record = extract(
            r#"<article class="Box-row"><h1><a href="/a/b">a / b</a></h1></article>"#,
        )
        .unwrap();
        assert_eq!(record.rank, 2);
        assert_eq!(record.since, "weekly");
        assert_eq!(record.username, "a");
        assert_eq!(record.repository_name, "b");
        assert_eq!(record.url, "https://github.com/a/b");
    }

    #[test]
    fn test_missing_heading_link_is_item_error() {
        let err = extract(r#"<article class="Box-row"><h1>no link</h1><p>x</p></article>"#)
            .unwrap_err();
        assert!(matches!(err, ItemError::MissingIdentity { position: 3, .. }));
    }

    #[test]
    fn test_language_without_swatch_drops_both() {
        let record = extract(
            r#"<article class="Box-row"><h1><a href="/a/b"></a></h1>
               <span itemprop="programmingLanguage">Rust</span></article>"#,
        )
        .unwrap();
        assert_eq!(record.language, None);
        assert_eq!(record.language_color, None);
    }

    #[test]
    fn test_language_with_swatch() {
        let record = extract(
            r#"<article class="Box-row"><h1><a href="/a/b"></a></h1>
               <span class="repo-language-color" style="background-color: #dea584"></span>
               <span itemprop="programmingLanguage"> Rust </span></article>"#,
        )
        .unwrap();
        assert_eq!(record.language.as_deref(), Some("Rust"));
        assert_eq!(record.language_color.as_deref(), Some("#dea584"));
    }

    #[test]
    fn test_bad_counts_degrade_independently() {
        let record = extract(
            r#"<article class="Box-row"><div></div><h1><a href="/a/b"></a></h1>
               <div>
                 <a href="/a/b/stargazers">lots</a>
                 <a href="/a/b/forks">1,001</a>
                 <span class="d-inline-block float-sm-right">12 stars this week</span>
               </div></article>"#,
        )
        .unwrap();
        assert_eq!(record.total_stars, None);
        assert_eq!(record.forks, Some(1001));
        assert_eq!(record.stars_since, Some(12));
    }

    #[test]
    fn test_stats_row_without_links_keeps_stars_since() {
        let record = extract(
            r#"<article class="Box-row"><div></div><h1><a href="/a/b"></a></h1>
               <div><span class="d-inline-block float-sm-right">1,234 stars today</span></div>
               </article>"#,
        )
        .unwrap();
        assert_eq!(record.total_stars, None);
        assert_eq!(record.forks, None);
        assert_eq!(record.stars_since, Some(1234));
    }

    #[test]
    fn test_blank_stars_since_degrades_to_null() {
        let record = extract(
            r#"<article class="Box-row"><div></div><h1><a href="/a/b"></a></h1>
               <div>
                 <a href="/a/b/stargazers">7</a>
                 <a href="/a/b/forks">3</a>
                 <span class="d-inline-block float-sm-right">   </span>
               </div></article>"#,
        )
        .unwrap();
        assert_eq!(record.repository_name, "b");
        assert_eq!(record.total_stars, Some(7));
        assert_eq!(record.forks, Some(3));
        assert_eq!(record.stars_since, None);
    }

    #[test]
    fn test_contributor_without_avatar_is_dropped() {
        let record = extract(
            r#"<article class="Box-row"><div></div><h1><a href="/a/b"></a></h1>
               <div><span class="d-inline-block mr-3">Built by
                 <a href="/alice"><img src="https://avatars.example/alice.png"></a>
                 <a href="/bob"></a>
                 <a><img src="https://avatars.example/nobody.png"></a>
                 <a href="/carol/"><img src="https://avatars.example/carol.png"></a>
               </span></div></article>"#,
        )
        .unwrap();
        let names: Vec<_> = record.built_by.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "carol"]);
        assert_eq!(record.built_by[1].url, "https://github.com/carol/");
        assert_eq!(record.built_by[0].avatar, "https://avatars.example/alice.png");
    }

    #[test]
    fn test_missing_stats_row_yields_nulls_and_empty_list() {
        let record = extract(
            r#"<article class="Box-row"><h1><a href="/a/b"></a></h1><p>only text</p></article>"#,
        )
        .unwrap();
        assert_eq!(record.description.as_deref(), Some("only text"));
        assert_eq!(record.total_stars, None);
        assert_eq!(record.forks, None);
        assert_eq!(record.stars_since, None);
        assert!(record.built_by.is_empty());
    }
}
