// ABOUTME: Maps one trending-developer container to a DeveloperRecord.
// ABOUTME: The profile link is mandatory; name, avatar and popular repository degrade to None.

use scraper::ElementRef;

use super::{absolute_url, ItemContext};
use crate::dom::selectors::{ARTICLE, DIV, HEADING, IMAGE, LINK, SECONDARY_TEXT};
use crate::dom::NodeExt;
use crate::error::ItemError;
use crate::records::{DeveloperRecord, PopularRepository};

pub fn extract_developer(
    item: ElementRef<'_>,
    ctx: &ItemContext<'_>,
) -> Result<DeveloperRecord, ItemError> {
    let href = item
        .first(&DIV)
        .and_then(|div| div.first(&LINK))
        .and_then(|a| a.attr_owned("href"))
        .ok_or_else(|| ItemError::missing_identity(ctx.position, "profile link not found"))?;

    let name = item
        .first(&HEADING)
        .and_then(|h1| h1.first(&LINK))
        .map(|a| a.text_trimmed());
    let avatar = item.first(&IMAGE).and_then(|img| img.attr_owned("src"));
    let popular_repository = item
        .first(&ARTICLE)
        .map(|article| popular_repository(article, ctx.base_url))
        .unwrap_or_default();

    Ok(DeveloperRecord {
        rank: ctx.rank,
        username: href.trim_matches('/').to_string(),
        name,
        url: absolute_url(ctx.base_url, &href),
        avatar,
        since: ctx.since.to_string(),
        popular_repository,
    })
}

fn popular_repository(article: ElementRef<'_>, base_url: &str) -> PopularRepository {
    let description = article.first(&SECONDARY_TEXT).map(|div| div.text_trimmed());
    let link = article.first(&HEADING).and_then(|h1| h1.first(&LINK));
    PopularRepository {
        repository_name: link.map(|a| a.text_trimmed()),
        description,
        url: link
            .and_then(|a| a.attr_owned("href"))
            .map(|href| absolute_url(base_url, &href)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selectors::ITEM_ROW;
    use crate::dom::TrendingDocument;

    fn extract(html: &str) -> Result<DeveloperRecord, ItemError> {
        let doc = TrendingDocument::parse(html);
        let items = doc.items(&ITEM_ROW);
        let ctx = ItemContext {
            base_url: "https://github.com",
            since: "monthly",
            position: 1,
            rank: 1,
        };
        extract_developer(items[0], &ctx)
    }

    #[test]
    fn test_full_developer() {
        let record = extract(
            r##"<article class="Box-row d-flex">
                 <a href="#pa-torvalds">1</a>
                 <div class="mx-3"><a href="/torvalds"><img class="avatar" src="https://avatars.example/t.png"></a></div>
                 <div class="d-sm-flex">
                   <h1 class="h3"><a href="/torvalds"> Linus Torvalds </a></h1>
                   <article>
                     <h1 class="h4"><a href="/torvalds/linux">linux</a></h1>
                     <div class="f6 color-text-secondary mt-1">Linux kernel source tree</div>
                   </article>
                 </div>
               </article>"##,
        )
        .unwrap();
        assert_eq!(record.username, "torvalds");
        assert_eq!(record.url, "https://github.com/torvalds");
        assert_eq!(record.name.as_deref(), Some("Linus Torvalds"));
        assert_eq!(record.avatar.as_deref(), Some("https://avatars.example/t.png"));
        assert_eq!(record.since, "monthly");
        assert_eq!(
            record.popular_repository,
            PopularRepository {
                repository_name: Some("linux".to_string()),
                description: Some("Linux kernel source tree".to_string()),
                url: Some("https://github.com/torvalds/linux".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_profile_link_is_item_error() {
        let err = extract(r#"<article class="Box-row"><div>no link</div><h1><a>Name</a></h1></article>"#)
            .unwrap_err();
        assert!(matches!(err, ItemError::MissingIdentity { position: 1, .. }));
    }

    #[test]
    fn test_link_without_href_is_item_error() {
        assert!(extract(r#"<article class="Box-row"><div><a>x</a></div></article>"#).is_err());
    }

    #[test]
    fn test_missing_article_yields_null_leaves() {
        let record = extract(r#"<article class="Box-row"><div><a href="/ghost/"></a></div></article>"#)
            .unwrap();
        assert_eq!(record.username, "ghost");
        assert_eq!(record.name, None);
        assert_eq!(record.avatar, None);
        assert_eq!(record.popular_repository, PopularRepository::default());
    }

    #[test]
    fn test_article_without_description() {
        let record = extract(
            r#"<article class="Box-row"><div><a href="/dev"></a></div>
               <article><h1><a href="/dev/tool">tool</a></h1></article></article>"#,
        )
        .unwrap();
        assert_eq!(record.popular_repository.repository_name.as_deref(), Some("tool"));
        assert_eq!(record.popular_repository.description, None);
    }
}
