// ABOUTME: Addressing of trending listings: date range, listing kind, language filters.
// ABOUTME: Builds the page URL a caller fetches before handing the HTML to the parser.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::QueryError;

/// Period the trending counts cover. Its string form is the `since` value
/// stamped into every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Daily => "daily",
            DateRange::Weekly => "weekly",
            DateRange::Monthly => "monthly",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(DateRange::Daily),
            "weekly" => Ok(DateRange::Weekly),
            "monthly" => Ok(DateRange::Monthly),
            _ => Err(QueryError::InvalidDateRange(s.to_string())),
        }
    }
}

/// Which listing a page holds, and therefore which extractor applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingKind {
    #[default]
    Repositories,
    Developers,
}

impl fmt::Display for TrendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendingKind::Repositories => "repositories",
            TrendingKind::Developers => "developers",
        };
        write!(f, "{}", s)
    }
}

/// One trending listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendingQuery {
    pub kind: TrendingKind,
    /// Programming language slug as used in the site's paths, e.g. `rust`, `c++`.
    pub language: Option<String>,
    pub since: DateRange,
    /// Two-letter spoken language code. Only the repositories listing honours it.
    pub spoken_language_code: Option<String>,
}

impl TrendingQuery {
    pub fn new(kind: TrendingKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn since(mut self, since: DateRange) -> Self {
        self.since = since;
        self
    }

    pub fn spoken_language_code(mut self, code: impl Into<String>) -> Self {
        self.spoken_language_code = Some(code.into());
        self
    }

    /// URL of the listing page under `base_url`.
    ///
    /// `{base}/trending[/developers][/{language}]?since={since}[&spoken_language_code={code}]`
    pub fn url(&self, base_url: &str) -> Result<Url, QueryError> {
        let mut url = Url::parse(base_url)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| QueryError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            segments.pop_if_empty().push("trending");
            if self.kind == TrendingKind::Developers {
                segments.push("developers");
            }
            if let Some(language) = &self.language {
                validate_language(language)?;
                segments.push(language);
            }
        }

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("since", self.since.as_str());
            if self.kind == TrendingKind::Repositories {
                if let Some(code) = &self.spoken_language_code {
                    validate_spoken_language(code)?;
                    pairs.append_pair("spoken_language_code", code);
                }
            }
        }
        Ok(url)
    }
}

fn validate_language(language: &str) -> Result<(), QueryError> {
    let valid = !language.is_empty()
        && language.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '+' | '#' | '.')
        });
    if valid {
        Ok(())
    } else {
        Err(QueryError::InvalidLanguage(language.to_string()))
    }
}

fn validate_spoken_language(code: &str) -> Result<(), QueryError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(())
    } else {
        Err(QueryError::InvalidSpokenLanguage(code.to_string()))
    }
}
