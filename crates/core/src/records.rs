// ABOUTME: Output records for trending repositories and developers.
// ABOUTME: Field names serialize in camelCase to keep the established JSON shape.

use serde::{Deserialize, Serialize};

/// A user credited in a repository's "Built by" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorRecord {
    pub username: String,
    pub url: String,
    pub avatar: String,
}

/// One row of the trending repositories listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    pub rank: usize,
    pub username: String,
    pub repository_name: String,
    pub url: String,
    pub description: Option<String>,
    /// Set together with `language_color` or not at all.
    pub language: Option<String>,
    pub language_color: Option<String>,
    pub total_stars: Option<u64>,
    pub forks: Option<u64>,
    pub stars_since: Option<u64>,
    pub since: String,
    pub built_by: Vec<ContributorRecord>,
}

/// The repository highlighted next to a trending developer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularRepository {
    pub repository_name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// One row of the trending developers listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperRecord {
    pub rank: usize,
    pub username: String,
    pub name: Option<String>,
    pub url: String,
    pub avatar: Option<String>,
    pub since: String,
    pub popular_repository: PopularRepository,
}

/// Either record kind. Untagged on the wire, so a list serializes exactly
/// like a list of the inner records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrendingRecord {
    Repository(RepositoryRecord),
    Developer(DeveloperRecord),
}

impl TrendingRecord {
    pub fn rank(&self) -> usize {
        match self {
            TrendingRecord::Repository(r) => r.rank,
            TrendingRecord::Developer(d) => d.rank,
        }
    }
}

impl From<RepositoryRecord> for TrendingRecord {
    fn from(record: RepositoryRecord) -> Self {
        TrendingRecord::Repository(record)
    }
}

impl From<DeveloperRecord> for TrendingRecord {
    fn from(record: DeveloperRecord) -> Self {
        TrendingRecord::Developer(record)
    }
}
