use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub fork: bool,
}

/// Response of the third-party contributions calendar API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionTotals {
    #[serde(default)]
    pub total: ContributionTotal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionTotal {
    #[serde(rename = "lastYear", default)]
    pub last_year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubProfile {
    pub public_repos: u32,
    pub commits_last_year: u32,
    pub total_stars: u32,
    pub followers: u32,
    pub language_diversity: u32,
    pub score: u32,
}
