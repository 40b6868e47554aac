use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::PlatformConfig;
use crate::error::{Error, Result};
use crate::leetcode::score::profile_from_responses;
use crate::models::leetcode::{ContestData, GraphQLResponse, LeetCodeProfile, ProblemStatsData};
use crate::platform::{http_client, PlatformScorer};

const PROBLEM_STATS_QUERY: &str = r#"
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    submitStats: submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}
"#;

const CONTEST_QUERY: &str = r#"
query userContestRankingInfo($username: String!) {
  userContestRanking(username: $username) {
    attendedContestsCount
    rating
    globalRanking
    topPercentage
  }
}
"#;

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    username: &'a str,
}

pub struct LeetCodeClient {
    client: Client,
    graphql_url: String,
}

impl LeetCodeClient {
    pub fn new(config: &PlatformConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(Self {
            client: http_client(config.request_timeout_secs, headers)?,
            graphql_url: config.leetcode_graphql_url.clone(),
        })
    }

    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        username: &str,
    ) -> Result<GraphQLResponse<T>> {
        let body = GraphQLRequest {
            query,
            variables: Variables { username },
        };
        let referer = format!("https://leetcode.com/{}", username);

        let response = self
            .client
            .post(&self.graphql_url)
            .header(header::REFERER, header::HeaderValue::from_str(&referer)?)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::LeetCodeApi(format!(
                "query for {} failed: {} - {}",
                username, status, text
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PlatformScorer for LeetCodeClient {
    type Profile = LeetCodeProfile;

    async fn fetch_profile(&self, username: &str) -> Result<LeetCodeProfile> {
        tracing::info!(username, "fetching LeetCode stats");
        let (stats, contest) = futures::try_join!(
            self.query::<ProblemStatsData>(PROBLEM_STATS_QUERY, username),
            self.query::<ContestData>(CONTEST_QUERY, username)
        )?;

        let profile = profile_from_responses(username, stats, contest)?;
        if !profile.has_contest_history {
            tracing::debug!(username, "no contest history, using base rating");
        }
        tracing::info!(username, score = profile.score, "LeetCode profile scored");
        Ok(profile)
    }

    fn name(&self) -> &'static str {
        "LeetCode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GraphQLRequest {
            query: CONTEST_QUERY,
            variables: Variables { username: "alice" },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["variables"]["username"], "alice");
        assert!(value["query"]
            .as_str()
            .unwrap()
            .contains("userContestRanking(username: $username)"));
    }

    #[test]
    fn test_stats_query_aliases_global_stats() {
        assert!(PROBLEM_STATS_QUERY.contains("submitStats: submitStatsGlobal"));
    }
}
