use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};

use crate::config::PlatformConfig;
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::rate_limiter::{now_epoch_secs, RateLimitHeaders, RateLimiter};
use crate::github::score::build_profile;
use crate::models::github::{ContributionTotals, GitHubProfile, GitHubUser, Repository};
use crate::platform::{http_client, PlatformScorer};

const PLATFORM: &str = "GitHub";

pub struct GitHubClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
    contributions_url: String,
}

impl GitHubClient {
    pub fn new(config: &PlatformConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = &config.github_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );

        Ok(Self {
            client: http_client(config.request_timeout_secs, headers)?,
            rate_limiter: RateLimiter::new(config.requests_per_minute),
            base_url: config.github_api_url.trim_end_matches('/').to_string(),
            contributions_url: config.contributions_api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        self.rate_limiter.wait().await;
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!(username, "fetching GitHub user");

        let response = self.client.get(&url).send().await?;
        self.rate_limiter.update(response.headers()).await;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::user_not_found(PLATFORM, username));
        }
        let response = check_status(response, &format!("user {}", username)).await?;

        Ok(response.json().await?)
    }

    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos?type=owner", self.base_url, username);
        let paginator = Paginator::new(&self.client, &self.rate_limiter);
        tracing::info!(username, "fetching repositories");
        paginator.fetch_all(&url, 100).await
    }

    /// Contributions over the last year. The calendar service is best effort,
    /// so an unsuccessful answer counts as zero.
    pub async fn get_commits_last_year(&self, username: &str) -> Result<u32> {
        let url = format!("{}/{}?y=last", self.contributions_url, username);
        tracing::debug!(%url, "fetching contributions");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::warn!(
                username,
                status = %response.status(),
                "contribution data unavailable, counting 0 commits"
            );
            return Ok(0);
        }

        match response.json::<ContributionTotals>().await {
            Ok(totals) => Ok(totals.total.last_year),
            Err(err) => {
                tracing::warn!(username, error = %err, "unreadable contribution data");
                Ok(0)
            }
        }
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

#[async_trait]
impl PlatformScorer for GitHubClient {
    type Profile = GitHubProfile;

    async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile> {
        let user = self.get_user(username).await?;
        let (repos, commits) = futures::try_join!(
            self.get_user_repos(username),
            self.get_commits_last_year(username)
        )?;

        let profile = build_profile(&user, &repos, commits);
        tracing::info!(username, score = profile.score, "GitHub profile scored");
        Ok(profile)
    }

    fn name(&self) -> &'static str {
        PLATFORM
    }
}

async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        if let Some(quota) = RateLimitHeaders::parse(response.headers()) {
            if quota.remaining == 0 {
                return Err(Error::RateLimited(
                    quota.reset_after(now_epoch_secs()).as_secs(),
                ));
            }
        }
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::GitHubApi(format!(
        "failed to fetch {}: {} - {}",
        what, status, body
    )))
}
