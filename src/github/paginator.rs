use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::github::rate_limiter::RateLimiter;

// Upper bound on pages followed for one listing.
const MAX_PAGES: u32 = 10;

pub struct Paginator<'a> {
    client: &'a Client,
    rate_limiter: &'a RateLimiter,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client, rate_limiter: &'a RateLimiter) -> Self {
        Self {
            client,
            rate_limiter,
        }
    }

    /// Collects every item of a paginated listing, following `Link: rel="next"`.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();

        for page in 1..=MAX_PAGES {
            self.rate_limiter.wait().await;

            let url = page_url(base_url, per_page, page);
            tracing::debug!(%url, "fetching page");
            let response = self.client.get(&url).send().await?;
            self.rate_limiter.update(response.headers()).await;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::GitHubApi(format!(
                    "listing {} failed: {} - {}",
                    base_url, status, body
                )));
            }

            let has_next = has_next_page(response.headers());
            let items: Vec<T> = response.json().await?;
            let items_count = items.len();
            all_items.extend(items);

            if !has_next || items_count < per_page as usize {
                break;
            }
        }

        Ok(all_items)
    }
}

fn page_url(base_url: &str, per_page: u32, page: u32) -> String {
    let separator = if base_url.contains('?') { "&" } else { "?" };
    format!("{}{}per_page={}&page={}", base_url, separator, per_page, page)
}

pub(crate) fn has_next_page(headers: &HeaderMap) -> bool {
    headers
        .get(reqwest::header::LINK)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').any(|link| link.contains("rel=\"next\"")))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, LINK};

    #[test]
    fn test_page_url_appends_query() {
        assert_eq!(
            page_url("https://api.github.com/users/octo/repos", 100, 2),
            "https://api.github.com/users/octo/repos?per_page=100&page=2"
        );
        assert_eq!(
            page_url("https://api.github.com/users/octo/repos?type=owner", 50, 1),
            "https://api.github.com/users/octo/repos?type=owner&per_page=50&page=1"
        );
    }

    #[test]
    fn test_next_page_from_link_header() {
        let mut headers = HeaderMap::new();
        assert!(!has_next_page(&headers));

        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://api.github.com/user/1/repos?page=2>; rel=\"next\", \
                 <https://api.github.com/user/1/repos?page=5>; rel=\"last\"",
            ),
        );
        assert!(has_next_page(&headers));

        headers.insert(
            LINK,
            HeaderValue::from_static("<https://api.github.com/user/1/repos?page=1>; rel=\"prev\""),
        );
        assert!(!has_next_page(&headers));
    }
}
