use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::error::Result;

pub(crate) const USER_AGENT: &str = "elo-rating/0.1";

/// A coding platform that can be queried for a scored developer profile.
#[async_trait]
pub trait PlatformScorer: Send + Sync {
    type Profile: Send;

    async fn fetch_profile(&self, username: &str) -> Result<Self::Profile>;
    fn name(&self) -> &'static str;
}

/// HTTP client with the shared timeout and user agent plus per-platform headers.
pub(crate) fn http_client(timeout_secs: u64, mut headers: header::HeaderMap) -> Result<Client> {
    headers
        .entry(header::USER_AGENT)
        .or_insert(header::HeaderValue::from_static(USER_AGENT));

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .build()?;

    Ok(client)
}

/// `min(value, cap) / cap * weight`.
pub(crate) fn capped_share(value: f64, cap: f64, weight: f64) -> f64 {
    value.min(cap) / cap * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_share() {
        assert_eq!(capped_share(50.0, 100.0, 20.0), 10.0);
        assert_eq!(capped_share(500.0, 100.0, 20.0), 20.0);
        assert_eq!(capped_share(0.0, 100.0, 20.0), 0.0);
    }

    #[test]
    fn test_http_client_builds_with_default_headers() {
        assert!(http_client(5, header::HeaderMap::new()).is_ok());
    }
}
