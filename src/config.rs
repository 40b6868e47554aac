use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_CONTRIBUTIONS_API_URL: &str = "https://github-contributions-api.jogruber.de/v4";
pub const DEFAULT_LEETCODE_GRAPHQL_URL: &str = "https://leetcode.com/graphql";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub contributions_api_url: String,
    pub leetcode_graphql_url: String,
    pub request_timeout_secs: u64,
    pub max_resume_bytes: u64,
    pub requests_per_minute: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            contributions_api_url: DEFAULT_CONTRIBUTIONS_API_URL.to_string(),
            leetcode_graphql_url: DEFAULT_LEETCODE_GRAPHQL_URL.to_string(),
            request_timeout_secs: 30,
            max_resume_bytes: 5 * 1024 * 1024,
            requests_per_minute: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let github_token = lookup("GITHUB_TOKEN").filter(|t| !t.trim().is_empty());

        let github_api_url = lookup("GITHUB_API_URL").unwrap_or(defaults.github_api_url);
        let contributions_api_url =
            lookup("CONTRIBUTIONS_API_URL").unwrap_or(defaults.contributions_api_url);
        let leetcode_graphql_url =
            lookup("LEETCODE_GRAPHQL_URL").unwrap_or(defaults.leetcode_graphql_url);

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS")?
            .unwrap_or(defaults.request_timeout_secs);
        let max_resume_bytes =
            parse_var(&lookup, "MAX_RESUME_BYTES")?.unwrap_or(defaults.max_resume_bytes);
        let requests_per_minute = parse_var(&lookup, "REQUESTS_PER_MINUTE")?
            .unwrap_or(defaults.requests_per_minute);

        if requests_per_minute == 0 {
            return Err(Error::Config(
                "REQUESTS_PER_MINUTE must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            github_token,
            github_api_url,
            contributions_api_url,
            leetcode_graphql_url,
            request_timeout_secs,
            max_resume_bytes,
            requests_per_minute,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(None),
    }
}

/// Settings shared by the platform HTTP clients.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub contributions_api_url: String,
    pub leetcode_graphql_url: String,
    pub request_timeout_secs: u64,
    pub requests_per_minute: u32,
}

impl From<&Config> for PlatformConfig {
    fn from(config: &Config) -> Self {
        Self {
            github_token: config.github_token.clone(),
            github_api_url: config.github_api_url.clone(),
            contributions_api_url: config.contributions_api_url.clone(),
            leetcode_graphql_url: config.leetcode_graphql_url.clone(),
            request_timeout_secs: config.request_timeout_secs,
            requests_per_minute: config.requests_per_minute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.github_token, None);
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_resume_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "ghp_abc"),
            ("REQUEST_TIMEOUT_SECS", " 10 "),
            ("REQUESTS_PER_MINUTE", "60"),
        ]))
        .unwrap();
        assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.requests_per_minute, 60);
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "  ")])).unwrap();
        assert!(config.github_token.is_none());
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("MAX_RESUME_BYTES", "lots")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("REQUESTS_PER_MINUTE", "0")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
