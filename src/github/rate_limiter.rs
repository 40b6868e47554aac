use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use reqwest::header::HeaderMap;
use tokio::sync::Mutex;
use tokio::time::sleep;

const WINDOW: Duration = Duration::from_secs(60);

/// Quota reported by the `x-ratelimit-*` response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitHeaders {
    pub remaining: u32,
    /// Unix time in seconds when the quota refills.
    pub reset_epoch_secs: Option<u64>,
}

impl RateLimitHeaders {
    pub fn parse(headers: &HeaderMap) -> Option<Self> {
        let remaining = header_number(headers, "x-ratelimit-remaining")?;
        let reset_epoch_secs = header_number(headers, "x-ratelimit-reset");

        Some(Self {
            remaining: u32::try_from(remaining).unwrap_or(u32::MAX),
            reset_epoch_secs,
        })
    }

    /// Time left until the quota refills, zero if the reset is already past.
    pub fn reset_after(&self, now_epoch_secs: u64) -> Duration {
        self.reset_epoch_secs
            .map(|reset| Duration::from_secs(reset.saturating_sub(now_epoch_secs)))
            .unwrap_or(Duration::ZERO)
    }
}

fn header_number(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

pub(crate) fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Serialises request pacing for one API client: waits out an exhausted
/// quota and keeps a soft per-minute budget.
pub struct RateLimiter {
    requests_per_minute: u32,
    state: Mutex<RateLimitState>,
}

struct RateLimitState {
    remaining: Option<u32>,
    reset_at: Option<Instant>,
    requests_this_window: u32,
    window_start: Instant,
}

impl RateLimiter {
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            requests_per_minute: requests_per_minute.max(1),
            state: Mutex::new(RateLimitState {
                remaining: None,
                reset_at: None,
                requests_this_window: 0,
                window_start: Instant::now(),
            }),
        }
    }

    pub async fn wait(&self) {
        let mut state = self.state.lock().await;

        if state.remaining == Some(0) {
            if let Some(reset_at) = state.reset_at {
                let now = Instant::now();
                if reset_at > now {
                    let wait = reset_at - now;
                    drop(state);
                    tracing::info!(?wait, "quota exhausted, waiting for reset");
                    sleep(wait).await;
                    state = self.state.lock().await;
                }
            }
            state.remaining = None;
            state.reset_at = None;
        }

        let elapsed = state.window_start.elapsed();
        if elapsed < WINDOW {
            if state.requests_this_window >= self.requests_per_minute {
                let wait = WINDOW - elapsed;
                drop(state);
                tracing::debug!(?wait, "request budget spent, pausing");
                sleep(wait).await;
                state = self.state.lock().await;
                state.requests_this_window = 0;
                state.window_start = Instant::now();
            }
        } else {
            state.requests_this_window = 0;
            state.window_start = Instant::now();
        }

        state.requests_this_window += 1;
    }

    pub async fn update(&self, headers: &HeaderMap) {
        let Some(quota) = RateLimitHeaders::parse(headers) else {
            return;
        };

        let mut state = self.state.lock().await;
        state.remaining = Some(quota.remaining);
        state.reset_at = Some(Instant::now() + quota.reset_after(now_epoch_secs()));
    }

    pub async fn remaining(&self) -> Option<u32> {
        self.state.lock().await.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_parse_quota_headers() {
        let quota = RateLimitHeaders::parse(&headers(&[
            ("x-ratelimit-remaining", "42"),
            ("x-ratelimit-reset", "1700000060"),
        ]))
        .unwrap();
        assert_eq!(quota.remaining, 42);
        assert_eq!(quota.reset_after(1_700_000_000), Duration::from_secs(60));
        assert_eq!(quota.reset_after(1_800_000_000), Duration::ZERO);
    }

    #[test]
    fn test_parse_requires_remaining() {
        assert_eq!(RateLimitHeaders::parse(&HeaderMap::new()), None);
        assert_eq!(
            RateLimitHeaders::parse(&headers(&[("x-ratelimit-remaining", "lots")])),
            None
        );
    }

    #[tokio::test]
    async fn test_update_records_remaining() {
        let limiter = RateLimiter::new(30);
        assert_eq!(limiter.remaining().await, None);

        limiter
            .update(&headers(&[("x-ratelimit-remaining", "7")]))
            .await;
        assert_eq!(limiter.remaining().await, Some(7));
    }

    #[tokio::test]
    async fn test_exhausted_quota_with_past_reset_does_not_block() {
        let limiter = RateLimiter::new(30);
        limiter
            .update(&headers(&[
                ("x-ratelimit-remaining", "0"),
                ("x-ratelimit-reset", "1"),
            ]))
            .await;

        tokio::time::timeout(Duration::from_secs(1), limiter.wait())
            .await
            .unwrap();
        assert_eq!(limiter.remaining().await, None);
    }

    #[tokio::test]
    async fn test_requests_within_budget_do_not_block() {
        let limiter = RateLimiter::new(3);
        tokio::time::timeout(Duration::from_secs(1), async {
            for _ in 0..3 {
                limiter.wait().await;
            }
        })
        .await
        .unwrap();
    }
}
