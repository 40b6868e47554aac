pub mod client;
pub mod paginator;
pub mod rate_limiter;
pub mod score;

pub use client::GitHubClient;
pub use paginator::Paginator;
pub use rate_limiter::{RateLimitHeaders, RateLimiter};
pub use score::{build_profile, score_github};
