use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Resume text is empty")]
    EmptyInput,

    #[error("Failed to parse resume: {0}")]
    ParseFailure(String),

    #[error("Unsupported file format: {0}. Supported: .pdf, .docx, .txt")]
    UnsupportedFormat(String),

    #[error("Failed to extract text: {0}")]
    ExtractionFailure(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("LeetCode API error: {0}")]
    LeetCodeApi(String),

    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{platform} user not found: {username}")]
    UserNotFound { platform: String, username: String },

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited(_) | Error::Network(_))
    }

    pub(crate) fn user_not_found(platform: &str, username: &str) -> Self {
        Error::UserNotFound {
            platform: platform.to_string(),
            username: username.to_string(),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::ParseFailure(format!("invalid pattern: {}", err))
    }
}
