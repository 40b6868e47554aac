pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod github;
pub mod leetcode;
pub mod models;
pub mod platform;
pub mod resume;
pub mod taxonomy;

pub use analysis::{RatingEngine, RatingPipeline};
pub use config::{Config, PlatformConfig};
pub use error::{Error, Result};
pub use extract::{extract_text, DocumentFormat};
pub use github::GitHubClient;
pub use leetcode::LeetCodeClient;
pub use platform::PlatformScorer;
pub use resume::ResumeAnalyzer;
