pub mod client;
pub mod score;

pub use client::LeetCodeClient;
pub use score::{profile_from_responses, score_leetcode, BASE_CONTEST_RATING};
