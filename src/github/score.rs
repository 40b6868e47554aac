use std::collections::HashSet;

use crate::models::github::{GitHubProfile, GitHubUser, Repository};
use crate::platform::capped_share;

const REPOS_CAP: f64 = 50.0;
const COMMITS_CAP: f64 = 1000.0;
const STARS_CAP: f64 = 200.0;
const FOLLOWERS_CAP: f64 = 100.0;
const LANGUAGES_CAP: f64 = 10.0;

/// Summarises a user's account, owned repositories and yearly contributions.
pub fn build_profile(
    user: &GitHubUser,
    repos: &[Repository],
    commits_last_year: u32,
) -> GitHubProfile {
    let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
    let language_diversity = repos
        .iter()
        .filter_map(|r| r.language.as_deref())
        .collect::<HashSet<_>>()
        .len() as u32;

    let mut profile = GitHubProfile {
        public_repos: user.public_repos,
        commits_last_year,
        total_stars,
        followers: user.followers,
        language_diversity,
        score: 0,
    };
    profile.score = score_github(&profile);
    profile
}

/// 0-100 activity score: repositories 20, commits 30, stars 25, followers 15, languages 10.
pub fn score_github(profile: &GitHubProfile) -> u32 {
    let score = capped_share(profile.public_repos as f64, REPOS_CAP, 20.0)
        + capped_share(profile.commits_last_year as f64, COMMITS_CAP, 30.0)
        + capped_share(profile.total_stars as f64, STARS_CAP, 25.0)
        + capped_share(profile.followers as f64, FOLLOWERS_CAP, 15.0)
        + capped_share(profile.language_diversity as f64, LANGUAGES_CAP, 10.0);

    score.round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(public_repos: u32, followers: u32) -> GitHubUser {
        serde_json::from_value(serde_json::json!({
            "login": "octocat",
            "id": 1,
            "name": "The Octocat",
            "bio": null,
            "public_repos": public_repos,
            "followers": followers,
            "created_at": "2011-01-25T18:44:36Z"
        }))
        .unwrap()
    }

    fn repos() -> Vec<Repository> {
        serde_json::from_value(serde_json::json!([
            {"name": "a", "full_name": "octocat/a", "language": "Rust", "stargazers_count": 40, "fork": false},
            {"name": "b", "full_name": "octocat/b", "language": "Go", "stargazers_count": 10, "fork": false},
            {"name": "c", "full_name": "octocat/c", "language": "Rust", "stargazers_count": 0, "fork": true},
            {"name": "d", "full_name": "octocat/d", "language": null}
        ]))
        .unwrap()
    }

    #[test]
    fn test_build_profile_sums_stars_and_languages() {
        let profile = build_profile(&user(25, 50), &repos(), 500);
        assert_eq!(profile.total_stars, 50);
        assert_eq!(profile.language_diversity, 2);
        // 10 + 15 + 6.25 + 7.5 + 2 = 40.75
        assert_eq!(profile.score, 41);
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let profile = GitHubProfile {
            public_repos: 400,
            commits_last_year: 9000,
            total_stars: 10_000,
            followers: 5000,
            language_diversity: 30,
            score: 0,
        };
        assert_eq!(score_github(&profile), 100);
    }

    #[test]
    fn test_empty_account_scores_zero() {
        let profile = build_profile(&user(0, 0), &[], 0);
        assert_eq!(profile.score, 0);
    }
}
