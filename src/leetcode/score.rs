use crate::error::{Error, Result};
use crate::models::leetcode::{ContestData, GraphQLResponse, LeetCodeProfile, ProblemStatsData};
use crate::platform::capped_share;

/// Rating assumed for users who never entered a contest.
pub const BASE_CONTEST_RATING: u32 = 1500;

const SOLVED_CAP: f64 = 1000.0;
const RATING_CAP: f64 = 2500.0;

/// Builds a scored profile from the two GraphQL answers.
///
/// A user is unknown when the stats query reports errors or no matched user.
/// Missing contest data is not an error.
pub fn profile_from_responses(
    username: &str,
    stats: GraphQLResponse<ProblemStatsData>,
    contest: GraphQLResponse<ContestData>,
) -> Result<LeetCodeProfile> {
    if stats.errors.as_ref().is_some_and(|errors| !errors.is_empty()) {
        return Err(Error::user_not_found("LeetCode", username));
    }
    let matched = stats
        .data
        .and_then(|data| data.matched_user)
        .ok_or_else(|| Error::user_not_found("LeetCode", username))?;

    let solved = |difficulty: &str| {
        matched
            .submit_stats
            .ac_submission_num
            .iter()
            .find(|entry| entry.difficulty == difficulty)
            .map(|entry| entry.count)
            .unwrap_or(0)
    };
    let total_solved = solved("All");
    let hard_solved = solved("Hard");

    let rating = contest
        .data
        .and_then(|data| data.user_contest_ranking)
        .and_then(|ranking| ranking.rating)
        .filter(|rating| *rating > 0.0);

    let (contest_rating, has_contest_history) = match rating {
        Some(rating) => (rating.round_ties_even() as u32, true),
        None => (BASE_CONTEST_RATING, false),
    };

    let mut profile = LeetCodeProfile {
        total_solved,
        hard_solved,
        contest_rating,
        has_contest_history,
        score: 0,
    };
    profile.score = score_leetcode(&profile);
    Ok(profile)
}

/// 0-100 score: volume 40, hard-problem ratio 20, contest rating 40.
pub fn score_leetcode(profile: &LeetCodeProfile) -> u32 {
    let volume = capped_share(profile.total_solved as f64, SOLVED_CAP, 40.0);
    let difficulty = if profile.total_solved > 0 {
        profile.hard_solved as f64 / profile.total_solved as f64 * 20.0
    } else {
        0.0
    };
    let rating = capped_share(profile.contest_rating as f64, RATING_CAP, 40.0);

    let score = ((volume + difficulty + rating) * 100.0).round_ties_even() / 100.0;
    score.round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stats(all: u32, hard: u32) -> GraphQLResponse<ProblemStatsData> {
        serde_json::from_value(json!({
            "data": {
                "matchedUser": {
                    "submitStats": {
                        "acSubmissionNum": [
                            {"difficulty": "All", "count": all},
                            {"difficulty": "Easy", "count": all - hard},
                            {"difficulty": "Medium", "count": 0},
                            {"difficulty": "Hard", "count": hard}
                        ]
                    }
                }
            }
        }))
        .unwrap()
    }

    fn contest(rating: Option<f64>) -> GraphQLResponse<ContestData> {
        let ranking = rating.map(|r| {
            json!({
                "attendedContestsCount": 12,
                "rating": r,
                "globalRanking": 40213,
                "topPercentage": 18.5
            })
        });
        serde_json::from_value(json!({ "data": { "userContestRanking": ranking } })).unwrap()
    }

    #[test]
    fn test_user_without_contests_gets_base_rating() {
        let profile = profile_from_responses("alice", stats(500, 50), contest(None)).unwrap();
        assert_eq!(profile.contest_rating, 1500);
        assert!(!profile.has_contest_history);
        // 20 + 2 + 24
        assert_eq!(profile.score, 46);
    }

    #[test]
    fn test_contest_rating_is_rounded_and_capped() {
        let profile =
            profile_from_responses("bob", stats(1200, 300), contest(Some(2000.4))).unwrap();
        assert_eq!(profile.contest_rating, 2000);
        assert!(profile.has_contest_history);
        // 40 + 5 + 32
        assert_eq!(profile.score, 77);
    }

    #[test]
    fn test_zero_solved_has_no_difficulty_share() {
        let profile = profile_from_responses("carol", stats(0, 0), contest(None)).unwrap();
        assert_eq!(profile.score, 24);
    }

    #[test]
    fn test_missing_user_is_not_found() {
        let stats: GraphQLResponse<ProblemStatsData> =
            serde_json::from_value(json!({ "data": { "matchedUser": null } })).unwrap();
        let err = profile_from_responses("ghost", stats, contest(None)).unwrap_err();
        assert!(matches!(err, Error::UserNotFound { .. }));
    }

    #[test]
    fn test_graphql_errors_mean_not_found() {
        let stats: GraphQLResponse<ProblemStatsData> = serde_json::from_value(json!({
            "data": null,
            "errors": [{"message": "That user does not exist."}]
        }))
        .unwrap();
        let err = profile_from_responses("ghost", stats, contest(None)).unwrap_err();
        assert_eq!(err.to_string(), "LeetCode user not found: ghost");
    }
}
