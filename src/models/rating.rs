use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::github::GitHubProfile;
use super::leetcode::LeetCodeProfile;
use super::resume::{Metrics, ScoreBreakdown};

/// Per-platform scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformScores {
    pub leetcode_score: f64,
    pub github_score: f64,
    pub resume_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EloTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
}

impl EloTier {
    pub fn from_elo(elo: u32) -> Self {
        match elo {
            e if e >= 2300 => EloTier::Grandmaster,
            e if e >= 2100 => EloTier::Master,
            e if e >= 1900 => EloTier::Diamond,
            e if e >= 1700 => EloTier::Platinum,
            e if e >= 1500 => EloTier::Gold,
            e if e >= 1300 => EloTier::Silver,
            _ => EloTier::Bronze,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EloTier::Grandmaster => "#FF6B6B",
            EloTier::Master => "#FFD93D",
            EloTier::Diamond => "#6BCB77",
            EloTier::Platinum => "#4D96FF",
            EloTier::Gold => "#F4A460",
            EloTier::Silver => "#C0C0C0",
            EloTier::Bronze => "#CD7F32",
        }
    }

    pub fn percentile(&self) -> &'static str {
        match self {
            EloTier::Grandmaster => "Top 1%",
            EloTier::Master => "Top 5%",
            EloTier::Diamond => "Top 15%",
            EloTier::Platinum => "Top 30%",
            EloTier::Gold => "Top 50%",
            EloTier::Silver => "Top 70%",
            EloTier::Bronze => "Entry level",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EloTier::Grandmaster => "Elite developer",
            EloTier::Master => "Expert developer",
            EloTier::Diamond => "Advanced developer",
            EloTier::Platinum => "Proficient developer",
            EloTier::Gold => "Competent developer",
            EloTier::Silver => "Developing skills",
            EloTier::Bronze => "Beginner",
        }
    }
}

impl std::fmt::Display for EloTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EloTier::Grandmaster => write!(f, "Grandmaster"),
            EloTier::Master => write!(f, "Master"),
            EloTier::Diamond => write!(f, "Diamond"),
            EloTier::Platinum => write!(f, "Platinum"),
            EloTier::Gold => write!(f, "Gold"),
            EloTier::Silver => write!(f, "Silver"),
            EloTier::Bronze => write!(f, "Bronze"),
        }
    }
}

/// Resume analysis result as exposed to report consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub metrics: Metrics,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlatformData {
    pub leetcode: LeetCodeProfile,
    pub github: GitHubProfile,
    pub resume: ResumeReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloReport {
    pub username: String,
    pub elo_rating: u32,
    pub tier: EloTier,
    pub platform_scores: PlatformScores,
    pub raw_data: RawPlatformData,
    pub analysis_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elo_tier_thresholds() {
        assert_eq!(EloTier::from_elo(2500), EloTier::Grandmaster);
        assert_eq!(EloTier::from_elo(2300), EloTier::Grandmaster);
        assert_eq!(EloTier::from_elo(2299), EloTier::Master);
        assert_eq!(EloTier::from_elo(1900), EloTier::Diamond);
        assert_eq!(EloTier::from_elo(1700), EloTier::Platinum);
        assert_eq!(EloTier::from_elo(1500), EloTier::Gold);
        assert_eq!(EloTier::from_elo(1300), EloTier::Silver);
        assert_eq!(EloTier::from_elo(1299), EloTier::Bronze);
        assert_eq!(EloTier::from_elo(1000), EloTier::Bronze);
    }

    #[test]
    fn test_elo_tier_details() {
        assert_eq!(EloTier::Gold.percentile(), "Top 50%");
        assert_eq!(EloTier::Bronze.description(), "Beginner");
        assert_eq!(EloTier::Master.color(), "#FFD93D");
        assert_eq!(EloTier::Diamond.to_string(), "Diamond");
    }
}
