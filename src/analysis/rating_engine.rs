use crate::models::rating::{EloTier, PlatformScores};

pub const ELO_FLOOR: f64 = 1000.0;
pub const ELO_SPAN: f64 = 1500.0;

/// Combines per-platform scores into a single ELO rating.
pub struct RatingEngine {
    weights: RatingWeights,
}

#[derive(Debug, Clone)]
pub struct RatingWeights {
    pub leetcode_weight: f64,
    pub github_weight: f64,
    pub resume_weight: f64,
}

impl Default for RatingWeights {
    fn default() -> Self {
        Self {
            leetcode_weight: 0.4,
            github_weight: 0.3,
            resume_weight: 0.3,
        }
    }
}

impl RatingEngine {
    pub fn new() -> Self {
        Self {
            weights: RatingWeights::default(),
        }
    }

    pub fn with_weights(weights: RatingWeights) -> Self {
        Self { weights }
    }

    /// Weighted 0-100 blend of the platform scores.
    pub fn raw_score(&self, scores: &PlatformScores) -> f64 {
        scores.leetcode_score * self.weights.leetcode_weight
            + scores.github_score * self.weights.github_weight
            + scores.resume_score * self.weights.resume_weight
    }

    /// Maps the blend linearly onto 1000-2500, truncating toward zero.
    pub fn compute_elo(&self, scores: &PlatformScores) -> u32 {
        let elo = ELO_FLOOR + self.raw_score(scores) / 100.0 * ELO_SPAN;
        elo.trunc().max(0.0) as u32
    }

    pub fn rate(&self, scores: &PlatformScores) -> (u32, EloTier) {
        let elo = self.compute_elo(scores);
        (elo, EloTier::from_elo(elo))
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new()
    }
}
