use crate::models::resume::{Metrics, ResumeTier, ScoreBreakdown};

/// Points each metric contributes at or above its ceiling. Sums to 100.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub internships: f64,
    pub projects: f64,
    pub certifications: f64,
    pub skills: f64,
    pub achievements: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            internships: 30.0,
            projects: 25.0,
            certifications: 20.0,
            skills: 15.0,
            achievements: 10.0,
        }
    }
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.internships + self.projects + self.certifications + self.skills + self.achievements
    }
}

/// Count at which a metric earns its full weight.
///
/// These sit below the counter caps, so a resume can saturate a metric
/// before its counter does.
#[derive(Debug, Clone)]
pub struct ScoreCeilings {
    pub internships: u32,
    pub projects: u32,
    pub certifications: u32,
    pub skills: u32,
    pub achievements: u32,
}

impl Default for ScoreCeilings {
    fn default() -> Self {
        Self {
            internships: 3,
            projects: 4,
            certifications: 5,
            skills: 20,
            achievements: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreNormalizer {
    weights: ScoreWeights,
    ceilings: ScoreCeilings,
}

impl ScoreNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&self, metrics: &Metrics) -> ScoreBreakdown {
        let w = &self.weights;
        let c = &self.ceilings;

        let internships_score = weighted(metrics.internships, c.internships, w.internships);
        let projects_score = weighted(metrics.projects, c.projects, w.projects);
        let certifications_score =
            weighted(metrics.certifications, c.certifications, w.certifications);
        let skills_score = weighted(metrics.skills, c.skills, w.skills);
        let achievements_score = weighted(metrics.achievements, c.achievements, w.achievements);

        let total_score = (internships_score
            + projects_score
            + certifications_score
            + skills_score
            + achievements_score)
            .round_ties_even();

        ScoreBreakdown {
            internships_score,
            projects_score,
            certifications_score,
            skills_score,
            achievements_score,
            total_score,
            tier: ResumeTier::from_score(total_score),
        }
    }
}

fn weighted(value: u32, ceiling: u32, weight: f64) -> f64 {
    if ceiling == 0 {
        return 0.0;
    }
    let normalized = value.min(ceiling) as f64 / ceiling as f64;
    round2(normalized * weight)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Improvement hints for the weaker metrics, plus a note for strong totals.
pub fn recommendations(metrics: &Metrics, total_score: f64) -> Vec<String> {
    let mut hints = Vec::new();

    if metrics.internships < 2 {
        hints.push("Gain more internship/work experience".to_string());
    }
    if metrics.projects < 3 {
        hints.push("Build more technical projects to showcase your skills".to_string());
    }
    if metrics.certifications < 3 {
        hints.push("Consider earning relevant certifications (Coursera, AWS, etc.)".to_string());
    }
    if metrics.skills < 15 {
        hints.push("Expand your technical skill set".to_string());
    }
    if metrics.achievements < 2 {
        hints.push("Participate in hackathons, competitions, or leadership roles".to_string());
    }
    if total_score >= 80.0 {
        hints.push("Excellent profile! Focus on depth and advanced skills.".to_string());
    }

    hints
}
