use serde::{Deserialize, Serialize};

/// Item counts detected in a single resume, each already clamped to its counter's cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub internships: u32,
    pub projects: u32,
    pub certifications: u32,
    pub skills: u32,
    pub achievements: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub internships_score: f64,
    pub projects_score: f64,
    pub certifications_score: f64,
    pub skills_score: f64,
    pub achievements_score: f64,
    pub total_score: f64,
    pub tier: ResumeTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResumeTier {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl ResumeTier {
    pub fn from_score(total: f64) -> Self {
        match total {
            t if t >= 90.0 => ResumeTier::S,
            t if t >= 80.0 => ResumeTier::A,
            t if t >= 70.0 => ResumeTier::B,
            t if t >= 55.0 => ResumeTier::C,
            t if t >= 40.0 => ResumeTier::D,
            _ => ResumeTier::E,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResumeTier::S => "S-TIER - Elite candidate",
            ResumeTier::A => "A-TIER - Excellent candidate",
            ResumeTier::B => "B-TIER - Very good candidate",
            ResumeTier::C => "C-TIER - Good candidate",
            ResumeTier::D => "D-TIER - Developing candidate",
            ResumeTier::E => "E-TIER - Entry-level candidate",
        }
    }

    pub fn insight(&self) -> &'static str {
        match self {
            ResumeTier::S => "Outstanding profile with exceptional depth across all areas.",
            ResumeTier::A => "Strong profile with impressive experience and skills.",
            ResumeTier::B => "Solid profile with good balance of experience and projects.",
            ResumeTier::C => "Decent profile with room for growth in some areas.",
            ResumeTier::D => "Emerging profile - focus on building more projects and skills.",
            ResumeTier::E => {
                "Starting out - prioritize internships, projects, and certifications."
            }
        }
    }
}

impl std::fmt::Display for ResumeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResumeTier::S => write!(f, "S"),
            ResumeTier::A => write!(f, "A"),
            ResumeTier::B => write!(f, "B"),
            ResumeTier::C => write!(f, "C"),
            ResumeTier::D => write!(f, "D"),
            ResumeTier::E => write!(f, "E"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ResumeTier::from_score(100.0), ResumeTier::S);
        assert_eq!(ResumeTier::from_score(90.0), ResumeTier::S);
        assert_eq!(ResumeTier::from_score(89.0), ResumeTier::A);
        assert_eq!(ResumeTier::from_score(70.0), ResumeTier::B);
        assert_eq!(ResumeTier::from_score(55.0), ResumeTier::C);
        assert_eq!(ResumeTier::from_score(54.0), ResumeTier::D);
        assert_eq!(ResumeTier::from_score(40.0), ResumeTier::D);
        assert_eq!(ResumeTier::from_score(0.0), ResumeTier::E);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(ResumeTier::S > ResumeTier::A);
        assert!(ResumeTier::D > ResumeTier::E);
        assert_eq!(ResumeTier::C.to_string(), "C");
    }
}
