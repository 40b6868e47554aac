pub mod counters;
pub mod scoring;
pub mod section;
pub mod signals;

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::resume::{Metrics, ScoreBreakdown};
use crate::models::skill::SkillCategory;
use crate::models::ResumeReport;

use counters::{
    AchievementsCounter, CertificationsCounter, ExperienceCounter, ItemCounter, ProjectsCounter,
    SkillsCounter,
};
use scoring::ScoreNormalizer;

pub use scoring::{recommendations, ScoreCeilings, ScoreWeights};
pub use section::{SectionLocator, SectionSpan};
pub use signals::{Reconciliation, SignalVector};

/// Turns raw resume text into [`Metrics`] and a weighted [`ScoreBreakdown`].
///
/// All patterns are compiled once in [`ResumeAnalyzer::new`]; analysis itself
/// never fails on non-empty text.
pub struct ResumeAnalyzer {
    experience: ExperienceCounter,
    projects: ProjectsCounter,
    certifications: CertificationsCounter,
    skills: SkillsCounter,
    achievements: AchievementsCounter,
    normalizer: ScoreNormalizer,
}

impl ResumeAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            experience: ExperienceCounter::new()?,
            projects: ProjectsCounter::new()?,
            certifications: CertificationsCounter::new()?,
            skills: SkillsCounter::new()?,
            achievements: AchievementsCounter::new()?,
            normalizer: ScoreNormalizer::new(),
        })
    }

    pub fn analyze_resume(&self, text: &str) -> Result<Metrics> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let metrics = Metrics {
            internships: self.experience.count(text),
            projects: self.projects.count(text),
            certifications: self.certifications.count(text),
            skills: self.skills.count(text),
            achievements: self.achievements.count(text),
        };
        debug!(?metrics, "resume metrics");

        Ok(metrics)
    }

    pub fn score_metrics(&self, metrics: &Metrics) -> ScoreBreakdown {
        self.normalizer.normalize(metrics)
    }

    pub fn analyze_and_score(&self, text: &str) -> Result<ScoreBreakdown> {
        let metrics = self.analyze_resume(text)?;
        Ok(self.score_metrics(&metrics))
    }

    pub fn report(&self, text: &str) -> Result<ResumeReport> {
        let metrics = self.analyze_resume(text)?;
        let breakdown = self.score_metrics(&metrics);
        let recommendations = recommendations(&metrics, breakdown.total_score);

        Ok(ResumeReport {
            metrics,
            breakdown,
            recommendations,
        })
    }

    /// Vocabulary terms found in `text`, grouped by category. Display only.
    pub fn detected_skills(&self, text: &str) -> BTreeMap<SkillCategory, Vec<String>> {
        let mut grouped: BTreeMap<SkillCategory, Vec<String>> = BTreeMap::new();
        for skill in self.skills.detected(text) {
            grouped
                .entry(skill.category)
                .or_default()
                .push(skill.name.clone());
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeTier;
    use indoc::indoc;
    use once_cell::sync::Lazy;
    use proptest::prelude::*;

    static SHARED: Lazy<ResumeAnalyzer> = Lazy::new(|| ResumeAnalyzer::new().unwrap());

    const SAMPLE_RESUME: &str = indoc! {"
        Jane Doe
        Experience
        Software Engineering Intern, Acme Corp
        Jan 2021 - May 2021
        - Built internal dashboards for the sales team
        - Wrote integration tests for the billing service
        - Improved query latency by forty percent
        - Reviewed pull requests from teammates
        Backend Intern, Globex
        Jun 2022 - Present
        - Migrated services to containers
        - Automated nightly deployments
        - Documented the public endpoints
        - Mentored two new hires
        Projects:
        Chess Engine | Rust, WebAssembly
        - Built a bitboard move generator
        - Implemented alpha-beta search with pruning
        - Published the engine at github.com/jane/chess
        Weather Dashboard | React, Node.js
        - Developed a dashboard for local forecasts
        - Integrated a public weather API
        - Deployed on Vercel, source at github.com/jane/weather
        Certifications:
        - AWS Certified Cloud Practitioner (2023)
        - Machine Learning by Stanford, Coursera (2022)
        - Python for Everybody, Coursera (2021)
        Skills: Python, Java, React, Docker, AWS
        Achievements:
        - Winner, Smart India Hackathon 2022
        - Solved 500+ problems on LeetCode
        - Dean's List, 2021
        Leadership
        - President of the coding club, organized weekly contests
        - Mentor for first-year students
        Education
        State University
    "};

    fn analyzer() -> &'static ResumeAnalyzer {
        &SHARED
    }

    #[test]
    fn test_sample_resume_metrics() {
        let metrics = analyzer().analyze_resume(SAMPLE_RESUME).unwrap();
        assert_eq!(metrics.internships, 2);
        assert_eq!(metrics.projects, 2);
        assert_eq!(metrics.certifications, 3);
        assert!(metrics.skills >= 5);
        assert_eq!(metrics.achievements, 5);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let analyzer = analyzer();
        assert!(matches!(analyzer.analyze_resume(""), Err(Error::EmptyInput)));
        assert!(matches!(analyzer.analyze_resume(" \n\t "), Err(Error::EmptyInput)));
        assert!(matches!(analyzer.analyze_and_score(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_text_without_signals_scores_zero() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit";
        let analyzer = analyzer();
        let metrics = analyzer.analyze_resume(text).unwrap();
        assert_eq!(metrics, Metrics::default());

        let breakdown = analyzer.score_metrics(&metrics);
        assert_eq!(breakdown.total_score, 0.0);
        assert_eq!(breakdown.tier, ResumeTier::E);
    }

    #[test]
    fn test_skills_list_without_bonus() {
        let metrics = analyzer()
            .analyze_resume("Skills: Python, Java, React, Docker, AWS\n")
            .unwrap();
        assert_eq!(metrics.skills, 5);
    }

    #[test]
    fn test_certification_fallback_without_header() {
        let text = "Jane Doe\nCloud engineer, AWS Certified since last spring.\n";
        let metrics = analyzer().analyze_resume(text).unwrap();
        assert_eq!(metrics.certifications, 1);
    }

    #[test]
    fn test_report_includes_recommendations() {
        let report = analyzer().report(SAMPLE_RESUME).unwrap();
        assert_eq!(report.metrics.internships, 2);
        assert!(report
            .recommendations
            .iter()
            .any(|hint| hint.contains("technical projects")));
        assert_eq!(
            report.breakdown,
            analyzer().score_metrics(&report.metrics)
        );
    }

    #[test]
    fn test_detected_skills_are_grouped() {
        let grouped = analyzer().detected_skills("Rust and Docker, deployed with Terraform");
        assert_eq!(grouped[&SkillCategory::Language], vec!["rust"]);
        assert_eq!(grouped[&SkillCategory::CloudDevOps], vec!["docker", "terraform"]);
        assert!(!grouped.contains_key(&SkillCategory::Database));
    }

    proptest! {
        #[test]
        fn prop_metrics_and_total_are_bounded(text in "\\PC{0,600}") {
            let analyzer = analyzer();
            match analyzer.analyze_and_score(&text) {
                Ok(breakdown) => {
                    prop_assert!(breakdown.total_score >= 0.0);
                    prop_assert!(breakdown.total_score <= 100.0);
                }
                Err(err) => prop_assert!(matches!(err, Error::EmptyInput)),
            }

            if let Ok(metrics) = analyzer.analyze_resume(&text) {
                prop_assert!(metrics.internships <= 5);
                prop_assert!(metrics.projects <= 8);
                prop_assert!(metrics.certifications <= 10);
                prop_assert!(metrics.skills <= 30);
                prop_assert!(metrics.achievements <= 8);
            }
        }

        #[test]
        fn prop_analysis_is_deterministic(
            lines in proptest::collection::vec("(Projects|Skills|- Built a tool|Python, Rust|intern|2021)", 0..30)
        ) {
            let text = lines.join("\n");
            let analyzer = analyzer();
            let first = analyzer.analyze_and_score(&text).ok();
            let second = analyzer.analyze_and_score(&text).ok();
            prop_assert_eq!(first, second);
        }
    }
}
