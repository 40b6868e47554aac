use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::rating_engine::RatingEngine;
use crate::error::Result;
use crate::extract::extract_text;
use crate::models::github::GitHubProfile;
use crate::models::leetcode::LeetCodeProfile;
use crate::models::rating::{EloReport, PlatformScores, RawPlatformData, ResumeReport};
use crate::platform::PlatformScorer;
use crate::resume::ResumeAnalyzer;

/// Reads and scores a resume file on the blocking pool.
pub async fn analyze_resume_file(
    analyzer: Arc<ResumeAnalyzer>,
    path: PathBuf,
    max_bytes: u64,
) -> Result<ResumeReport> {
    tokio::task::spawn_blocking(move || {
        let text = extract_text(&path, max_bytes)?;
        analyzer.report(&text)
    })
    .await?
}

/// Fetches both platforms and the resume concurrently and folds them into an [`EloReport`].
pub struct RatingPipeline<L, G> {
    leetcode: L,
    github: G,
    analyzer: Arc<ResumeAnalyzer>,
    rating_engine: RatingEngine,
    max_resume_bytes: u64,
    show_progress: bool,
}

impl<L, G> RatingPipeline<L, G>
where
    L: PlatformScorer<Profile = LeetCodeProfile>,
    G: PlatformScorer<Profile = GitHubProfile>,
{
    pub fn new(leetcode: L, github: G, analyzer: Arc<ResumeAnalyzer>, max_resume_bytes: u64) -> Self {
        Self {
            leetcode,
            github,
            analyzer,
            rating_engine: RatingEngine::new(),
            max_resume_bytes,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub async fn rate(
        &self,
        leetcode_user: &str,
        github_user: &str,
        resume_path: &Path,
    ) -> Result<EloReport> {
        let spinner = self.spinner();
        spinner.set_message(format!(
            "Fetching {} and {} profiles, reading {}",
            self.leetcode.name(),
            self.github.name(),
            resume_path.display()
        ));

        let resume_task = analyze_resume_file(
            self.analyzer.clone(),
            resume_path.to_path_buf(),
            self.max_resume_bytes,
        );

        let joined = futures::try_join!(
            self.leetcode.fetch_profile(leetcode_user),
            self.github.fetch_profile(github_user),
            resume_task
        );
        let (leetcode, github, resume) = match joined {
            Ok(parts) => parts,
            Err(err) => {
                spinner.abandon_with_message("Rating failed");
                return Err(err);
            }
        };

        let platform_scores = PlatformScores {
            leetcode_score: leetcode.score as f64,
            github_score: github.score as f64,
            resume_score: resume.breakdown.total_score,
        };
        let (elo_rating, tier) = self.rating_engine.rate(&platform_scores);
        spinner.finish_with_message(format!("ELO {} ({})", elo_rating, tier));
        tracing::info!(leetcode_user, github_user, elo_rating, %tier, "rating complete");

        Ok(EloReport {
            username: leetcode_user.to_string(),
            elo_rating,
            tier,
            platform_scores,
            raw_data: RawPlatformData {
                leetcode,
                github,
                resume,
            },
            analysis_date: Utc::now(),
        })
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}
