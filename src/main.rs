use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use elo_rating::extract::extract_text;
use elo_rating::models::skill::SkillCategory;
use elo_rating::models::{EloReport, ResumeReport};
use elo_rating::{Config, GitHubClient, LeetCodeClient, PlatformConfig, RatingPipeline, ResumeAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "elo-rating")]
#[command(version = "0.1.0")]
#[command(about = "Rate developers from LeetCode, GitHub and resume signals")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a resume file (.pdf, .docx or .txt)
    Resume {
        file: PathBuf,
    },
    /// Compute the combined ELO rating
    Rate {
        /// LeetCode username
        #[arg(long)]
        leetcode: String,

        /// GitHub username
        #[arg(long)]
        github: String,

        /// Resume file (.pdf, .docx or .txt)
        #[arg(long)]
        resume: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("elo_rating=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;
    let analyzer = Arc::new(ResumeAnalyzer::new()?);

    let output = match &args.command {
        Command::Resume { file } => {
            let text = extract_text(file, config.max_resume_bytes)?;
            let report = analyzer.report(&text)?;
            let skills = analyzer.detected_skills(&text);

            match args.format {
                Format::Json => serde_json::to_string_pretty(&report)?,
                Format::Markdown => format_resume_markdown(&report, &skills),
                Format::Text => format_resume_text(&report, &skills),
            }
        }
        Command::Rate {
            leetcode,
            github,
            resume,
        } => {
            let platform_config = PlatformConfig::from(&config);
            let pipeline = RatingPipeline::new(
                LeetCodeClient::new(&platform_config)?,
                GitHubClient::new(&platform_config)?,
                analyzer,
                config.max_resume_bytes,
            )
            .with_progress(true);

            tracing::info!(%leetcode, %github, "starting rating");
            let report = pipeline.rate(leetcode, github, resume).await?;

            match args.format {
                Format::Json => serde_json::to_string_pretty(&report)?,
                Format::Markdown => format_elo_markdown(&report),
                Format::Text => format_elo_text(&report),
            }
        }
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_resume_text(report: &ResumeReport, skills: &BTreeMap<SkillCategory, Vec<String>>) -> String {
    let m = &report.metrics;
    let b = &report.breakdown;
    let mut output = String::new();

    output.push_str("\n=== Resume Score Breakdown ===\n\n");
    output.push_str("Detected items:\n");
    output.push_str(&format!("  Internships/Experience: {:>3}\n", m.internships));
    output.push_str(&format!("  Projects:               {:>3}\n", m.projects));
    output.push_str(&format!("  Certifications:         {:>3}\n", m.certifications));
    output.push_str(&format!("  Technical Skills:       {:>3}\n", m.skills));
    output.push_str(&format!("  Achievements:           {:>3}\n", m.achievements));

    output.push_str("\nWeighted scores:\n");
    output.push_str(&format!("  Internships    (30%): {:>6.2} / 30.00\n", b.internships_score));
    output.push_str(&format!("  Projects       (25%): {:>6.2} / 25.00\n", b.projects_score));
    output.push_str(&format!(
        "  Certifications (20%): {:>6.2} / 20.00\n",
        b.certifications_score
    ));
    output.push_str(&format!("  Skills         (15%): {:>6.2} / 15.00\n", b.skills_score));
    output.push_str(&format!("  Achievements   (10%): {:>6.2} / 10.00\n", b.achievements_score));
    output.push_str(&format!("  Total:                {:>6.2} / 100.00\n", b.total_score));

    output.push_str(&format!("\n{}\n{}\n", b.tier.label(), b.tier.insight()));

    if !skills.is_empty() {
        output.push_str("\nSkills found:\n");
        for (category, names) in skills {
            output.push_str(&format!("  {}: {}\n", category, names.join(", ")));
        }
    }

    if !report.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        for hint in &report.recommendations {
            output.push_str(&format!("  - {}\n", hint));
        }
    }

    output
}

fn format_resume_markdown(
    report: &ResumeReport,
    skills: &BTreeMap<SkillCategory, Vec<String>>,
) -> String {
    let m = &report.metrics;
    let b = &report.breakdown;
    let mut output = String::new();

    output.push_str("# Resume Score\n\n");
    output.push_str(&format!("**{}** ({:.0} / 100)\n\n", b.tier.label(), b.total_score));
    output.push_str(&format!("> {}\n\n", b.tier.insight()));

    output.push_str("| Metric | Count | Score | Weight |\n");
    output.push_str("|--------|-------|-------|--------|\n");
    output.push_str(&format!(
        "| Internships | {} | {:.2} | 30 |\n",
        m.internships, b.internships_score
    ));
    output.push_str(&format!("| Projects | {} | {:.2} | 25 |\n", m.projects, b.projects_score));
    output.push_str(&format!(
        "| Certifications | {} | {:.2} | 20 |\n",
        m.certifications, b.certifications_score
    ));
    output.push_str(&format!("| Skills | {} | {:.2} | 15 |\n", m.skills, b.skills_score));
    output.push_str(&format!(
        "| Achievements | {} | {:.2} | 10 |\n",
        m.achievements, b.achievements_score
    ));

    if !skills.is_empty() {
        output.push_str("\n## Skills\n\n");
        for (category, names) in skills {
            output.push_str(&format!("- **{}**: {}\n", category, names.join(", ")));
        }
    }

    if !report.recommendations.is_empty() {
        output.push_str("\n## Recommendations\n\n");
        for hint in &report.recommendations {
            output.push_str(&format!("- {}\n", hint));
        }
    }

    output
}

fn format_elo_text(report: &EloReport) -> String {
    let scores = &report.platform_scores;
    let leetcode = &report.raw_data.leetcode;
    let github = &report.raw_data.github;
    let mut output = String::new();

    output.push_str(&format!("\n=== Developer Rating: {} ===\n\n", report.username));
    output.push_str(&format!(
        "ELO: {} ({}, {})\n{}\n\n",
        report.elo_rating,
        report.tier,
        report.tier.percentile(),
        report.tier.description()
    ));

    output.push_str("Platform scores:\n");
    output.push_str(&format!("  LeetCode (40%): {:>5.1}\n", scores.leetcode_score));
    output.push_str(&format!("  GitHub   (30%): {:>5.1}\n", scores.github_score));
    output.push_str(&format!("  Resume   (30%): {:>5.1}\n", scores.resume_score));

    output.push_str(&format!(
        "\nLeetCode: {} solved ({} hard), contest rating {}{}\n",
        leetcode.total_solved,
        leetcode.hard_solved,
        leetcode.contest_rating,
        if leetcode.has_contest_history {
            ""
        } else {
            " (base)"
        }
    ));
    output.push_str(&format!(
        "GitHub: {} repos, {} commits last year, {} stars, {} followers, {} languages\n",
        github.public_repos,
        github.commits_last_year,
        github.total_stars,
        github.followers,
        github.language_diversity
    ));
    output.push_str(&format!(
        "Resume: {}\n",
        report.raw_data.resume.breakdown.tier.label()
    ));

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        report.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_elo_markdown(report: &EloReport) -> String {
    let scores = &report.platform_scores;
    let mut output = String::new();

    output.push_str(&format!("# Developer Rating: {}\n\n", report.username));
    output.push_str(&format!(
        "**ELO {}** ({}, {}) - {}\n\n",
        report.elo_rating,
        report.tier,
        report.tier.percentile(),
        report.tier.description()
    ));

    output.push_str("| Platform | Score | Weight |\n|----------|-------|--------|\n");
    output.push_str(&format!("| LeetCode | {:.1} | 40% |\n", scores.leetcode_score));
    output.push_str(&format!("| GitHub | {:.1} | 30% |\n", scores.github_score));
    output.push_str(&format!("| Resume | {:.1} | 30% |\n", scores.resume_score));

    let resume = &report.raw_data.resume;
    if !resume.recommendations.is_empty() {
        output.push_str("\n## Resume Recommendations\n\n");
        for hint in &resume.recommendations {
            output.push_str(&format!("- {}\n", hint));
        }
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        report.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
