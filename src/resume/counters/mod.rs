pub mod achievements;
pub mod certifications;
pub mod experience;
pub mod projects;
pub mod skills;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::resume::section::{SectionLocator, SectionSpan};

pub use achievements::AchievementsCounter;
pub use certifications::CertificationsCounter;
pub use experience::ExperienceCounter;
pub use projects::ProjectsCounter;
pub use skills::SkillsCounter;

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*[•●▪▸►→⦿◆■-]\s+").unwrap());

/// Estimates how many items of one kind a resume lists.
///
/// A counter first tries its section-based signals and drops to a single
/// document-wide pattern when the section is missing or yields nothing.
pub trait ItemCounter: Send + Sync {
    fn name(&self) -> &'static str;

    fn cap(&self) -> u32;

    fn locator(&self) -> &SectionLocator;

    /// Count from the located section body, or `None` to use the fallback.
    fn try_structured(&self, text: &str, section: &str) -> Option<u32>;

    fn fallback_global(&self, text: &str) -> u32;

    fn count(&self, text: &str) -> u32 {
        let span = self.locator().locate(text);
        self.count_with_span(text, span)
    }

    fn count_with_span(&self, text: &str, span: Option<SectionSpan>) -> u32 {
        let structured = span.and_then(|s| self.try_structured(text, s.slice(text)));
        let count = match structured {
            Some(count) => count,
            None => {
                let fallback = self.fallback_global(text);
                tracing::debug!(counter = self.name(), fallback, "using document-wide fallback");
                fallback
            }
        };
        count.min(self.cap())
    }
}

pub(crate) fn count_matches(pattern: &Regex, text: &str) -> u32 {
    pattern.find_iter(text).count() as u32
}

/// Bullet-led lines; the first line of `text` only counts if preceded by a newline.
pub(crate) fn count_bullets(text: &str) -> u32 {
    count_matches(&BULLET, text)
}

/// Case-insensitive whole-word alternation over plain words.
pub(crate) fn keyword_regex(words: &[&str]) -> Result<Regex> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))?)
}

pub(crate) fn case_insensitive(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("(?i){}", pattern))?)
}

/// Compiles a fixed list of patterns, one regex each, so overlapping hits are all counted.
pub(crate) fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns.iter().map(|p| case_insensitive(p)).collect()
}

pub(crate) fn count_all(patterns: &[Regex], text: &str) -> u32 {
    patterns.iter().map(|p| count_matches(p, text)).sum()
}
