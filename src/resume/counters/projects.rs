use regex::Regex;

use super::{case_insensitive, count_bullets, count_matches, keyword_regex, ItemCounter};
use crate::error::Result;
use crate::resume::section::SectionLocator;
use crate::resume::signals::{Reconciliation, SignalVector};
use crate::taxonomy::SectionKind;

const CAP: u32 = 8;

const VERBS_PER_PROJECT: u32 = 2;
const TECH_NOUNS_PER_PROJECT: u32 = 2;
const BULLETS_PER_PROJECT: u32 = 3;

const ACTION_VERBS: &[&str] = &[
    "developed", "built", "created", "designed", "implemented", "engineered", "constructed",
    "programmed", "coded", "architected", "deployed", "launched", "established", "integrated",
    "devised",
];

// `Name | Tech, Stack` or `Name - Tech Stack` title lines.
const TITLE_LINE: &str = r"\n\s*[A-Z][a-zA-Z0-9\s]+\s*[|–—-]\s*[A-Za-z,\s.+#]+";

const TECH_NOUNS: &str = r"(web\s+application|mobile\s+app|system|platform|api|website|software|tool|dashboard|interface|database|algorithm|model|framework)";

const REPOSITORY_LINK: &str = r"github\.com|gitlab\.com|bitbucket\.org";

const FALLBACK: &str = r"(developed|built|created)\s+(?:a|an|the)?\s*(?:\w+\s+){0,3}(application|system|platform|website|tool)";

pub struct ProjectsCounter {
    locator: SectionLocator,
    title_line: Regex,
    action_verbs: Regex,
    tech_nouns: Regex,
    repository_link: Regex,
    fallback: Regex,
}

impl ProjectsCounter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            locator: SectionLocator::new(SectionKind::Projects.headers())?,
            title_line: Regex::new(TITLE_LINE)?,
            action_verbs: keyword_regex(ACTION_VERBS)?,
            tech_nouns: case_insensitive(TECH_NOUNS)?,
            repository_link: case_insensitive(REPOSITORY_LINK)?,
            fallback: case_insensitive(FALLBACK)?,
        })
    }

    pub fn signals(&self, section: &str) -> SignalVector {
        let mut signals = SignalVector::new();
        signals
            .record("titles", count_matches(&self.title_line, section))
            .record(
                "action_verbs",
                count_matches(&self.action_verbs, section) / VERBS_PER_PROJECT,
            )
            .record(
                "tech_nouns",
                count_matches(&self.tech_nouns, section) / TECH_NOUNS_PER_PROJECT,
            )
            .record("bullets", count_bullets(section) / BULLETS_PER_PROJECT)
            .record("repo_links", count_matches(&self.repository_link, section));
        signals
    }
}

impl ItemCounter for ProjectsCounter {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn cap(&self) -> u32 {
        CAP
    }

    fn locator(&self) -> &SectionLocator {
        &self.locator
    }

    fn try_structured(&self, _text: &str, section: &str) -> Option<u32> {
        let signals = self.signals(section);
        let count = signals.reconcile(Reconciliation::MedianNonZero);
        tracing::debug!(counter = self.name(), %signals, count, "reconciled signals");
        // a located section with any evidence holds at least one project
        (count > 0).then_some(count.max(1))
    }

    fn fallback_global(&self, text: &str) -> u32 {
        count_matches(&self.fallback, text)
    }
}
