use regex::Regex;

use super::{case_insensitive, count_bullets, count_matches, keyword_regex, ItemCounter};
use crate::error::Result;
use crate::resume::section::SectionLocator;
use crate::resume::signals::{Reconciliation, SignalVector};
use crate::taxonomy::SectionKind;

const CAP: u32 = 5;

// Entries usually carry three to five bullets each.
const BULLETS_PER_ENTRY: u32 = 4;

const ROLE_KEYWORDS: &[&str] = &[
    "intern", "developer", "engineer", "analyst", "designer", "consultant", "associate",
    "trainee", "assistant", "specialist", "coordinator", "lead", "manager", "researcher",
    "programmer", "scientist", "architect", "administrator", "technician",
];

const DATE_RANGE: &str = r"(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[\s,.-]*\d{4}\s*[-–—to]\s*(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec|present|current|ongoing)";

// Capitalised organisation line followed by a location, a month or a year.
const ORGANIZATION_LINE: &str =
    r"\n\s*[A-Z][a-zA-Z\s&,.-]+(?:\s+[-–|]\s+|\s*\n\s*)(?:[A-Z][a-z]+(?:,\s*[A-Z]{2})?|\d{4})";

const FALLBACK: &str = r"\b(intern|internship|co-?op|trainee)\b";

/// Counts internships and work-experience entries.
pub struct ExperienceCounter {
    locator: SectionLocator,
    date_range: Regex,
    organization_line: Regex,
    roles: Regex,
    fallback: Regex,
}

impl ExperienceCounter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            locator: SectionLocator::new(SectionKind::Experience.headers())?,
            date_range: case_insensitive(DATE_RANGE)?,
            organization_line: Regex::new(ORGANIZATION_LINE)?,
            roles: keyword_regex(ROLE_KEYWORDS)?,
            fallback: case_insensitive(FALLBACK)?,
        })
    }

    pub fn signals(&self, section: &str) -> SignalVector {
        let mut signals = SignalVector::new();
        signals
            .record("date_ranges", count_matches(&self.date_range, section))
            .record("organizations", count_matches(&self.organization_line, section))
            .record("roles", count_matches(&self.roles, section))
            .record("bullets", count_bullets(section) / BULLETS_PER_ENTRY);
        signals
    }
}

impl ItemCounter for ExperienceCounter {
    fn name(&self) -> &'static str {
        "internships"
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
        (count > 0).then_some(count)
    }

    fn fallback_global(&self, text: &str) -> u32 {
        count_matches(&self.fallback, text)
    }
}
