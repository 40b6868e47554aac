use regex::Regex;

use super::{case_insensitive, compile_all, count_all, count_bullets, count_matches, ItemCounter};
use crate::error::Result;
use crate::resume::section::{SectionLocator, SectionSpan};
use crate::resume::signals::{Reconciliation, SignalVector};
use crate::taxonomy::SectionKind;

const CAP: u32 = 8;

const LEADERSHIP_TERMS_PER_ROLE: u32 = 2;

const COMPETITIVE_PROGRAMMING: &[&str] = &[
    r"\bgate\b",
    r"\bleetcode\b",
    r"\bcodeforces\b",
    r"\bcodechef\b",
    r"\bhackerrank\b",
    r"\bhackerearth\b",
    r"\btopcoder\b",
    r"\batcoder\b",
    r"\bgfg\b",
    r"\bgeeksforgeeks\b",
    r"\bsolved\s+\d+\+?\s+(problems?|questions?)",
    r"\d+\s*-?\s*star\b",
    r"\brating\s*:?\s*\d{3,4}\b",
    r"\brank\s*:?\s*\d+",
    r"\bair\s+\d+",
    r"\btop\s+\d+%?",
];

const AWARDS: &[&str] = &[
    r"\bscholarship\b",
    r"\bfellowship\b",
    r"\baward\b",
    r"\bwinner\b",
    r"\bfinalist\b",
    r"\bchampion\b",
    r"\bmerit\b",
    r"\bdean'?s\s+list\b",
    r"\bhonor\s+roll\b",
    r"\b(first|1st|second|2nd|third|3rd)\s+(place|position|prize|rank)\b",
    r"\bgold\s+medal\b",
    r"\bsilver\s+medal\b",
    r"\bbronze\s+medal\b",
];

const COMPETITIONS: &[&str] = &[
    r"\bhackathon\b",
    r"\bcompetition\b",
    r"\bcontest\b",
    r"\bcode\s*jam\b",
    r"\bhash\s*code\b",
    r"\bkick\s*start\b",
];

const LEADERSHIP: &[&str] = &[
    r"\b(president|vice president|vp|secretary|treasurer)\b",
    r"\b(head|lead|captain|coordinator|director|chair)\b",
    r"\b(founder|co-founder|organizer|mentor)\b",
    r"\bcore\s+(team\s+)?member\b",
    r"\bproject\s+lead\b",
    r"\b(organized|conducted|led|managed|spearheaded)\b",
];

// Some resumes file course platforms under achievements.
const FALLBACK: &str = r"\b(nptel|coursera|udemy|aws\s+certified|google\s+certified)\b";

/// Counts awards, competitive-programming results and leadership roles.
pub struct AchievementsCounter {
    locator: SectionLocator,
    extracurricular: SectionLocator,
    accomplishments: Vec<Regex>,
    leadership: Vec<Regex>,
    fallback: Regex,
}

impl AchievementsCounter {
    pub fn new() -> Result<Self> {
        let accomplishments = [COMPETITIVE_PROGRAMMING, AWARDS, COMPETITIONS]
            .into_iter()
            .map(compile_all)
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();

        Ok(Self {
            locator: SectionLocator::new(SectionKind::Achievements.headers())?,
            extracurricular: SectionLocator::new(SectionKind::Extracurricular.headers())?,
            accomplishments,
            leadership: compile_all(LEADERSHIP)?,
            fallback: case_insensitive(FALLBACK)?,
        })
    }

    /// Section signals from the achievements body (when found) plus the
    /// leadership signal from any extracurricular section in `text`.
    pub fn signals(&self, text: &str, section: Option<&str>) -> SignalVector {
        let mut signals = SignalVector::new();
        if let Some(section) = section {
            signals
                .record("bullets", count_bullets(section))
                .record("accomplishments", count_all(&self.accomplishments, section));
        }
        if let Some(span) = self.extracurricular.locate(text) {
            let terms = count_all(&self.leadership, span.slice(text));
            signals.record("leadership", terms / LEADERSHIP_TERMS_PER_ROLE);
        }
        signals
    }
}

impl ItemCounter for AchievementsCounter {
    fn name(&self) -> &'static str {
        "achievements"
    }

    fn cap(&self) -> u32 {
        CAP
    }

    fn locator(&self) -> &SectionLocator {
        &self.locator
    }

    fn try_structured(&self, text: &str, section: &str) -> Option<u32> {
        let count = self
            .signals(text, Some(section))
            .reconcile(Reconciliation::Max);
        (count > 0).then_some(count)
    }

    fn fallback_global(&self, text: &str) -> u32 {
        count_matches(&self.fallback, text)
    }

    // Leadership roles count even when there is no achievements header.
    fn count_with_span(&self, text: &str, span: Option<SectionSpan>) -> u32 {
        let signals = self.signals(text, span.map(|s| s.slice(text)));
        let count = signals.reconcile(Reconciliation::Max);
        tracing::debug!(counter = self.name(), %signals, count, "reconciled signals");

        let count = if count > 0 {
            count
        } else {
            self.fallback_global(text)
        };
        count.min(CAP)
    }
}
