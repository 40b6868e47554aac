use regex::Regex;

use super::{case_insensitive, count_bullets, count_matches, keyword_regex, ItemCounter};
use crate::error::Result;
use crate::resume::section::SectionLocator;
use crate::resume::signals::{Reconciliation, SignalVector};
use crate::taxonomy::SectionKind;

const CAP: u32 = 10;

const KEYWORDS_PER_CERTIFICATE: u32 = 2;

const PLATFORMS: &[&str] = &[
    "coursera", "udemy", "edx", "linkedin learning", "pluralsight", "udacity", "codecademy",
    "freecodecamp", "khan academy", "microsoft", "google", "amazon", "ibm", "oracle", "cisco",
    "aws", "azure", "comptia", "nptel", "swayam",
];

const CERTIFICATE_KEYWORDS: &[&str] = &[
    "certified", "certification", "certificate", "credential", "diploma", "course", "training",
    "completion",
];

const YEAR: &str = r"\b(20\d{2}|19\d{2})\b";

const KNOWN_CERTIFICATES: &str = r"(aws\s+certified|google\s+certified|microsoft\s+certified|cisco\s+certified|python|java|machine\s+learning|data\s+science|web\s+development|full\s+stack)";

const FALLBACK: &str = r"\b(coursera|udemy|nptel|aws\s+certified|google\s+certified)\b";

/// Counts certifications and completed courses.
///
/// Listed certificates are rarely ambiguous, so the largest signal is kept.
pub struct CertificationsCounter {
    locator: SectionLocator,
    platforms: Regex,
    keywords: Regex,
    year: Regex,
    known_certificates: Regex,
    fallback: Regex,
}

impl CertificationsCounter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            locator: SectionLocator::new(SectionKind::Certifications.headers())?,
            platforms: keyword_regex(PLATFORMS)?,
            keywords: keyword_regex(CERTIFICATE_KEYWORDS)?,
            year: Regex::new(YEAR)?,
            known_certificates: case_insensitive(KNOWN_CERTIFICATES)?,
            fallback: case_insensitive(FALLBACK)?,
        })
    }

    pub fn signals(&self, section: &str) -> SignalVector {
        let mut signals = SignalVector::new();
        signals
            .record("bullets", count_bullets(section))
            .record("platforms", count_matches(&self.platforms, section))
            .record(
                "keywords",
                count_matches(&self.keywords, section) / KEYWORDS_PER_CERTIFICATE,
            )
            .record("years", count_matches(&self.year, section))
            .record("known_names", count_matches(&self.known_certificates, section));
        signals
    }
}

impl ItemCounter for CertificationsCounter {
    fn name(&self) -> &'static str {
        "certifications"
    }

    fn cap(&self) -> u32 {
        CAP
    }

    fn locator(&self) -> &SectionLocator {
        &self.locator
    }

    // A located section is trusted even when every signal is zero.
    fn try_structured(&self, _text: &str, section: &str) -> Option<u32> {
        let signals = self.signals(section);
        let count = signals.reconcile(Reconciliation::Max);
        tracing::debug!(counter = self.name(), %signals, count, "reconciled signals");
        Some(count)
    }

    fn fallback_global(&self, text: &str) -> u32 {
        count_matches(&self.fallback, text)
    }
}
