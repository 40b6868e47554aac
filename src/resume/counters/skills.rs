use once_cell::sync::Lazy;
use regex::Regex;

use super::{count_matches, ItemCounter};
use crate::error::Result;
use crate::models::skill::Skill;
use crate::resume::section::SectionLocator;
use crate::taxonomy::{SectionKind, SkillTaxonomy};

const CAP: u32 = 30;

static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;]").unwrap());

/// Counts distinct technical skills.
///
/// Vocabulary hits are taken over the whole document. A skills section written
/// as a delimited list adds half of whatever its separators suggest beyond the hits.
pub struct SkillsCounter {
    locator: SectionLocator,
    taxonomy: SkillTaxonomy,
}

impl SkillsCounter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            locator: SectionLocator::new(SectionKind::Skills.headers())?,
            taxonomy: SkillTaxonomy::new()?,
        })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn detected(&self, text: &str) -> Vec<&Skill> {
        self.taxonomy.find_skills(text)
    }
}

impl ItemCounter for SkillsCounter {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn cap(&self) -> u32 {
        CAP
    }

    fn locator(&self) -> &SectionLocator {
        &self.locator
    }

    fn try_structured(&self, text: &str, section: &str) -> Option<u32> {
        let hits = self.taxonomy.count_matches(text);
        let separators = count_matches(&LIST_SEPARATOR, section);
        let bonus = separators.saturating_sub(hits) / 2;
        tracing::debug!(counter = self.name(), hits, separators, bonus, "skills list");
        Some(hits + bonus)
    }

    fn fallback_global(&self, text: &str) -> u32 {
        self.taxonomy.count_matches(text)
    }
}
