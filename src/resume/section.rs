use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::taxonomy::SECTION_BOUNDARIES;

/// Characters read past a header when no later header closes the section.
pub const SECTION_LOOKAHEAD_CHARS: usize = 3000;

static NEXT_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:^|\n)\s*(?:{})\s*[:\n]",
        SECTION_BOUNDARIES.join("|")
    ))
    .unwrap()
});

/// Half-open byte range `[start, end)` of a section body. Both ends lie on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpan {
    pub start: usize,
    pub end: usize,
}

impl SectionSpan {
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the body of a section given its candidate header phrases.
#[derive(Debug, Clone)]
pub struct SectionLocator {
    headers: Vec<Regex>,
}

impl SectionLocator {
    pub fn new<S: AsRef<str>>(header_candidates: &[S]) -> Result<Self> {
        let headers = header_candidates
            .iter()
            .map(|h| Regex::new(&header_pattern(h.as_ref())))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { headers })
    }

    /// Candidates are tried in order and the first one found anywhere wins, at its
    /// first occurrence in the document.
    pub fn locate(&self, text: &str) -> Option<SectionSpan> {
        let header = self.headers.iter().find_map(|re| re.find(text))?;
        let start = header.end();
        let rest = &text[start..];

        let end = match NEXT_SECTION.find(rest) {
            Some(next) => start + next.start(),
            None => start + char_budget_offset(rest, SECTION_LOOKAHEAD_CHARS),
        };

        Some(SectionSpan { start, end })
    }
}

/// One-shot form of [`SectionLocator::locate`].
pub fn locate<S: AsRef<str>>(text: &str, header_candidates: &[S]) -> Result<Option<SectionSpan>> {
    Ok(SectionLocator::new(header_candidates)?.locate(text))
}

/// A header stands alone on its line: line start, optional indent, the phrase,
/// then a colon or line break.
fn header_pattern(header: &str) -> String {
    format!(r"(?i)(?:^|\n)\s*{}\s*[:\n]", regex::escape(header.trim()))
}

fn char_budget_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
