/// Logical resume sections the counters look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Experience,
    Projects,
    Certifications,
    Skills,
    Achievements,
    Extracurricular,
}

impl SectionKind {
    /// Header phrases in priority order. Matching is case-insensitive.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Experience => &[
                "experience",
                "work experience",
                "professional experience",
                "internships",
                "internship",
                "work history",
                "employment",
            ],
            SectionKind::Projects => &[
                "projects",
                "personal projects",
                "academic projects",
                "key projects",
                "technical projects",
                "major projects",
                "project work",
                "project experience",
            ],
            SectionKind::Certifications => &[
                "certifications",
                "certification",
                "certificates",
                "licenses and certifications",
                "professional certifications",
                "courses",
                "online courses",
                "training",
                "courses and certifications",
            ],
            SectionKind::Skills => &[
                "skills",
                "technical skills",
                "core competencies",
                "technologies",
            ],
            SectionKind::Achievements => &[
                "achievements",
                "achievement",
                "awards",
                "honors",
                "accomplishments",
                "awards and honors",
                "recognitions",
                "scholarships",
            ],
            SectionKind::Extracurricular => &[
                "extracurricular",
                "activities",
                "leadership",
                "positions of responsibility",
            ],
        }
    }
}

/// Header phrases that close whatever section precedes them, as regex fragments.
pub const SECTION_BOUNDARIES: &[&str] = &[
    r"experience",
    r"work\s+experience",
    r"internships?",
    r"professional\s+experience",
    r"projects?",
    r"education",
    r"academic\s+background",
    r"certifications?",
    r"certificates?",
    r"achievements?",
    r"awards?",
    r"honors?",
    r"technical\s+skills?",
    r"skills?",
    r"extracurricular",
    r"activities",
    r"leadership",
    r"positions?\s+of\s+responsibility",
    r"training",
    r"courses?",
    r"publications?",
    r"references?",
];
