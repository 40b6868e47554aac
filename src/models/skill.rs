use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillCategory {
    Language,
    Frontend,
    Backend,
    Mobile,
    Database,
    CloudDevOps,
    MachineLearning,
    DataScience,
    Tool,
    Concept,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Language => "Languages",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
            Self::Database => "Databases",
            Self::CloudDevOps => "Cloud/DevOps",
            Self::MachineLearning => "ML/AI",
            Self::DataScience => "Data Science",
            Self::Tool => "Tools",
            Self::Concept => "Concepts",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
