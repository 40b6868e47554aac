pub mod sections;

use regex::{RegexSet, RegexSetBuilder};

use crate::error::Result;
use crate::models::skill::{Skill, SkillCategory};

pub use sections::{SectionKind, SECTION_BOUNDARIES};

// Unicode-aware guards on a few hundred terms outgrow the default limit.
const MATCHER_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Fixed vocabulary of technology terms recognised in resume text.
pub struct SkillTaxonomy {
    skills: Vec<Skill>,
    matcher: RegexSet,
}

impl SkillTaxonomy {
    pub fn new() -> Result<Self> {
        let mut taxonomy = Self {
            skills: Vec::new(),
            matcher: RegexSet::empty(),
        };

        taxonomy.init_languages();
        taxonomy.init_frontend();
        taxonomy.init_backend();
        taxonomy.init_mobile();
        taxonomy.init_databases();
        taxonomy.init_cloud_devops();
        taxonomy.init_ml_ai();
        taxonomy.init_data_science();
        taxonomy.init_tools();
        taxonomy.init_concepts();

        taxonomy.matcher =
            RegexSetBuilder::new(taxonomy.skills.iter().map(|s| term_pattern(&s.name)))
                .size_limit(MATCHER_SIZE_LIMIT)
                .build()?;

        Ok(taxonomy)
    }

    fn init_languages(&mut self) {
        self.add_skills(
            SkillCategory::Language,
            &[
                "python", "java", "javascript", "typescript", "c++", "cpp", "c#", "c", "go",
                "golang", "rust", "kotlin", "swift", "ruby", "php", "scala", "r", "matlab",
                "perl", "haskell", "dart", "shell", "bash", "powershell", "objective-c",
                "assembly", "sql", "pl/sql",
            ],
        );
    }

    fn init_frontend(&mut self) {
        self.add_skills(
            SkillCategory::Frontend,
            &[
                "html", "css", "html5", "css3", "react", "reactjs", "angular", "angularjs", "vue",
                "vuejs", "svelte", "next.js", "nextjs", "nuxt", "gatsby", "redux", "jquery",
                "bootstrap", "tailwind", "material-ui", "mui", "sass", "scss", "less", "webpack",
                "vite",
            ],
        );
    }

    fn init_backend(&mut self) {
        self.add_skills(
            SkillCategory::Backend,
            &[
                "node.js", "nodejs", "node", "express", "expressjs", "django", "flask", "fastapi",
                "spring boot", "spring", "asp.net", "dotnet", ".net", "laravel", "rails",
                "ruby on rails", "graphql", "rest api", "restful", "microservices", "serverless",
                "websocket",
            ],
        );
    }

    fn init_mobile(&mut self) {
        // kotlin and swift are already registered as languages
        self.add_skills(
            SkillCategory::Mobile,
            &[
                "android", "ios", "react native", "flutter", "kotlin", "swift", "swiftui",
                "xamarin", "ionic", "cordova",
            ],
        );
    }

    fn init_databases(&mut self) {
        self.add_skills(
            SkillCategory::Database,
            &[
                "mysql", "postgresql", "mongodb", "redis", "sqlite", "oracle", "sql server",
                "mssql", "cassandra", "dynamodb", "firebase", "firestore", "elasticsearch",
                "neo4j", "couchdb", "mariadb",
            ],
        );
    }

    fn init_cloud_devops(&mut self) {
        self.add_skills(
            SkillCategory::CloudDevOps,
            &[
                "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "k8s", "jenkins",
                "terraform", "ansible", "ci/cd", "github actions", "gitlab ci", "circleci",
                "travis ci", "heroku", "netlify", "vercel",
            ],
        );
    }

    fn init_ml_ai(&mut self) {
        self.add_skills(
            SkillCategory::MachineLearning,
            &[
                "machine learning", "deep learning", "tensorflow", "pytorch", "keras",
                "scikit-learn", "sklearn", "pandas", "numpy", "opencv", "nlp", "computer vision",
                "neural networks", "transformers", "bert", "gpt", "cnn", "rnn", "lstm", "gan",
                "xgboost",
            ],
        );
    }

    fn init_data_science(&mut self) {
        self.add_skills(
            SkillCategory::DataScience,
            &[
                "data analysis", "data science", "data visualization", "tableau", "power bi",
                "matplotlib", "seaborn", "plotly", "jupyter", "apache spark", "hadoop", "kafka",
                "airflow", "etl",
            ],
        );
    }

    fn init_tools(&mut self) {
        self.add_skills(
            SkillCategory::Tool,
            &[
                "git", "github", "gitlab", "bitbucket", "svn", "vs code", "visual studio",
                "intellij", "pycharm", "eclipse", "android studio", "xcode", "postman",
                "insomnia", "jira", "confluence", "trello", "slack", "figma", "adobe xd",
            ],
        );
    }

    fn init_concepts(&mut self) {
        self.add_skills(
            SkillCategory::Concept,
            &[
                "data structures", "algorithms", "oop", "oops", "design patterns",
                "system design", "distributed systems", "multithreading", "networking",
                "operating systems", "dbms", "agile", "scrum", "tdd", "testing", "unit testing",
                "api development",
            ],
        );
    }

    fn add_skills(&mut self, category: SkillCategory, names: &[&str]) {
        for name in names {
            if self.skills.iter().any(|s| s.name == *name) {
                continue;
            }
            self.skills.push(Skill {
                id: name.replace([' ', '/', '.'], "_"),
                name: name.to_string(),
                category,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Number of distinct vocabulary terms present anywhere in `text`.
    pub fn count_matches(&self, text: &str) -> u32 {
        self.matcher.matches(text).iter().count() as u32
    }

    /// Vocabulary terms present in `text`, in vocabulary order.
    pub fn find_skills(&self, text: &str) -> Vec<&Skill> {
        self.matcher
            .matches(text)
            .iter()
            .map(|idx| &self.skills[idx])
            .collect()
    }

    pub fn get_skill(&self, name: &str) -> Option<&Skill> {
        let lower = name.to_lowercase();
        self.skills.iter().find(|s| s.name == lower)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive pattern for one vocabulary term.
///
/// Internal whitespace matches any run of whitespace. Ends made of word characters
/// use `\b`; ends like the `+` in `c++` are guarded by a non-word character or the
/// text edge instead, since `\b` would never match after them.
fn term_pattern(term: &str) -> String {
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    let left = if term.starts_with(is_word_char) {
        r"\b"
    } else {
        r"(?:^|\W)"
    };
    let right = if term.ends_with(is_word_char) {
        r"\b"
    } else {
        r"(?:\W|$)"
    };

    format!("(?i){}{}{}", left, body, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> SkillTaxonomy {
        SkillTaxonomy::new().unwrap()
    }

    #[test]
    fn test_vocabulary_is_deduplicated() {
        let taxonomy = taxonomy();
        assert!(taxonomy.len() >= 180);
        assert_eq!(
            taxonomy.get_skill("Kotlin").map(|s| s.category),
            Some(SkillCategory::Language)
        );
    }

    #[test]
    fn test_matches_are_case_insensitive_and_bounded() {
        let taxonomy = taxonomy();
        assert_eq!(taxonomy.count_matches("PYTHON and Docker"), 2);
        // "javascript" must not also count as "java"
        assert_eq!(taxonomy.count_matches("javascript"), 1);
    }

    #[test]
    fn test_symbolic_terms_match() {
        let taxonomy = taxonomy();
        let found: Vec<_> = taxonomy
            .find_skills("Languages: C++, C#")
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert!(found.contains(&"c++"));
        assert!(found.contains(&"c#"));
    }

    #[test]
    fn test_multi_word_terms_allow_flexible_spacing() {
        let taxonomy = taxonomy();
        let found: Vec<_> = taxonomy
            .find_skills("Studied machine\n  learning")
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(found, vec!["machine learning"]);
    }

    #[test]
    fn test_term_pattern_escapes_metacharacters() {
        assert_eq!(term_pattern("node.js"), r"(?i)\bnode\.js\b");
        assert_eq!(term_pattern(".net"), r"(?i)(?:^|\W)\.net\b");
        assert_eq!(term_pattern("c++"), r"(?i)\bc\+\+(?:\W|$)");
    }
}
