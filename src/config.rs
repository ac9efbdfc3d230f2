//! Site content and tunables, loaded from `config/site.json`.
//!
//! The document is embedded at compile time, but every consumer receives a
//! [`SiteConfig`] value, so tests and alternative builds can inject their own
//! dataset through [`SiteConfig::from_json`].

use crate::projects::{ProjectCatalog, ProjectRecord};
use crate::telemetry::{LogLevel, Logger};
use serde::Deserialize;

const EMBEDDED_SITE_CONFIG: &str = include_str!("../config/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site config has no title phrases")]
    NoPhrases,

    #[error("title phrase {0} is blank")]
    BlankPhrase(usize),

    #[error("duplicate project id: {0}")]
    DuplicateProject(String),

    #[error("skill {name} has progress {percent}, expected 0..=100")]
    SkillOutOfRange { name: String, percent: u8 },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub name: String,
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub count: u64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub company: String,
    pub highlights: Vec<String>,
}

#[derive(Deserialize)]
struct SiteDocument {
    owner: Owner,
    #[serde(default)]
    log_level: LogLevel,
    phrases: Vec<String>,
    nav: Vec<NavSection>,
    about: Vec<String>,
    stats: Vec<Stat>,
    skills: Vec<SkillCategory>,
    projects: Vec<ProjectRecord>,
    timeline: Vec<TimelineEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub owner: Owner,
    pub log_level: LogLevel,
    pub phrases: Vec<String>,
    pub nav: Vec<NavSection>,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillCategory>,
    pub projects: ProjectCatalog,
    pub timeline: Vec<TimelineEntry>,
}

impl SiteConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE_CONFIG)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let document: SiteDocument = serde_json::from_str(raw)?;

        if document.phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if let Some(index) = document.phrases.iter().position(|phrase| phrase.trim().is_empty()) {
            return Err(ConfigError::BlankPhrase(index));
        }
        if let Some(skill) = document
            .skills
            .iter()
            .flat_map(|category| category.skills.iter())
            .find(|skill| skill.percent > 100)
        {
            return Err(ConfigError::SkillOutOfRange {
                name: skill.name.clone(),
                percent: skill.percent,
            });
        }

        let projects = ProjectCatalog::build(document.projects).map_err(ConfigError::DuplicateProject)?;

        Ok(Self {
            owner: document.owner,
            log_level: document.log_level,
            phrases: document.phrases,
            nav: document.nav,
            about: document.about,
            stats: document.stats,
            skills: document.skills,
            projects,
            timeline: document.timeline,
        })
    }

    pub fn logger(&self) -> Logger {
        Logger::new(self.log_level)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub fn site_document() -> Value {
        json!({
            "owner": {
                "name": "Test Owner",
                "intro": "Builds things.",
                "email": "owner@example.com",
                "phone": "+00 000",
                "location": "Nowhere"
            },
            "log_level": "debug",
            "phrases": ["Rust Developer", "Dashboard Specialist"],
            "nav": [{ "id": "home", "label": "Home" }, { "id": "projects", "label": "Projects" }],
            "about": ["First paragraph."],
            "stats": [{ "label": "Projects", "count": 100, "suffix": "+" }],
            "skills": [{ "name": "Frontend", "skills": [{ "name": "Angular", "percent": 90 }] }],
            "projects": [
                {
                    "id": "webae",
                    "company": "Supracontrols Private Limited",
                    "title": "Web AE Client",
                    "summary": "Plant performance analysis.",
                    "description": "Advanced performance analysis platform.",
                    "features": ["Radar Plot visualization", "PDF/Excel export"],
                    "tech": ["Angular", "TypeScript"]
                },
                {
                    "id": "graciebjj",
                    "company": "Viewzource Technologies",
                    "title": "Graciebjj Academy",
                    "summary": "Academy management.",
                    "description": "Self-defense academy management website.",
                    "features": ["Attendance tracking"],
                    "tech": ["HTML5"],
                    "hidden": true
                }
            ],
            "timeline": []
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::site_document;
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::load().expect("embedded site config should load");

        assert!(!config.phrases.is_empty());
        assert_eq!(
            config.projects.get("webae").map(|record| record.title.as_str()),
            Some("Web AE Client")
        );
        assert!(config.projects.has_hidden());
    }

    #[test]
    fn injected_document_replaces_dataset() {
        let config = SiteConfig::from_json(&site_document().to_string()).expect("fixture loads");

        assert_eq!(config.owner.name, "Test Owner");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.stats[0].suffix, "+");
    }

    #[test]
    fn missing_log_level_defaults_to_info() {
        let mut document = site_document();
        document.as_object_mut().expect("object").remove("log_level");

        let config = SiteConfig::from_json(&document.to_string()).expect("fixture loads");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let mut document = site_document();
        document["phrases"] = json!([]);

        assert!(matches!(
            SiteConfig::from_json(&document.to_string()),
            Err(ConfigError::NoPhrases)
        ));

        document["phrases"] = json!(["ok", "  "]);
        assert!(matches!(
            SiteConfig::from_json(&document.to_string()),
            Err(ConfigError::BlankPhrase(1))
        ));
    }

    #[test]
    fn duplicate_project_is_rejected() {
        let mut document = site_document();
        document["projects"][1]["id"] = json!("webae");

        let error = SiteConfig::from_json(&document.to_string()).expect_err("duplicate id");
        assert_eq!(error.to_string(), "duplicate project id: webae");
    }

    #[test]
    fn skill_over_one_hundred_percent_is_rejected() {
        let mut document = site_document();
        document["skills"][0]["skills"][0]["percent"] = json!(140);

        assert!(matches!(
            SiteConfig::from_json(&document.to_string()),
            Err(ConfigError::SkillOutOfRange { percent: 140, .. })
        ));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }
}
