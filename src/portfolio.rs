//! Typed records for the site's portfolio data.
//!
//! Human-readable fields are [`LocalizedText`] maps keyed by language code.
//! The accessors pick the text for a language, falling back to the site's
//! default language and finally to an empty string.

use crate::error::ProficiencyError;
use crate::i18n::{localized, ContentMap, Language};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Language code → text.
pub type LocalizedText = HashMap<String, String>;

fn pick(text: &LocalizedText, lang: Language, default_language: Language) -> &str {
    localized(text, lang, default_language, default_language)
        .map(String::as_str)
        .unwrap_or("")
}

/// The portfolio sections of the content mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalInfo>,
    #[serde(default)]
    pub projects: Vec<ProjectData>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
}

impl PortfolioData {
    /// Read the portfolio sections out of a content mapping.
    ///
    /// Missing sections are empty; everything else in the mapping is ignored.
    pub fn from_content(content: &ContentMap) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(content.clone()))
    }

    /// Projects with featured ones first.
    pub fn featured_projects(&self) -> Vec<&ProjectData> {
        featured_first(&self.projects)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: LocalizedText,
    pub bio: LocalizedText,
    pub photo: String,
    pub resume: String,
    pub social: SocialLinks,
}

impl PersonalInfo {
    pub fn title(&self, lang: Language, default_language: Language) -> &str {
        pick(&self.title, lang, default_language)
    }

    pub fn bio(&self, lang: Language, default_language: Language) -> &str {
        pick(&self.bio, lang, default_language)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectData {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectData {
    pub fn title(&self, lang: Language, default_language: Language) -> &str {
        pick(&self.title, lang, default_language)
    }

    pub fn description(&self, lang: Language, default_language: Language) -> &str {
        pick(&self.description, lang, default_language)
    }
}

/// Featured projects first, otherwise in the given order.
pub fn featured_first(projects: &[ProjectData]) -> Vec<&ProjectData> {
    let mut ordered: Vec<_> = projects.iter().collect();
    ordered.sort_by_key(|project| !project.featured);
    ordered
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub start: LocalizedText,
    pub end: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: LocalizedText,
    pub duration: Duration,
    pub description: LocalizedText,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl ExperienceItem {
    pub fn position(&self, lang: Language, default_language: Language) -> &str {
        pick(&self.position, lang, default_language)
    }

    pub fn description(&self, lang: Language, default_language: Language) -> &str {
        pick(&self.description, lang, default_language)
    }

    /// "start - end" in `lang`.
    pub fn period(&self, lang: Language, default_language: Language) -> String {
        format!(
            "{} - {}",
            pick(&self.duration.start, lang, default_language),
            pick(&self.duration.end, lang, default_language)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Tools,
    Database,
}

/// Self-assessed skill level, 1 (basic) to 5 (expert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = ProficiencyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ProficiencyError(value))
        }
    }
}

impl From<Proficiency> for u8 {
    fn from(level: Proficiency) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub icon: String,
    pub category: TechCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Proficiency>,
}
