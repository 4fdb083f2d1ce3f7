//! Shared types between the trail engine and the portfolio UI
//!
//! These types are used by both:
//! - the trail engine (native Rust, tested without a browser)
//! - Dioxus components (WASM)
//!
//! Serializable with serde so the resume can ship as an embedded JSON document.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

// ============================================================================
// Color Mode
// ============================================================================

/// Site-wide color mode. Drives stroke colors, backgrounds and text colors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Dark,
    Light,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Dark => "dark",
            ColorMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Dark => ColorMode::Light,
            ColorMode::Light => ColorMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color mode: {0:?} (expected \"dark\" or \"light\")")]
pub struct ParseColorModeError(pub String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ColorMode::Dark),
            "light" => Ok(ColorMode::Light),
            other => Err(ParseColorModeError(other.to_string())),
        }
    }
}

// ============================================================================
// Resume
// ============================================================================

/// Everything rendered below the hero section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub about: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    pub tech: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub conference: String,
    pub date: String,
    pub link: String,
}

/// Raw resume document compiled into the binary.
pub const RESUME_JSON: &str = include_str!("../data/resume.json");

static RESUME: OnceLock<Resume> = OnceLock::new();

impl Resume {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The site's resume, parsed once from [`RESUME_JSON`].
///
/// A malformed document is logged and replaced with an empty resume so the
/// page still renders its hero.
pub fn resume() -> &'static Resume {
    RESUME.get_or_init(|| match Resume::from_json(RESUME_JSON) {
        Ok(resume) => resume,
        Err(e) => {
            tracing::error!("Failed to parse embedded resume document: {}", e);
            Resume::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_parses_known_values() {
        assert_eq!("dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert_eq!("light".parse::<ColorMode>(), Ok(ColorMode::Light));
    }

    #[test]
    fn color_mode_rejects_unknown_values() {
        let err = "Dark".parse::<ColorMode>().expect_err("case sensitive");
        assert_eq!(err, ParseColorModeError("Dark".to_string()));
        assert!(err.to_string().contains("unknown color mode"));
    }

    #[test]
    fn color_mode_serializes_lowercase() {
        let json = serde_json::to_string(&ColorMode::Light).unwrap();
        assert_eq!(json, "\"light\"");
        assert_eq!(ColorMode::Dark.to_string(), "dark");
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled().toggled(), ColorMode::Light);
        assert_eq!(ColorMode::default(), ColorMode::Dark);
    }

    #[test]
    fn embedded_resume_has_every_section() {
        let resume = Resume::from_json(RESUME_JSON).expect("embedded resume should parse");
        assert!(!resume.about.is_empty());
        assert_eq!(resume.education.len(), 2);
        assert_eq!(resume.experience.len(), 4);
        assert_eq!(resume.projects.len(), 2);
        assert_eq!(resume.publications.len(), 1);
        assert!(resume.skills.iter().any(|s| s == "ROS"));
    }

    #[test]
    fn optional_fields_are_optional() {
        let resume = resume();
        assert!(resume.education[0].details.is_none());
        assert!(resume.education[1].details.is_some());
        assert!(resume.experience[0].link.is_none());
        assert_eq!(
            resume.experience[2].link.as_deref(),
            Some("https://members.acmucsd.com/")
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let resume = Resume::from_json(r#"{"about": "hi"}"#).unwrap();
        assert_eq!(resume.about, "hi");
        assert!(resume.skills.is_empty());
        assert!(resume.publications.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(Resume::from_json(r#"{"education": []}"#).is_err());
    }
}
