//! Page layout: which sections go in which column, and how layout keys map
//! onto sections.

use serde::{Deserialize, Serialize};

use crate::schema::ResumeData;

const DEFAULT_MAIN: &[&str] = &[
    "profiles",
    "summary",
    "experience",
    "education",
    "projects",
    "volunteer",
    "references",
];

const DEFAULT_SIDEBAR: &[&str] = &[
    "skills",
    "interests",
    "certifications",
    "awards",
    "publications",
    "languages",
];

/// Prefix of layout keys that point at user-defined sections.
pub const CUSTOM_PREFIX: &str = "custom.";

/// Document-level settings that travel with the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub template: String,
    /// Pages → columns → ordered section keys.
    pub layout: Vec<Vec<Vec<String>>>,
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            template: "latex".to_string(),
            layout: vec![vec![owned_keys(DEFAULT_MAIN), owned_keys(DEFAULT_SIDEBAR)]],
        }
    }
}

fn owned_keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

/// The two-column assignment a template renders from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub main: Vec<String>,
    pub sidebar: Vec<String>,
}

impl Columns {
    pub fn new(main: Vec<String>, sidebar: Vec<String>) -> Self {
        Columns { main, sidebar }
    }

    /// Builds columns from one layout page. Missing columns are empty; columns
    /// beyond the second are ignored.
    pub fn from_page(page: &[Vec<String>]) -> Self {
        Columns {
            main: page.first().cloned().unwrap_or_default(),
            sidebar: page.get(1).cloned().unwrap_or_default(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.main.iter().chain(self.sidebar.iter()).map(String::as_str)
    }
}

/// A parsed layout key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKey {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Awards,
    Publications,
    Languages,
    Interests,
    Volunteer,
    References,
    Profiles,
    /// `custom.<id>`; the id is the second dot-separated segment and may be empty.
    Custom(String),
    Unknown,
}

impl SectionKey {
    pub fn parse(key: &str) -> Self {
        match key {
            "summary" => SectionKey::Summary,
            "experience" => SectionKey::Experience,
            "education" => SectionKey::Education,
            "skills" => SectionKey::Skills,
            "projects" => SectionKey::Projects,
            "certifications" => SectionKey::Certifications,
            "awards" => SectionKey::Awards,
            "publications" => SectionKey::Publications,
            "languages" => SectionKey::Languages,
            "interests" => SectionKey::Interests,
            "volunteer" => SectionKey::Volunteer,
            "references" => SectionKey::References,
            "profiles" => SectionKey::Profiles,
            other if other.starts_with(CUSTOM_PREFIX) => {
                let id = other.split('.').nth(1).unwrap_or_default();
                SectionKey::Custom(id.to_string())
            }
            _ => SectionKey::Unknown,
        }
    }
}

/// Why a layout key will produce no output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkippedKey {
    UnknownSection { key: String },
    MissingCustomSection { key: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub rendered_keys: usize,
    pub skipped: Vec<SkippedKey>,
}

impl LayoutReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Lists the layout keys that cannot resolve to a section. Hidden or empty
/// sections still count as resolved.
pub fn validate_layout(resume: &ResumeData, columns: &Columns) -> LayoutReport {
    let mut report = LayoutReport::default();

    for key in columns.keys() {
        match SectionKey::parse(key) {
            SectionKey::Unknown => report.skipped.push(SkippedKey::UnknownSection {
                key: key.to_string(),
            }),
            SectionKey::Custom(id) if !resume.sections.custom.contains_key(&id) => {
                report.skipped.push(SkippedKey::MissingCustomSection {
                    key: key.to_string(),
                })
            }
            _ => report.rendered_keys += 1,
        }
    }

    report
}
