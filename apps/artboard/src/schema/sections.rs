use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::basics::Url;

/// Visibility flag shared by sections and items. Absent in JSON means shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Visible(pub bool);

impl Default for Visible {
    fn default() -> Self {
        Visible(true)
    }
}

impl Visible {
    pub fn is_shown(self) -> bool {
        self.0
    }
}

/// A named, orderable list of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Section<T> {
    pub id: String,
    pub name: String,
    pub columns: u8,
    pub separate_links: bool,
    pub visible: Visible,
    pub items: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(id: &str, name: &str) -> Self {
        Section {
            id: id.to_string(),
            name: name.to_string(),
            columns: 1,
            separate_links: true,
            visible: Visible::default(),
            items: Vec::new(),
        }
    }
}

/// An entry of a list section that can be hidden on its own.
pub trait Item {
    fn visible(&self) -> Visible;
}

impl<T: Item> Section<T> {
    /// Items that are not individually hidden, in order.
    pub fn shown_items(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| item.visible().is_shown())
    }

    /// True when the section should produce output: shown and holding at
    /// least one shown item.
    pub fn is_renderable(&self) -> bool {
        self.visible.is_shown() && self.shown_items().next().is_some()
    }
}

/// Free-form rich text section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySection {
    pub id: String,
    pub name: String,
    pub columns: u8,
    pub visible: Visible,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    pub visible: Visible,
    pub company: String,
    pub position: String,
    pub location: String,
    pub date: String,
    pub summary: String,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub visible: Visible,
    pub institution: String,
    pub study_type: String,
    pub area: String,
    pub score: String,
    pub date: String,
    pub summary: String,
    pub courses: Vec<String>,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub visible: Visible,
    pub name: String,
    pub description: String,
    pub level: u8,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub visible: Visible,
    pub name: String,
    pub description: String,
    pub date: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub id: String,
    pub visible: Visible,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub summary: String,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub id: String,
    pub visible: Visible,
    pub title: String,
    pub awarder: String,
    pub date: String,
    pub summary: String,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub id: String,
    pub visible: Visible,
    pub name: String,
    pub publisher: String,
    pub date: String,
    pub summary: String,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub id: String,
    pub visible: Visible,
    pub name: String,
    pub description: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interest {
    pub id: String,
    pub visible: Visible,
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volunteer {
    pub id: String,
    pub visible: Visible,
    pub organization: String,
    pub position: String,
    pub location: String,
    pub date: String,
    pub summary: String,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub id: String,
    pub visible: Visible,
    pub name: String,
    pub description: String,
    pub summary: String,
    pub url: Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: String,
    pub visible: Visible,
    pub network: String,
    pub username: String,
    /// Simple Icons slug, e.g. `github`.
    pub icon: String,
    pub url: Url,
}

/// Item of a user-defined section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomItem {
    pub id: String,
    pub visible: Visible,
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub url: Url,
}

impl Item for Experience {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Education {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Skill {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Project {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Certification {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Award {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Publication {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Language {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Interest {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Volunteer {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Reference {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for Profile {
    fn visible(&self) -> Visible {
        self.visible
    }
}

impl Item for CustomItem {
    fn visible(&self) -> Visible {
        self.visible
    }
}

/// All sections of a resume. Built-in sections are fixed fields; user-defined
/// ones live in `custom`, keyed by their id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub summary: SummarySection,
    pub experience: Section<Experience>,
    pub education: Section<Education>,
    pub skills: Section<Skill>,
    pub projects: Section<Project>,
    pub certifications: Section<Certification>,
    pub awards: Section<Award>,
    pub publications: Section<Publication>,
    pub languages: Section<Language>,
    pub interests: Section<Interest>,
    pub volunteer: Section<Volunteer>,
    pub references: Section<Reference>,
    pub profiles: Section<Profile>,
    pub custom: BTreeMap<String, Section<CustomItem>>,
}

impl Default for Sections {
    fn default() -> Self {
        Sections {
            summary: SummarySection {
                id: "summary".to_string(),
                name: "Summary".to_string(),
                columns: 1,
                visible: Visible::default(),
                content: String::new(),
            },
            experience: Section::new("experience", "Experience"),
            education: Section::new("education", "Education"),
            skills: Section::new("skills", "Skills"),
            projects: Section::new("projects", "Projects"),
            certifications: Section::new("certifications", "Certifications"),
            awards: Section::new("awards", "Awards"),
            publications: Section::new("publications", "Publications"),
            languages: Section::new("languages", "Languages"),
            interests: Section::new("interests", "Interests"),
            volunteer: Section::new("volunteer", "Volunteering"),
            references: Section::new("references", "References"),
            profiles: Section::new("profiles", "Profiles"),
            custom: BTreeMap::new(),
        }
    }
}

impl Sections {
    /// First shown profile on `network`, compared ignoring ASCII case.
    pub fn profile_for_network(&self, network: &str) -> Option<&Profile> {
        self.profiles
            .items
            .iter()
            .find(|p| p.visible.is_shown() && p.network.eq_ignore_ascii_case(network))
    }
}
