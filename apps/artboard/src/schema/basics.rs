use serde::{Deserialize, Serialize};

/// A link with an optional display label. Both halves may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Url {
    pub label: String,
    pub href: String,
}

impl Url {
    pub fn new(href: impl Into<String>) -> Self {
        Url {
            label: String::new(),
            href: href.into(),
        }
    }

    /// Text shown for the link: the label, or the href when no label is set.
    pub fn display(&self) -> &str {
        if self.label.is_empty() {
            &self.href
        } else {
            &self.label
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub value: String,
}

/// Contact block shown in the resume header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Basics {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: Url,
    pub custom_fields: Vec<CustomField>,
}
