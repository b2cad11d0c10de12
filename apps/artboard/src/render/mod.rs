// Template rendering: resume document + column layout → HTML markup.
// Templates are stateless and synchronous; one instance of each lives for the
// whole process and is looked up by name.

pub mod icons;
pub mod latex;
pub mod markup;
pub mod sanitize;

use serde::{Deserialize, Serialize};

use crate::schema::{Columns, ResumeData};

pub use latex::Latex;
pub use markup::render_document;

/// Settings that affect rendering but are not part of the resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderContext {
    /// Base URL the bundled support logos are served from. Empty means same origin.
    pub asset_base_url: String,
}

/// A resume skin. Implement this to add a template without touching the
/// render endpoints.
pub trait Template: Send + Sync {
    fn name(&self) -> &'static str;

    /// Renders the body fragment for one page.
    fn render(&self, resume: &ResumeData, columns: &Columns, ctx: &RenderContext) -> String;
}

static TEMPLATES: &[&dyn Template] = &[&Latex];

/// Looks up a registered template by name (case-insensitive).
pub fn template_by_name(name: &str) -> Option<&'static dyn Template> {
    TEMPLATES
        .iter()
        .copied()
        .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
}

pub fn available_templates() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_registered() {
        assert_eq!(available_templates(), vec!["latex"]);
        assert_eq!(template_by_name("latex").unwrap().name(), "latex");
        assert_eq!(template_by_name(" LaTeX ").unwrap().name(), "latex");
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert!(template_by_name("rhyhorn").is_none());
        assert!(template_by_name("").is_none());
    }
}
