// Resume document model.
// Mirrors the JSON shape produced by the resume editor: camelCase keys,
// every field optional on the wire.

pub mod basics;
pub mod layout;
pub mod sections;

use serde::{Deserialize, Serialize};

pub use basics::Basics;
pub use layout::{validate_layout, Columns, LayoutReport, Metadata, SectionKey};
pub use sections::Sections;

/// A complete resume document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub basics: Basics,
    pub sections: Sections,
    pub metadata: Metadata,
}

impl ResumeData {
    /// Columns for page `index` of the stored layout, if that page exists.
    pub fn page_columns(&self, index: usize) -> Option<Columns> {
        self.metadata
            .layout
            .get(index)
            .map(|page| Columns::from_page(page))
    }
}
