//! Project catalog: the hand-authored project list and its tag taxonomy.
//!
//! The catalog is configuration, not code. It is loaded from TOML:
//!
//! ```toml
//! [[groups]]
//! name = "languages"
//! tags = ["Python", "R"]
//!
//! [[projects]]
//! name = "Hello Regression"
//! url = "https://github.com/example/hello-regression"
//! blurb = "Linear regression in several languages"
//! tags = ["Python", "R"]
//! ```

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::taxonomy::{TagGroup, TagTaxonomy};

/// A project shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Display name.
    pub name: String,
    /// Link to the project.
    pub url: String,
    /// One-paragraph description.
    #[serde(default)]
    pub blurb: String,
    /// Tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectRecord {
    /// Create a project record.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        blurb: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            blurb: blurb.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the project carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Immutable gallery data: taxonomy plus projects, both in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Tag groups for the filter controls.
    #[serde(default)]
    pub groups: TagTaxonomy,
    /// Projects in display order.
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Create a catalog.
    pub fn new(groups: Vec<TagGroup>, projects: Vec<ProjectRecord>) -> Self {
        Self {
            groups: TagTaxonomy::new(groups),
            projects,
        }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::parse(format!("Invalid catalog: {e}")))
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let catalog = Self::from_toml_str(&text)
            .map_err(|e| Error::parse(format!("{}: {e}", path.display())))?;
        log::debug!(
            "Loaded catalog {} ({} group(s), {} project(s))",
            path.display(),
            catalog.groups.groups().len(),
            catalog.projects.len()
        );
        Ok(catalog)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// The tag taxonomy.
    pub fn taxonomy(&self) -> &TagTaxonomy {
        &self.groups
    }

    /// Number of projects carrying each tag (tags on no project are absent).
    pub fn tag_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for project in &self.projects {
            for tag in &project.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }
}
