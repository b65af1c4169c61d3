//! Tag taxonomy: named groups of tags, used to lay out filter controls.
//!
//! Group membership is presentation only. Matching in
//! [`crate::filter::is_visible`] never looks at groups.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered group of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    /// Group heading, e.g. "languages".
    pub name: String,
    /// Tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TagGroup {
    /// Create a group.
    pub fn new(name: impl Into<String>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered mapping of group name to tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagTaxonomy {
    groups: Vec<TagGroup>,
}

impl TagTaxonomy {
    /// Create a taxonomy from groups in display order.
    pub fn new(groups: Vec<TagGroup>) -> Self {
        Self { groups }
    }

    /// Groups in display order.
    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }

    /// Every known tag, in group order then tag order, each listed once.
    pub fn all_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.groups
            .iter()
            .flat_map(|g| g.tags.iter())
            .map(String::as_str)
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Whether any group lists `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.groups.iter().any(|g| g.tags.iter().any(|t| t == tag))
    }

    /// Names of every group listing `tag`.
    pub fn groups_of(&self, tag: &str) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|g| g.tags.iter().any(|t| t == tag))
            .map(|g| g.name.as_str())
            .collect()
    }

    /// Whether the taxonomy has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
