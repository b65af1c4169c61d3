//! Tag filter engine.
//!
//! A [`FilterState`] maps every known tag to active/inactive. A project is
//! visible when no tag is active, or when it carries *every* active tag.

use std::collections::BTreeMap;

use crate::taxonomy::TagTaxonomy;

/// Active/inactive flag for each known tag.
///
/// The set of keys (the domain) is fixed at construction; tags outside it
/// are never active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    flags: BTreeMap<String, bool>,
}

impl FilterState {
    /// Every tag in the taxonomy, all inactive.
    pub fn from_taxonomy(taxonomy: &TagTaxonomy) -> Self {
        Self::from_tags(taxonomy.all_tags())
    }

    /// The given tags, all inactive.
    pub fn from_tags(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            flags: tags.into_iter().map(|t| (t.into(), false)).collect(),
        }
    }

    /// Whether `tag` is active. Unknown tags are inactive.
    pub fn is_active(&self, tag: &str) -> bool {
        self.flags.get(tag).copied().unwrap_or(false)
    }

    /// Whether `tag` is in the domain.
    pub fn knows(&self, tag: &str) -> bool {
        self.flags.contains_key(tag)
    }

    /// Active tags, sorted.
    pub fn active_tags(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, on)| **on)
            .map(|(tag, _)| tag.as_str())
    }

    /// Whether no tag is active.
    pub fn is_clear(&self) -> bool {
        !self.flags.values().any(|&on| on)
    }

    /// Number of tags in the domain.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// A copy of this state with `tag` flipped.
    ///
    /// Every other flag is unchanged. A tag outside the domain leaves the
    /// state as it is.
    pub fn toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if let Some(flag) = next.flags.get_mut(tag) {
            *flag = !*flag;
        }
        next
    }
}

/// Decide whether a project with `project_tags` is visible under `state`.
///
/// With no active tag everything is visible. Otherwise the project must
/// carry every active tag (match-all, not match-any).
pub fn is_visible(project_tags: &[String], state: &FilterState) -> bool {
    state
        .active_tags()
        .all(|active| project_tags.iter().any(|t| t == active))
}

/// Flip `tag` in `state`, returning the new state.
pub fn toggle(state: &FilterState, tag: &str) -> FilterState {
    state.toggled(tag)
}
