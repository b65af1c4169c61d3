//! A mounted gallery: catalog plus current filter state.

use crate::catalog::{Catalog, ProjectRecord};
use crate::filter::{is_visible, FilterState};

/// Catalog view with a live filter.
///
/// Every call to [`Gallery::visible`] re-evaluates the whole project list.
#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    catalog: &'a Catalog,
    filter: FilterState,
}

impl<'a> Gallery<'a> {
    /// Mount the gallery with every taxonomy tag inactive.
    pub fn mount(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::from_taxonomy(catalog.taxonomy()),
        }
    }

    /// The catalog being filtered.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Current filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Flip `tag`. Returns `false` if the tag is not in the taxonomy.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if !self.filter.knows(tag) {
            log::debug!("Ignoring toggle of unknown tag '{tag}'");
            return false;
        }
        self.filter = self.filter.toggled(tag);
        true
    }

    /// Projects visible under the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&'a ProjectRecord> {
        self.catalog
            .projects
            .iter()
            .filter(|p| is_visible(&p.tags, &self.filter))
            .collect()
    }

    /// Number of projects hidden by the current filter.
    pub fn hidden_count(&self) -> usize {
        self.catalog.projects.len() - self.visible().len()
    }

    /// Active tags in taxonomy order.
    pub fn active_tags(&self) -> Vec<&'a str> {
        self.catalog
            .taxonomy()
            .all_tags()
            .into_iter()
            .filter(|t| self.filter.is_active(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TagGroup;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                TagGroup::new("concepts", ["data science", "AI"]),
                TagGroup::new("languages", ["R", "Python", "Julia"]),
            ],
            vec![
                ProjectRecord::new("Nature Simulation", "https://a", "", ["AI", "Python"]),
                ProjectRecord::new(
                    "Hello Regression",
                    "https://b",
                    "",
                    ["data science", "Python", "R", "Julia"],
                ),
                ProjectRecord::new("Untagged", "https://c", "", Vec::<String>::new()),
            ],
        )
    }

    fn names<'a>(projects: &[&'a ProjectRecord]) -> Vec<&'a str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_mount_shows_everything() {
        let catalog = catalog();
        let gallery = Gallery::mount(&catalog);
        assert!(gallery.filter().is_clear());
        assert_eq!(gallery.visible().len(), 3);
        assert_eq!(gallery.hidden_count(), 0);
    }

    #[test]
    fn test_toggle_narrows_with_match_all() {
        let catalog = catalog();
        let mut gallery = Gallery::mount(&catalog);

        assert!(gallery.toggle("Python"));
        assert_eq!(
            names(&gallery.visible()),
            vec!["Nature Simulation", "Hello Regression"]
        );

        assert!(gallery.toggle("R"));
        assert_eq!(names(&gallery.visible()), vec!["Hello Regression"]);
        assert_eq!(gallery.hidden_count(), 2);
    }

    #[test]
    fn test_toggle_back_restores_view() {
        let catalog = catalog();
        let mut gallery = Gallery::mount(&catalog);
        gallery.toggle("AI");
        gallery.toggle("AI");
        assert_eq!(gallery.visible().len(), 3);
    }

    #[test]
    fn test_toggle_unknown_tag() {
        let catalog = catalog();
        let mut gallery = Gallery::mount(&catalog);
        assert!(!gallery.toggle("Haskell"));
        assert!(gallery.filter().is_clear());
    }

    #[test]
    fn test_active_tags_in_taxonomy_order() {
        let catalog = catalog();
        let mut gallery = Gallery::mount(&catalog);
        gallery.toggle("Python");
        gallery.toggle("data science");
        assert_eq!(gallery.active_tags(), vec!["data science", "Python"]);
    }
}
