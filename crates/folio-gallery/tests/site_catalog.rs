//! The demo site's catalog: validation and filtering on real data.

use folio_gallery::{validate_catalog, Catalog, Gallery};

const SITE_CATALOG: &str = include_str!("../../../site/src/data/catalog.toml");

fn catalog() -> Catalog {
    Catalog::from_toml_str(SITE_CATALOG).unwrap()
}

fn visible_names(gallery: &Gallery<'_>) -> Vec<String> {
    gallery.visible().iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_site_catalog_is_valid() {
    let catalog = catalog();
    assert_eq!(catalog.projects.len(), 18);
    assert_eq!(catalog.taxonomy().all_tags().len(), 25);

    let result = validate_catalog(&catalog);
    assert!(result.valid, "unexpected errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_match_all_narrows() {
    let catalog = catalog();
    let mut gallery = Gallery::mount(&catalog);
    assert_eq!(gallery.visible().len(), 18);

    gallery.toggle("Python");
    let python = gallery.visible().len();
    assert!(python > 1);

    gallery.toggle("R");
    assert_eq!(visible_names(&gallery), vec!["Hello Regression"]);

    gallery.toggle("Python");
    gallery.toggle("R");
    assert_eq!(gallery.visible().len(), 18);
}

#[test]
fn test_web_projects_with_react() {
    let catalog = catalog();
    let mut gallery = Gallery::mount(&catalog);
    gallery.toggle("React");
    gallery.toggle("web dev");

    assert_eq!(gallery.active_tags(), vec!["web dev", "React"]);
    assert_eq!(
        visible_names(&gallery),
        vec!["Cookbook", "Number Base Explorer", "Portfolio Explorer"]
    );
}

#[test]
fn test_disjoint_tags_show_nothing() {
    let catalog = catalog();
    let mut gallery = Gallery::mount(&catalog);
    gallery.toggle("game dev");
    gallery.toggle("Scala");
    assert!(gallery.visible().is_empty());
    assert_eq!(gallery.hidden_count(), 18);
}
