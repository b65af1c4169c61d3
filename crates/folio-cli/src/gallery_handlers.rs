//! Handler functions for gallery CLI commands.

use folio_core::traits::{ConfigProvider, CATALOG};
use folio_core::util::paths::expand_tilde;
use folio_core::{Error, Result};
use folio_gallery::{validate_catalog, Catalog, Gallery};
use std::path::PathBuf;

fn catalog_path<C: ConfigProvider>(config: &C, explicit: Option<&str>) -> Result<PathBuf> {
    match explicit {
        Some(p) => Ok(expand_tilde(p)),
        None => config.content_path(CATALOG),
    }
}

fn load_catalog<C: ConfigProvider>(config: &C, explicit: Option<&str>) -> Result<Catalog> {
    let path = catalog_path(config, explicit)?;
    if !path.exists() {
        return Err(Error::not_found(format!(
            "No project catalog at {}",
            path.display()
        )));
    }
    Catalog::load(&path)
}

/// Mount the gallery, toggle each tag in order, and print visible projects.
///
/// Tags outside the taxonomy are reported and ignored.
pub async fn handle_filter<C: ConfigProvider>(
    config: &C,
    catalog: Option<&str>,
    tags: &[String],
) -> Result<()> {
    let catalog = load_catalog(config, catalog)?;
    let mut gallery = Gallery::mount(&catalog);

    for tag in tags {
        if !gallery.toggle(tag) {
            eprintln!("Unknown tag '{tag}' (not in any group); ignored");
        }
    }

    let active = gallery.active_tags();
    if active.is_empty() {
        println!("All projects:");
    } else {
        println!("Projects tagged with all of: {}", active.join(", "));
    }

    let visible = gallery.visible();
    for project in &visible {
        println!("  {} <{}>", project.name, project.url);
        if !project.blurb.is_empty() {
            println!("      {}", project.blurb);
        }
        if !project.tags.is_empty() {
            println!("      [{}]", project.tags.join(", "));
        }
    }
    if visible.is_empty() {
        println!("  (no matching projects)");
    }

    println!(
        "\n{} of {} project(s) shown",
        visible.len(),
        catalog.projects.len()
    );
    Ok(())
}

/// Show the tag taxonomy with per-tag project counts.
pub async fn handle_tags<C: ConfigProvider>(config: &C, catalog: Option<&str>) -> Result<()> {
    let catalog = load_catalog(config, catalog)?;
    let counts = catalog.tag_counts();

    println!("Tag Taxonomy");
    println!("============");
    for group in catalog.taxonomy().groups() {
        println!("{}:", group.name);
        for tag in &group.tags {
            let count = counts.get(tag.as_str()).copied().unwrap_or(0);
            println!("  {tag}: {count}");
        }
    }

    Ok(())
}

/// Validate the project catalog.
pub async fn handle_validate<C: ConfigProvider>(config: &C, catalog: Option<&str>) -> Result<()> {
    let catalog = load_catalog(config, catalog)?;
    let result = validate_catalog(&catalog);

    if result.valid {
        println!("Catalog is valid.");
    } else {
        println!("Catalog has validation issues:");
    }

    for error in &result.errors {
        println!("  ERROR [{}]: {}", error.code, error.message);
        for project in &error.projects {
            println!("    - {project}");
        }
    }

    for warning in &result.warnings {
        println!("  WARN  [{}]: {}", warning.code, warning.message);
        for project in &warning.projects {
            println!("    - {project}");
        }
    }

    println!(
        "\nSummary: {} error(s), {} warning(s)",
        result.errors.len(),
        result.warnings.len()
    );

    if result.valid {
        Ok(())
    } else {
        Err(Error::operation(format!(
            "Catalog validation failed with {} error(s)",
            result.errors.len()
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Clone)]
    struct TestConfig {
        base: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            "test"
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(self.base.clone())
        }

        fn content_path(&self, content_type: &str) -> Result<PathBuf> {
            Ok(self.base.join(format!("{content_type}.toml")))
        }

        fn artifact_path(&self) -> Result<PathBuf> {
            Ok(self.base.join("posts.json"))
        }
    }

    const CATALOG_TOML: &str = r#"
        [[groups]]
        name = "languages"
        tags = ["Python", "R"]

        [[projects]]
        name = "Hello Regression"
        url = "https://github.com/example/hello-regression"
        tags = ["Python", "R"]
    "#;

    fn setup(catalog: &str) -> (TempDir, TestConfig) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("catalog.toml"), catalog).unwrap();
        let config = TestConfig {
            base: dir.path().to_path_buf(),
        };
        (dir, config)
    }

    #[tokio::test]
    async fn test_handle_filter() {
        let (_dir, config) = setup(CATALOG_TOML);
        let tags = vec!["Python".to_string(), "Haskell".to_string()];
        assert!(handle_filter(&config, None, &tags).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_filter_missing_catalog() {
        let (_dir, config) = setup(CATALOG_TOML);
        let err = handle_filter(&config, Some("/nonexistent/catalog.toml"), &[])
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_handle_tags() {
        let (_dir, config) = setup(CATALOG_TOML);
        assert!(handle_tags(&config, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_validate_ok() {
        let (_dir, config) = setup(CATALOG_TOML);
        assert!(handle_validate(&config, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_validate_errors() {
        let (_dir, config) = setup(&format!(
            "{CATALOG_TOML}\n[[projects]]\nname = \"Stray\"\nurl = \"https://x\"\ntags = [\"Julia\"]\n"
        ));
        let err = handle_validate(&config, None).await.unwrap_err();
        assert!(err.to_string().contains("1 error(s)"));
    }
}
