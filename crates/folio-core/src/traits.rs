//! Core traits for Folio site abstraction.
//!
//! The primary trait is [`ConfigProvider`], which tells the index builder
//! and the gallery where a site keeps its posts, its project catalog, and
//! its generated data artifact.

use std::path::PathBuf;

use crate::Result;

/// Content type key for the directory of post sources.
pub const POSTS: &str = "posts";

/// Content type key for the project catalog file.
pub const CATALOG: &str = "catalog";

/// Trait for site-specific configuration.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::traits::ConfigProvider;
/// use folio_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "my-site"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_path(&self, content_type: &str) -> Result<PathBuf> {
///         Ok(self.root.join(content_type))
///     }
///
///     fn artifact_path(&self) -> Result<PathBuf> {
///         Ok(self.root.join("src/data/posts.json"))
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used in CLI output and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all site data.
    ///
    /// Relative content paths are resolved against this directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content type.
    ///
    /// `content_type` is one of [`POSTS`] (a directory of post sources) or
    /// [`CATALOG`] (the project catalog file). Implementations may accept
    /// other keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the content type is unknown or the path
    /// cannot be resolved.
    fn content_path(&self, content_type: &str) -> Result<PathBuf>;

    /// Path of the generated post index artifact.
    fn artifact_path(&self) -> Result<PathBuf>;

    /// Extension of post source files; empty means every file is a post.
    fn post_extension(&self) -> &str {
        "md"
    }

    /// Configured artifact format name (`json` or `js`), if any.
    ///
    /// When `None`, the format follows the artifact path's extension.
    fn artifact_format(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig {
        name: String,
        base: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            &self.name
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(self.base.clone())
        }

        fn content_path(&self, content_type: &str) -> Result<PathBuf> {
            match content_type {
                POSTS => Ok(self.base.join("src/posts")),
                CATALOG => Ok(self.base.join("catalog.toml")),
                other => Err(crate::Error::config(format!(
                    "Unknown content type: {other}"
                ))),
            }
        }

        fn artifact_path(&self) -> Result<PathBuf> {
            Ok(self.base.join("src/data/posts.json"))
        }
    }

    fn config() -> TestConfig {
        TestConfig {
            name: "test-site".into(),
            base: PathBuf::from("/site"),
        }
    }

    #[test]
    fn test_config_provider_paths() {
        let config = config();
        assert_eq!(config.project_name(), "test-site");
        assert_eq!(
            config.content_path(POSTS).unwrap(),
            PathBuf::from("/site/src/posts")
        );
        assert_eq!(
            config.content_path(CATALOG).unwrap(),
            PathBuf::from("/site/catalog.toml")
        );
        assert_eq!(
            config.artifact_path().unwrap(),
            PathBuf::from("/site/src/data/posts.json")
        );
    }

    #[test]
    fn test_config_provider_defaults() {
        let config = config();
        assert_eq!(config.post_extension(), "md");
        assert!(config.artifact_format().is_none());
    }

    #[test]
    fn test_config_provider_unknown_content_type() {
        let err = config().content_path("videos").unwrap_err();
        assert!(err.to_string().contains("videos"));
    }

    #[test]
    fn test_config_provider_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestConfig>();
    }
}
