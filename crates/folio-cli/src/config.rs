//! Configuration for the Folio CLI.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! `FOLIO_POSTS_*` and `FOLIO_GALLERY_*` environment variables override
//! values from the file.

use confyg::{env, Confygery};
use folio_core::traits::{ConfigProvider, CATALOG, POSTS};
use folio_core::util::paths::{expand_tilde, resolve_against};
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "FOLIO";
const CONFIG_ENV: &str = "FOLIO_CONFIG";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Folio CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Project name, shown in CLI output.
    pub project_name: String,

    /// Site root; relative paths below resolve against it.
    pub base_path: Option<String>,

    /// Post index configuration.
    pub posts: PostsConfig,

    /// Project gallery configuration.
    pub gallery: GalleryConfig,
}

/// Post index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Directory of post sources.
    pub source_dir: String,

    /// Generated artifact path.
    pub output_path: String,

    /// Only files with this extension are posts; empty means every file.
    pub extension: String,

    /// Artifact format (`json` or `js`). Inferred from `output_path` when unset.
    pub format: Option<String>,
}

/// Project gallery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Project catalog (TOML).
    pub catalog_path: String,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            project_name: "folio".to_string(),
            base_path: None,
            posts: PostsConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            source_dir: "src/posts".to_string(),
            output_path: "src/data/posts.js".to_string(),
            extension: "md".to_string(),
            format: None,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_path: "src/data/catalog.toml".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("posts");
        env_opts.add_section("gallery");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(expand_tilde(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(expand_tilde(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Environment variables that reproduce this config through the
    /// `FOLIO_*` overlay. Unset optional fields are left out.
    pub fn to_env_vars(&self) -> Vec<(String, String)> {
        let fields = [
            ("PROJECT_NAME", Some(&self.project_name)),
            ("BASE_PATH", self.base_path.as_ref()),
            ("POSTS_SOURCE_DIR", Some(&self.posts.source_dir)),
            ("POSTS_OUTPUT_PATH", Some(&self.posts.output_path)),
            ("POSTS_EXTENSION", Some(&self.posts.extension)),
            ("POSTS_FORMAT", self.posts.format.as_ref()),
            ("GALLERY_CATALOG_PATH", Some(&self.gallery.catalog_path)),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| Some((format!("{ENV_PREFIX}_{key}"), value?.clone())))
            .collect()
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        Ok(resolve_against(&self.base_path()?, path))
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for FolioConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_path(&self, content_type: &str) -> Result<PathBuf> {
        match content_type {
            POSTS => self.resolve(&self.posts.source_dir),
            CATALOG => self.resolve(&self.gallery.catalog_path),
            other => Err(Error::config(format!("Unknown content type: {other}"))),
        }
    }

    fn artifact_path(&self) -> Result<PathBuf> {
        self.resolve(&self.posts.output_path)
    }

    fn post_extension(&self) -> &str {
        &self.posts.extension
    }

    fn artifact_format(&self) -> Option<&str> {
        self.posts
            .format
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================
