//! Generated index artifact: rendering, writing, loading, freshness.
//!
//! The artifact is the single file the site's list view reads. Two
//! formats are supported:
//!
//! - JSON: the index as a pretty-printed object
//! - ES module: the same object bound to `posts` and exported, for sites
//!   that import their data as a JavaScript module

use folio_core::util::files::write_atomic;
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::index::PostIndex;

const MODULE_PREFIX: &str = "const posts = ";
const MODULE_EXPORT: &str = "export { posts }";

/// Output format of the generated artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Plain JSON object.
    #[default]
    Json,
    /// `const posts = {...};` followed by `export { posts }`.
    #[serde(rename = "js")]
    EsModule,
}

impl ArtifactFormat {
    /// Guess the format from a file extension (`.js`/`.mjs` or `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js") | Some("mjs") => Some(Self::EsModule),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }

    /// Short name used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::EsModule => "js",
        }
    }
}

impl FromStr for ArtifactFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "js" | "mjs" | "esm" | "module" => Ok(Self::EsModule),
            other => Err(Error::config(format!(
                "Unknown artifact format '{other}' (expected json or js)"
            ))),
        }
    }
}

impl std::fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render an index in the given format.
///
/// Output is deterministic: the same index always renders to the same
/// bytes, and ends with a newline.
pub fn render(index: &PostIndex, format: ArtifactFormat) -> Result<String> {
    let json = serde_json::to_string_pretty(index)
        .map_err(|e| Error::serialization(format!("Failed to serialize post index: {e}")))?;

    Ok(match format {
        ArtifactFormat::Json => format!("{json}\n"),
        ArtifactFormat::EsModule => format!("{MODULE_PREFIX}{json};\n\n{MODULE_EXPORT}\n"),
    })
}

/// Parse rendered artifact text back into an index.
pub fn parse(text: &str, format: ArtifactFormat) -> Result<PostIndex> {
    let json = match format {
        ArtifactFormat::Json => text,
        ArtifactFormat::EsModule => text
            .strip_prefix(MODULE_PREFIX)
            .and_then(|rest| rest.trim_end().strip_suffix(MODULE_EXPORT))
            .and_then(|rest| rest.trim_end().strip_suffix(';'))
            .ok_or_else(|| Error::parse("Not a generated posts module"))?,
    };

    serde_json::from_str(json).map_err(|e| Error::parse(format!("Failed to parse post index: {e}")))
}

/// Write rendered artifact text to `path`, replacing any previous file.
///
/// The write is atomic: on failure the previous artifact is untouched.
pub fn write_artifact(path: &Path, rendered: &str) -> Result<()> {
    write_atomic(path, rendered.as_bytes())?;
    log::info!("Wrote post index to {}", path.display());
    Ok(())
}

/// Load an artifact from disk.
pub fn load_index(path: &Path, format: ArtifactFormat) -> Result<PostIndex> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    parse(&text, format)
}

/// Whether the artifact at `path` already holds exactly `rendered`.
///
/// A missing artifact is stale, not an error.
pub fn is_fresh(path: &Path, rendered: &str) -> Result<bool> {
    match std::fs::read_to_string(path) {
        Ok(existing) => Ok(existing == rendered),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io_with_path(e, path)),
    }
}
