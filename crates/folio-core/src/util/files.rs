//! File utilities for the Folio crates.
//!
//! Provides the directory listing, reading, and atomic writing used by the
//! index builder and the CLI.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;

use crate::{Error, Result};

/// Options for listing files in a directory.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g., "md". `None` matches all.
    pub extension: Option<String>,
}

impl FindOptions {
    /// Create options for listing markdown files.
    pub fn markdown() -> Self {
        Self::with_extension("md")
    }

    /// Create options matching a single extension.
    ///
    /// A leading dot is ignored; an empty extension matches every file.
    pub fn with_extension(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.');
        Self {
            extension: (!ext.is_empty()).then(|| ext.to_string()),
        }
    }

    fn matches(&self, path: &Path) -> bool {
        match &self.extension {
            Some(ext) => path.extension().and_then(|e| e.to_str()) == Some(ext.as_str()),
            None => true,
        }
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File stem (filename without extension).
    pub stem: String,
    /// Filename including extension.
    pub file_name: String,
}

/// List the regular files directly inside `base_path`.
///
/// Not recursive. Directories and dot-files are skipped. The result is
/// sorted by file name so callers see the same order on every filesystem.
///
/// # Errors
///
/// Fails with [`Error::InvalidPost`] when a matching file name is not
/// valid UTF-8, since it cannot become a slug.
///
/// # Example
///
/// ```no_run
/// # use folio_core::util::files::{list_files, FindOptions};
/// # use std::path::Path;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let posts = list_files(Path::new("src/posts"), FindOptions::markdown()).await?;
/// for post in &posts {
///     println!("{}", post.stem);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn list_files(base_path: &Path, options: FindOptions) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(base_path)
        .await
        .map_err(|e| Error::io_with_path(e, base_path))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, base_path))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        if file_type.is_dir() {
            continue;
        }

        let hidden = entry.file_name().as_encoded_bytes().starts_with(b".");
        if hidden || !options.matches(&path) {
            log::debug!("Skipping {}", path.display());
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(Error::invalid_post(&path, "file name is not valid UTF-8"));
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name)
            .to_string();

        files.push(FileInfo {
            file_name: file_name.to_string(),
            path,
            stem,
        });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Write `contents` to `path` atomically.
///
/// The data goes to a temporary file in the destination directory which is
/// then renamed over `path`, so readers never observe a half-written file
/// and a failed write leaves the previous file in place. Missing parent
/// directories are created.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| Error::io_with_path(e, &parent))?;

    let mut temp = NamedTempFile::new_in(&parent).map_err(|e| Error::io_with_path(e, &parent))?;
    temp.write_all(contents)
        .map_err(|e| Error::io_with_path(e, temp.path()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io_with_path(e, temp.path()))?;
    temp.persist(path)
        .map_err(|e| Error::io_with_path(e.error, path))?;
    Ok(())
}
