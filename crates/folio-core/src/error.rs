//! Error types for Folio operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Folio crates. Uses `thiserror` for derive macros.
//!
//! Build-time failures (unreadable post, malformed header, duplicate slug)
//! carry the offending path so the CLI can report it and exit non-zero.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in Folio operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific path.
    #[error("I/O error on {path}: {source}")]
    IoWithPath {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Parse failure for structured input (TOML, JSON).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A higher-level operation failed.
    #[error("Operation failed: {0}")]
    Operation(String),

    /// A post source file violates the header format.
    #[error("Invalid post {path}: {reason}")]
    InvalidPost {
        /// Source file.
        path: PathBuf,
        /// Which field or line was wrong.
        reason: String,
    },

    /// Two source files map to the same slug.
    #[error("Duplicate slug '{slug}': {first} and {second}")]
    DuplicateSlug {
        /// The colliding slug.
        slug: String,
        /// File that claimed the slug first.
        first: PathBuf,
        /// File that collided with it.
        second: PathBuf,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create an operation error.
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }

    /// Create an invalid post error for `path`.
    pub fn invalid_post(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::InvalidPost {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::IoWithPath { path, .. } | Self::InvalidPost { path, .. } => Some(path),
            Self::DuplicateSlug { second, .. } => Some(second),
            _ => None,
        }
    }

    /// Whether the error is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io(e) | Self::IoWithPath { source: e, .. } => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Result type alias using Folio's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_message() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "/site/posts/a.md",
        );
        let msg = err.to_string();
        assert!(msg.contains("/site/posts/a.md"));
        assert!(msg.contains("denied"));
        assert_eq!(err.path(), Some(Path::new("/site/posts/a.md")));
    }

    #[test]
    fn test_invalid_post_message() {
        let err = Error::invalid_post("posts/short.md", "missing line 4 (tags)");
        assert_eq!(
            err.to_string(),
            "Invalid post posts/short.md: missing line 4 (tags)"
        );
    }

    #[test]
    fn test_duplicate_slug_message() {
        let err = Error::DuplicateSlug {
            slug: "hello".into(),
            first: PathBuf::from("posts/hello.md"),
            second: PathBuf::from("posts/hello.markdown"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'hello'"));
        assert!(msg.contains("posts/hello.md"));
        assert!(msg.contains("posts/hello.markdown"));
        assert_eq!(err.path(), Some(Path::new("posts/hello.markdown")));
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("x").is_not_found());
        let io = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "missing",
        );
        assert!(io.is_not_found());
        assert!(!Error::config("bad").is_not_found());
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(Error::parse("p"), Error::Parse(_)));
        assert!(matches!(Error::serialization("s"), Error::Serialization(_)));
        assert!(matches!(Error::operation("o"), Error::Operation(_)));
        assert!(matches!(Error::invalid_data("d"), Error::InvalidData(_)));
    }
}
