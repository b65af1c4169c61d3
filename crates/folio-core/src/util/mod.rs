//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Directory listing, reading, and atomic writes
//! - [`paths`]: Path resolution helpers (tilde expansion, base-relative paths)

pub mod files;
pub mod paths;
