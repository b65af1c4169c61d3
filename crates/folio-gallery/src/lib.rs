//! Project catalog and tag filter engine.
//!
//! # Modules
//!
//! - [`taxonomy`]: tag groups for laying out filter controls
//! - [`catalog`]: project records and TOML loading
//! - [`filter`]: [`FilterState`], [`is_visible`], [`toggle`]
//! - [`gallery`]: a mounted catalog with a live filter
//! - [`validation`]: catalog integrity checks

#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod filter;
pub mod gallery;
pub mod taxonomy;
pub mod validation;

pub use catalog::{Catalog, ProjectRecord};
pub use filter::{is_visible, toggle, FilterState};
pub use gallery::Gallery;
pub use taxonomy::{TagGroup, TagTaxonomy};
pub use validation::{validate_catalog, ValidationIssue, ValidationResult};
