//! Post header parsing and the generated post index.
//!
//! This crate turns a directory of markdown posts into the single data
//! artifact the site's post list reads.
//!
//! # Modules
//!
//! - [`header`]: the four-line post header schema and its validation
//! - [`post`]: post records as stored in the index
//! - [`index`]: [`IndexBuilder`] and the ordered [`PostIndex`]
//! - [`artifact`]: rendering, atomic writing, loading, freshness checks

#![doc = include_str!("../README.md")]

pub mod artifact;
pub mod header;
pub mod index;
pub mod post;

pub use artifact::{is_fresh, load_index, render, write_artifact, ArtifactFormat};
pub use header::{HeaderError, HeaderField, PostHeader};
pub use index::{build_index, BuildStats, IndexBuilder, PostIndex};
pub use post::PostRecord;
