//! Post index construction.
//!
//! [`IndexBuilder`] scans a directory of post sources, validates each
//! header, and collects the results into an ordered [`PostIndex`]
//! (slug → record). Any failure aborts the build; there is no partial
//! index.

use folio_core::util::files::{list_files, read_file, FindOptions};
use folio_core::{Error, Result};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::header::PostHeader;
use crate::post::{Entry, EntryRef, PostRecord};

// ============================================================================
// PostIndex
// ============================================================================

/// Ordered mapping of slug to post record.
///
/// Iteration follows insertion order, which for a built index is the
/// sorted directory listing. Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostIndex {
    records: Vec<PostRecord>,
    positions: HashMap<String, usize>,
}

impl PostIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record.
    ///
    /// Returns `false` and leaves the index unchanged if the slug is
    /// already present.
    pub fn insert(&mut self, record: PostRecord) -> bool {
        if self.positions.contains_key(&record.slug) {
            return false;
        }
        self.positions
            .insert(record.slug.clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// Look up a record by slug.
    pub fn get(&self, slug: &str) -> Option<&PostRecord> {
        self.positions.get(slug).map(|&i| &self.records[i])
    }

    /// Whether the index holds `slug`.
    pub fn contains(&self, slug: &str) -> bool {
        self.positions.contains_key(slug)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PostRecord> {
        self.records.iter()
    }

    /// Slugs in insertion order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.slug.as_str())
    }

    /// Records newest first, the order the post list displays.
    ///
    /// Ties break on slug. Records whose date is not numeric sort last.
    pub fn chronological(&self) -> Vec<&PostRecord> {
        let mut sorted: Vec<&PostRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| {
            b.timestamp_millis()
                .cmp(&a.timestamp_millis())
                .then_with(|| a.slug.cmp(&b.slug))
        });
        sorted
    }
}

impl<'a> IntoIterator for &'a PostIndex {
    type Item = &'a PostRecord;
    type IntoIter = std::slice::Iter<'a, PostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for PostIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.slug, &EntryRef::from(record))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PostIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = PostIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of slug to post metadata")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<PostIndex, A::Error> {
                let mut index = PostIndex::new();
                while let Some((slug, entry)) = access.next_entry::<String, Entry>()? {
                    if entry.date.parse::<i64>().is_err() {
                        return Err(de::Error::custom(format!(
                            "post '{slug}' has non-numeric date '{}'",
                            entry.date
                        )));
                    }
                    let record = PostRecord {
                        slug: slug.clone(),
                        name: entry.name,
                        date: entry.date,
                        tags: entry.tags,
                    };
                    if !index.insert(record) {
                        return Err(de::Error::custom(format!("duplicate slug '{slug}'")));
                    }
                }
                Ok(index)
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}

// ============================================================================
// IndexBuilder
// ============================================================================

/// Statistics from an index build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Source files read.
    pub files_processed: usize,
    /// Slugs that are not URL-safe (indexed anyway).
    pub unsafe_slugs: Vec<String>,
}

/// Builds a [`PostIndex`] from a directory of post sources.
///
/// # Example
///
/// ```no_run
/// # use folio_content::IndexBuilder;
/// # async fn example() -> folio_core::Result<()> {
/// let (index, stats) = IndexBuilder::new("src/posts").build().await?;
/// println!("{} posts from {} files", index.len(), stats.files_processed);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    source_dir: PathBuf,
    options: FindOptions,
}

impl IndexBuilder {
    /// Create a builder for markdown posts in `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            options: FindOptions::markdown(),
        }
    }

    /// Only index files with this extension; empty indexes every file.
    pub fn with_extension(mut self, ext: &str) -> Self {
        self.options = FindOptions::with_extension(ext);
        self
    }

    /// Directory being indexed.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Scan the directory and build the index.
    ///
    /// Files are processed one at a time in file-name order.
    ///
    /// # Errors
    ///
    /// - the directory or a file cannot be read
    /// - a header is malformed ([`Error::InvalidPost`])
    /// - two files share a slug ([`Error::DuplicateSlug`])
    pub async fn build(&self) -> Result<(PostIndex, BuildStats)> {
        log::info!("Indexing posts in {}", self.source_dir.display());

        let files = list_files(&self.source_dir, self.options.clone()).await?;
        let mut index = PostIndex::new();
        let mut stats = BuildStats::default();
        let mut sources: HashMap<String, PathBuf> = HashMap::new();

        for file in files {
            if let Some(first) = sources.get(&file.stem) {
                return Err(Error::DuplicateSlug {
                    slug: file.stem,
                    first: first.clone(),
                    second: file.path,
                });
            }

            let text = read_file(&file.path).await?;
            let header =
                PostHeader::parse(&text).map_err(|e| Error::invalid_post(&file.path, e))?;
            stats.files_processed += 1;

            if header.name.is_empty() {
                log::warn!("Post {} has an empty name", file.path.display());
            }

            let record = PostRecord::from_header(file.stem.clone(), header);
            if !record.has_url_safe_slug() {
                log::warn!(
                    "Slug '{}' ({}) is not URL-safe",
                    record.slug,
                    file.path.display()
                );
                stats.unsafe_slugs.push(record.slug.clone());
            }

            log::debug!(
                "Indexed '{}' ({} tag(s)) from {}",
                record.slug,
                record.tags.len(),
                file.path.display()
            );
            index.insert(record);
            sources.insert(file.stem, file.path);
        }

        log::info!("Indexed {} post(s)", index.len());
        Ok((index, stats))
    }
}

/// Build the post index for markdown files in `source_dir`.
pub async fn build_index(source_dir: impl AsRef<Path>) -> Result<PostIndex> {
    let (index, _) = IndexBuilder::new(source_dir.as_ref()).build().await?;
    Ok(index)
}

// ============================================================================
// Tests
// ============================================================================
