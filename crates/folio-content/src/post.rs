//! Post records as stored in the generated index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::header::PostHeader;

/// One entry of the post index.
///
/// `date` holds epoch milliseconds as a decimal string; the site's list
/// view coerces it back to a number when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Filename without extension; unique within an index.
    pub slug: String,
    /// Display title.
    pub name: String,
    /// Epoch milliseconds, as a string.
    pub date: String,
    /// Tags in source order.
    pub tags: Vec<String>,
}

impl PostRecord {
    /// Build a record from a validated header.
    pub fn from_header(slug: impl Into<String>, header: PostHeader) -> Self {
        Self {
            slug: slug.into(),
            date: header.timestamp_millis().to_string(),
            name: header.name,
            tags: header.tags,
        }
    }

    /// The date as epoch milliseconds, if the string is numeric.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.date.parse().ok()
    }

    /// The date as a UTC instant.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.timestamp_millis()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Whether the slug only uses URL-safe characters (`A-Z a-z 0-9 - _`).
    pub fn has_url_safe_slug(&self) -> bool {
        is_url_safe(&self.slug)
    }
}

/// Whether `slug` is non-empty and made of `A-Z a-z 0-9 - _` only.
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Serialized shape of a record's value (the slug is the map key).
#[derive(Serialize)]
pub(crate) struct EntryRef<'a> {
    pub name: &'a str,
    pub date: &'a str,
    pub tags: &'a [String],
}

impl<'a> From<&'a PostRecord> for EntryRef<'a> {
    fn from(record: &'a PostRecord) -> Self {
        Self {
            name: &record.name,
            date: &record.date,
            tags: &record.tags,
        }
    }
}

/// Owned counterpart of [`EntryRef`] used when loading an artifact.
#[derive(Deserialize)]
pub(crate) struct Entry {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
