//! Post header schema.
//!
//! Every post source starts with a fixed four-line header:
//!
//! ```text
//! #                          <- line 1: reserved (heading marker), ignored
//! Building a Kana Quiz       <- line 2: name
//! 2021-06-15                 <- line 3: date
//! Python, scikit-learn, Web  <- line 4: comma-separated tags
//! ```
//!
//! [`PostHeader::parse`] validates the header field by field and reports
//! which field is missing or malformed instead of indexing blindly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// A header field and the zero-based line it lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// Display title.
    Name,
    /// Publication date.
    Date,
    /// Comma-separated tags.
    Tags,
}

impl HeaderField {
    /// Zero-based line index of this field.
    pub fn line_index(self) -> usize {
        match self {
            Self::Name => 1,
            Self::Date => 2,
            Self::Tags => 3,
        }
    }

    /// Field name as used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Tags => "tags",
        }
    }

    const ALL: [HeaderField; 3] = [Self::Name, Self::Date, Self::Tags];
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The file ends before the given field.
    #[error("missing line {line} ({field}); a post header needs 4 lines")]
    MissingLine {
        /// Field that was expected.
        field: HeaderField,
        /// One-based line number.
        line: usize,
    },

    /// The date line is not a recognised date.
    #[error("line 3 (date) is not a valid date: '{value}'")]
    InvalidDate {
        /// The offending text, trimmed.
        value: String,
    },
}

/// A validated post header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostHeader {
    /// Display title.
    pub name: String,
    /// Publication instant, UTC.
    pub date: DateTime<Utc>,
    /// Tags in source order, duplicates kept.
    pub tags: Vec<String>,
}

impl PostHeader {
    /// Parse the header from the full text of a post.
    pub fn parse(text: &str) -> Result<Self, HeaderError> {
        let lines: Vec<&str> = text.split('\n').collect();

        if let Some(field) = HeaderField::ALL
            .into_iter()
            .find(|f| f.line_index() >= lines.len())
        {
            return Err(HeaderError::MissingLine {
                field,
                line: field.line_index() + 1,
            });
        }

        let name = lines[HeaderField::Name.line_index()].trim();
        let date = parse_date(lines[HeaderField::Date.line_index()])?;
        let tags = parse_tags(lines[HeaderField::Tags.line_index()]);

        Ok(Self {
            name: name.to_string(),
            date,
            tags,
        })
    }

    /// Publication date as milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.date.timestamp_millis()
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse a header date line.
///
/// Dates without an offset are taken as UTC, so the result never depends
/// on the host's locale or timezone.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, HeaderError> {
    let value = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc());
            }
        }
    }

    Err(HeaderError::InvalidDate {
        value: value.to_string(),
    })
}

/// Split a tags line on commas and trim each tag.
///
/// Every segment is kept, so a blank line or a trailing comma yields an
/// empty tag.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_string()).collect()
}
