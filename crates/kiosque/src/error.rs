// ABOUTME: Error types for site configuration and date normalization.
// ABOUTME: Provides the Error enum with Config, DateFormat, and DateRange variants.

use thiserror::Error;

/// Errors raised by the crawl pipeline.
///
/// Selector misses are deliberately *not* errors: a query that finds nothing
/// yields `None` (or an empty list) at the call site. The only fatal variant
/// is `Config`, raised at adapter construction before any crawling begins.
#[derive(Debug, Error)]
pub enum Error {
    /// A site definition is unusable: malformed selector, bad month
    /// vocabulary, or undecodable definition data.
    #[error("invalid site configuration: {0}")]
    Config(String),

    /// A date fragment did not follow the expected token layout, or its
    /// month token is not in the site's vocabulary.
    #[error("unrecognized date token: {0:?}")]
    DateFormat(String),

    /// The (year, month, day) triple does not name a real calendar date.
    #[error("date out of range: {year}-{month:02}-{day:02}")]
    DateRange { year: i32, month: u32, day: u32 },
}

impl Error {
    /// Creates a Config error with a custom message.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Returns true if this is a date parsing failure (format or range).
    pub fn is_date(&self) -> bool {
        matches!(self, Error::DateFormat(_) | Error::DateRange { .. })
    }
}
