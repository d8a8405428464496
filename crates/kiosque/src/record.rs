// ABOUTME: ArticleRecord struct holding the structured fields extracted from one article page.
// ABOUTME: Every field except the URL is best-effort and may be absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The structured output produced for one article page.
///
/// `url` is always present. Every other field is best-effort: when the
/// source page omits or malforms a field, the record carries `None` (or an
/// empty tag list) instead of failing. Records are emitted once and never
/// mutated afterwards; persistence belongs to the external sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub content: Option<String>,
    pub url: String,
}

impl ArticleRecord {
    /// Creates an empty record for a URL, all extracted fields absent.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            tags: Vec::new(),
            description: None,
            date: None,
            content: None,
            url: url.into(),
        }
    }
}
