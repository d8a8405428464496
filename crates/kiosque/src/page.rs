// ABOUTME: Page classification types shared between traversal and the crawl engine.
// ABOUTME: Defines PageType (role of a page in a site's hierarchy) and PageRef (a fetch request).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role of a page in a site's navigation hierarchy.
///
/// A page's type is fixed at link-emission time, when its URL is discovered
/// on a parent page; the engine echoes it back with the fetched document.
/// It is never re-derived from page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    /// A site's seed page (front page).
    Root,
    /// One year of an archive tree.
    ArchiveYear,
    /// One month within an archive year.
    ArchiveMonth,
    /// One day within an archive month.
    ArchiveDay,
    /// A paginated category/tag page listing articles.
    TagListing,
    /// A terminal article page; extraction applies, no further links.
    Article,
}

impl PageType {
    /// Returns true for the terminal page type that yields a record.
    pub fn is_article(self) -> bool {
        self == PageType::Article
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PageType::Root => "root",
            PageType::ArchiveYear => "archive-year",
            PageType::ArchiveMonth => "archive-month",
            PageType::ArchiveDay => "archive-day",
            PageType::TagListing => "tag-listing",
            PageType::Article => "article",
        };
        write!(f, "{}", s)
    }
}

/// A fetch request handed to the crawl engine: a URL plus the type the
/// resulting document should be processed as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRef {
    pub url: String,
    pub page_type: PageType,
}

impl PageRef {
    pub fn new(url: impl Into<String>, page_type: PageType) -> Self {
        Self {
            url: url.into(),
            page_type,
        }
    }
}
