// ABOUTME: Library entry point for the kiosque news-crawl pipeline.
// ABOUTME: Re-exports the public API: Site, Document, PageType, PageRef, ArticleRecord, Error.

//! Kiosque - traversal and extraction pipeline for news-site crawling.
//!
//! This crate walks a news site's archive or tag hierarchy to enumerate
//! article pages and extracts structured records from them. It owns no
//! networking: an external crawl engine fetches the [`PageRef`]s this
//! crate emits and hands back parsed [`Document`]s tagged with the page
//! type they were requested as.
//!
//! # Example
//!
//! ```no_run
//! use kiosque::{Document, Site, Visit};
//! use url::Url;
//!
//! let site = Site::liberation();
//! let seeds = site.seed_requests();
//!
//! // The crawl engine fetches seeds[0].url, then:
//! let html = "<html>…</html>";
//! let doc = Document::parse(html, Url::parse(&seeds[0].url).unwrap());
//! match site.handle(&doc, seeds[0].page_type) {
//!     Visit::Follow(refs) => { /* enqueue refs for fetching */ }
//!     Visit::Record(record) => { /* hand the record to the sink */ }
//! }
//! ```

pub mod dates;
pub mod document;
pub mod error;
pub mod extract;
pub mod page;
pub mod record;
pub mod rules;
pub mod site;
pub mod text;
pub mod traverse;

pub use crate::dates::DateVocabulary;
pub use crate::document::Document;
pub use crate::error::Error;
pub use crate::page::{PageRef, PageType};
pub use crate::record::ArticleRecord;
pub use crate::rules::SiteDef;
pub use crate::site::{builtin_site_defs, Site, Visit};
