// ABOUTME: Site adapter binding rules, vocabulary, and seeds into one unit.
// ABOUTME: Loads builtin site definitions from embedded JSON; adding a site is a data change.

//! Site adapters.
//!
//! A [`Site`] binds a compiled rule set, a month vocabulary, and seed URLs
//! into the uniform contract the crawl engine drives: seed requests out,
//! documents in, child requests or records back. The two builtin sites are
//! defined in `data/sites.json`, embedded at compile time; everything
//! site-specific lives in that data, so supporting another site means
//! adding an entry, not code.
//!
//! All methods take `&self` and the compiled rules are immutable, so one
//! `Site` can serve any number of in-flight documents concurrently.

use once_cell::sync::Lazy;
use url::Url;

use crate::dates::DateVocabulary;
use crate::document::Document;
use crate::error::Error;
use crate::extract;
use crate::page::{PageRef, PageType};
use crate::record::ArticleRecord;
use crate::rules::{ArticleRules, SiteDef, TraversalRules};
use crate::traverse;

/// Embedded JSON with the builtin site definitions.
const BUILTIN_SITES_JSON: &str = include_str!("../data/sites.json");

static BUILTIN_SITES: Lazy<Vec<SiteDef>> = Lazy::new(|| {
    serde_json::from_str(BUILTIN_SITES_JSON).expect("failed to parse builtin site definitions")
});

/// Returns the builtin site definitions.
pub fn builtin_site_defs() -> &'static [SiteDef] {
    &BUILTIN_SITES
}

/// What processing one document produced: either more pages to fetch, or a
/// finished record for the sink.
#[derive(Debug)]
pub enum Visit {
    Follow(Vec<PageRef>),
    Record(ArticleRecord),
}

/// One configured site: compiled rules plus vocabulary plus seeds.
#[derive(Debug, Clone)]
pub struct Site {
    name: String,
    seeds: Vec<Url>,
    traversal: TraversalRules,
    article: ArticleRules,
    vocab: DateVocabulary,
}

impl Site {
    /// Builds an adapter from a definition, validating everything up front:
    /// seed URLs, every CSS selector, and the month vocabulary. Any problem
    /// is a fatal [`Error::Config`] before crawling starts.
    pub fn from_definition(def: &SiteDef) -> Result<Self, Error> {
        let seeds = def
            .seeds
            .iter()
            .map(|s| {
                Url::parse(s).map_err(|e| Error::config(format!("bad seed URL {:?}: {}", s, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if seeds.is_empty() {
            return Err(Error::config(format!("site {:?} has no seeds", def.name)));
        }
        Ok(Self {
            name: def.name.clone(),
            seeds,
            traversal: def.traversal.compile()?,
            article: def.article.compile()?,
            vocab: DateVocabulary::new(def.months.iter().map(|(k, &v)| (k.clone(), v)))?,
        })
    }

    /// Builds a builtin site by name.
    ///
    /// # Panics
    ///
    /// Panics if a builtin definition fails to compile; the embedded data
    /// is part of the crate and covered by tests.
    pub fn builtin(name: &str) -> Option<Self> {
        builtin_site_defs()
            .iter()
            .find(|def| def.name == name)
            .map(|def| Self::from_definition(def).expect("builtin site definition must compile"))
    }

    /// The lesechos.fr adapter: paginated tag traversal.
    pub fn lesechos() -> Self {
        Self::builtin("lesechos").expect("lesechos is a builtin site")
    }

    /// The liberation.fr adapter: year/month/day archive traversal.
    pub fn liberation() -> Self {
        Self::builtin("liberation").expect("liberation is a builtin site")
    }

    /// Registry name of this site.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The initial fetch requests: each seed URL as a root page.
    pub fn seed_requests(&self) -> Vec<PageRef> {
        self.seeds
            .iter()
            .map(|url| PageRef::new(url.clone(), PageType::Root))
            .collect()
    }

    /// The page type assigned to a link discovered on a `referrer`-typed
    /// page, or `None` from terminal pages. Classification depends only on
    /// the discovery context, never on the link target's content.
    pub fn classify_link(&self, referrer: PageType, _link: &str) -> Option<PageType> {
        traverse::child_page_type(&self.traversal, referrer)
    }

    /// Emits the next fetch requests for a non-terminal page. Returns an
    /// empty list for article pages and for pages whose selectors match
    /// nothing.
    pub fn visit(&self, doc: &Document, page_type: PageType) -> Vec<PageRef> {
        traverse::visit(doc, page_type, &self.traversal)
    }

    /// Extracts the record for an article page. Never fails; missing fields
    /// are absent in the record.
    pub fn extract(&self, doc: &Document) -> ArticleRecord {
        extract::extract(doc, &self.article, &self.vocab)
    }

    /// Processes one delivered document: articles become records, anything
    /// else becomes follow-up requests.
    pub fn handle(&self, doc: &Document, page_type: PageType) -> Visit {
        if page_type.is_article() {
            Visit::Record(self.extract(doc))
        } else {
            Visit::Follow(self.visit(doc, page_type))
        }
    }
}
