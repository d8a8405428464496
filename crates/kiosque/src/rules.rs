// ABOUTME: Declarative per-site rule set: serde data model plus compiled selector form.
// ABOUTME: Adapters differ only in this data; all control flow is generic.

//! Per-site selector rule sets.
//!
//! A site is described entirely by data: where its category or archive
//! links live, how listing pages are filtered, and which selectors locate
//! each article field. One generic traversal controller and one generic
//! extractor consume these rules, so adding a site never adds control flow.
//!
//! Raw `*Def` types deserialize from JSON. Compiling a definition parses
//! every CSS selector up front; a selector that fails to parse is a fatal
//! [`Error::Config`] at adapter construction, never a runtime surprise.

use std::collections::BTreeMap;

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A complete site definition as it appears in the site registry JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteDef {
    /// Registry key, e.g. `"lesechos"`.
    pub name: String,
    /// Seed URLs, fetched as root pages.
    pub seeds: Vec<String>,
    /// Month-name vocabulary: locale token to month number.
    pub months: BTreeMap<String, u32>,
    pub traversal: TraversalDef,
    pub article: ArticleDef,
}

/// How the root page expands into the next traversal level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RootDef {
    /// Category links from the first `nav` container, each swept with
    /// `?page=1..=pages`. Leading entries (the featured "à la une" link)
    /// and trailing entries (subscriber-only sections) are dropped by
    /// position.
    Paginated {
        nav: String,
        link: String,
        #[serde(default)]
        skip_leading: usize,
        #[serde(default)]
        skip_trailing: usize,
        pages: u32,
    },
    /// A fixed descending year sweep over `{path_prefix}{year}/`, from
    /// `newest` down to `oldest`, both inclusive.
    Archive {
        path_prefix: String,
        newest: i32,
        oldest: i32,
    },
}

/// Traversal rules for one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalDef {
    pub root: RootDef,
    /// Link-list selector shared by the year and month archive levels.
    #[serde(default)]
    pub archive_link: Option<String>,
    /// Rules for the terminal listing level (archive day or tag page).
    pub listing: ListingDef,
}

/// Article-link discovery on a listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDef {
    /// Repeated per-article container, e.g. `article`.
    pub container: String,
    /// Anchor selector inside a container.
    pub link: String,
    /// A container is skipped when any of these match inside it.
    #[serde(default)]
    pub exclude_inner: Vec<String>,
    /// An anchor is skipped when its text contains this label.
    #[serde(default)]
    pub exclude_text: Option<String>,
}

/// A text query: CSS selector plus an optional required substring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextQueryDef {
    pub css: String,
    #[serde(default)]
    pub contains: Option<String>,
}

/// Where article tags come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TagsDef {
    /// Segments of the article URL path, minus the trailing slug.
    UrlPath,
    /// Path segments of the last link matching `css`.
    LinkPath { css: String },
}

/// Publication date extraction: a text query plus the positional token
/// layout understood by the date normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateDef {
    pub query: TextQueryDef,
    /// Whitespace-token index of the day within the matched fragment.
    pub day_index: usize,
}

fn default_content_exclude() -> Vec<String> {
    vec!["script".to_string()]
}

/// Body text extraction rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDef {
    /// Body container selector.
    pub container: String,
    /// When set, only text under these element names is kept.
    #[serde(default)]
    pub include: Option<Vec<String>>,
    /// Text under these element names is always dropped.
    #[serde(default = "default_content_exclude")]
    pub exclude: Vec<String>,
}

/// Field selectors for an article page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDef {
    pub title: TextQueryDef,
    pub description: TextQueryDef,
    pub date: DateDef,
    pub tags: TagsDef,
    pub content: ContentDef,
}

fn compile(css: &str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::config(format!("bad selector {:?}: {}", css, e)))
}

/// Compiled text query.
#[derive(Debug, Clone)]
pub struct TextQuery {
    pub selector: Selector,
    pub contains: Option<String>,
}

impl TextQueryDef {
    pub fn compile(&self) -> Result<TextQuery, Error> {
        Ok(TextQuery {
            selector: compile(&self.css)?,
            contains: self.contains.clone(),
        })
    }
}

/// Compiled root expansion rule.
#[derive(Debug, Clone)]
pub enum RootRule {
    Paginated {
        nav: Selector,
        link: Selector,
        skip_leading: usize,
        skip_trailing: usize,
        pages: u32,
    },
    Archive {
        path_prefix: String,
        newest: i32,
        oldest: i32,
    },
}

/// Compiled listing rule.
#[derive(Debug, Clone)]
pub struct ListingRule {
    pub container: Selector,
    pub link: Selector,
    pub exclude_inner: Vec<Selector>,
    pub exclude_text: Option<String>,
}

/// Compiled traversal rule set.
#[derive(Debug, Clone)]
pub struct TraversalRules {
    pub root: RootRule,
    pub archive_link: Option<Selector>,
    pub listing: ListingRule,
}

/// Compiled tag extraction rule.
#[derive(Debug, Clone)]
pub enum TagsRule {
    UrlPath,
    LinkPath(Selector),
}

/// Compiled date extraction rule.
#[derive(Debug, Clone)]
pub struct DateRule {
    pub query: TextQuery,
    pub day_index: usize,
}

/// Compiled content extraction rule.
#[derive(Debug, Clone)]
pub struct ContentRule {
    pub container: Selector,
    pub include: Option<Vec<String>>,
    pub exclude: Vec<String>,
}

/// Compiled article rule set.
#[derive(Debug, Clone)]
pub struct ArticleRules {
    pub title: TextQuery,
    pub description: TextQuery,
    pub date: DateRule,
    pub tags: TagsRule,
    pub content: ContentRule,
}

impl TraversalDef {
    pub fn compile(&self) -> Result<TraversalRules, Error> {
        let root = match &self.root {
            RootDef::Paginated {
                nav,
                link,
                skip_leading,
                skip_trailing,
                pages,
            } => RootRule::Paginated {
                nav: compile(nav)?,
                link: compile(link)?,
                skip_leading: *skip_leading,
                skip_trailing: *skip_trailing,
                pages: *pages,
            },
            RootDef::Archive {
                path_prefix,
                newest,
                oldest,
            } => {
                if newest < oldest {
                    return Err(Error::config(format!(
                        "archive year bounds inverted: newest {} < oldest {}",
                        newest, oldest
                    )));
                }
                RootRule::Archive {
                    path_prefix: path_prefix.clone(),
                    newest: *newest,
                    oldest: *oldest,
                }
            }
        };
        let archive_link = match &self.archive_link {
            Some(css) => Some(compile(css)?),
            None => None,
        };
        let listing = ListingRule {
            container: compile(&self.listing.container)?,
            link: compile(&self.listing.link)?,
            exclude_inner: self
                .listing
                .exclude_inner
                .iter()
                .map(|css| compile(css))
                .collect::<Result<_, _>>()?,
            exclude_text: self.listing.exclude_text.clone(),
        };
        Ok(TraversalRules {
            root,
            archive_link,
            listing,
        })
    }
}

impl ArticleDef {
    pub fn compile(&self) -> Result<ArticleRules, Error> {
        let tags = match &self.tags {
            TagsDef::UrlPath => TagsRule::UrlPath,
            TagsDef::LinkPath { css } => TagsRule::LinkPath(compile(css)?),
        };
        Ok(ArticleRules {
            title: self.title.compile()?,
            description: self.description.compile()?,
            date: DateRule {
                query: self.date.query.compile()?,
                day_index: self.date.day_index,
            },
            tags,
            content: ContentRule {
                container: compile(&self.content.container)?,
                include: self.content.include.clone(),
                exclude: self.content.exclude.clone(),
            },
        })
    }
}
