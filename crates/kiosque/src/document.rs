// ABOUTME: Document wrapper combining a parsed HTML tree with its resolved URL.
// ABOUTME: Provides the structural queries used by traversal and extraction.

//! Parsed-page view used by the traversal controller and article extractor.
//!
//! A [`Document`] owns one `scraper::Html` parse tree plus the URL the page
//! was fetched from. It is consumed within a single handler invocation and
//! never retained, so every query method takes `&self` and allocates its
//! results.
//!
//! Key behaviors:
//! - Single-value text queries collapse inner whitespace and treat empty
//!   text as no match.
//! - Relative hrefs are resolved against the document URL; hrefs that do
//!   not resolve are skipped, not errors.
//! - Body-text queries return raw text-node fragments in document order,
//!   preserving their original whitespace for downstream assembly.

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node, Selector};
use url::Url;

/// An immutable parsed view of one fetched page.
pub struct Document {
    html: Html,
    url: Url,
}

/// Collapses runs of whitespace into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Document {
    /// Parses an HTML string fetched from `url`.
    pub fn parse(html: &str, url: Url) -> Self {
        Self {
            html: Html::parse_document(html),
            url,
        }
    }

    /// The URL this document was fetched from.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Resolves an href against the document URL.
    pub fn resolve(&self, href: &str) -> Option<Url> {
        self.url.join(href).ok()
    }

    /// Inner text of the first match with non-empty text, whitespace
    /// collapsed. `None` when nothing matches.
    pub fn first_text(&self, sel: &Selector) -> Option<String> {
        self.first_text_where(sel, None)
    }

    /// Like [`first_text`](Self::first_text), but when `contains` is set the
    /// match must also contain that substring in its inner text.
    pub fn first_text_where(&self, sel: &Selector, contains: Option<&str>) -> Option<String> {
        for el in self.html.select(sel) {
            let text: String = el.text().collect();
            if let Some(needle) = contains {
                if !text.contains(needle) {
                    continue;
                }
            }
            let normalized = normalize_whitespace(&text);
            if !normalized.is_empty() {
                return Some(normalized);
            }
        }
        None
    }

    /// All non-empty values of `attr` across matches, in document order.
    pub fn attr_values(&self, sel: &Selector, attr: &str) -> Vec<String> {
        self.html
            .select(sel)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Resolved `href` targets of all matches, in document order.
    pub fn links(&self, sel: &Selector) -> Vec<Url> {
        self.html
            .select(sel)
            .filter_map(|el| el.value().attr("href"))
            .filter_map(|href| self.resolve(href))
            .collect()
    }

    /// Resolved `href` targets of `link` matches inside the *first* match of
    /// `scope`. Used for link lists that live in one designated container
    /// (a site's primary nav).
    pub fn scoped_links(&self, scope: &Selector, link: &Selector) -> Vec<Url> {
        let Some(container) = self.html.select(scope).next() else {
            return Vec::new();
        };
        container
            .select(link)
            .filter_map(|el| el.value().attr("href"))
            .filter_map(|href| self.resolve(href))
            .collect()
    }

    /// Resolved links from repeated containers, with two exclusion rules:
    ///
    /// - a container is dropped entirely when any `exclude_inner` selector
    ///   matches inside it (structural marker for opinion or subscriber
    ///   pieces);
    /// - an individual anchor is dropped when `exclude_text` is set and the
    ///   anchor's inner text contains it (labeled subscriber-selection
    ///   links).
    pub fn container_links(
        &self,
        container: &Selector,
        link: &Selector,
        exclude_inner: &[Selector],
        exclude_text: Option<&str>,
    ) -> Vec<Url> {
        let mut out = Vec::new();
        for cont in self.html.select(container) {
            if exclude_inner
                .iter()
                .any(|sel| cont.select(sel).next().is_some())
            {
                continue;
            }
            for anchor in cont.select(link) {
                if let Some(label) = exclude_text {
                    let text: String = anchor.text().collect();
                    if text.contains(label) {
                        continue;
                    }
                }
                if let Some(href) = anchor.value().attr("href") {
                    if let Some(resolved) = self.resolve(href) {
                        out.push(resolved);
                    }
                }
            }
        }
        out
    }

    /// Raw text-node fragments under every match of `container`, in document
    /// order.
    ///
    /// When `include` is set, a fragment is kept only if some ancestor
    /// between it and the container is one of the included element names
    /// (heading/paragraph scoping). Fragments under any `exclude` element
    /// (scripts) are always dropped. Fragments keep their original
    /// whitespace; assembly decides what to do with them.
    pub fn body_fragments(
        &self,
        container: &Selector,
        include: Option<&[String]>,
        exclude: &[String],
    ) -> Vec<String> {
        let mut out = Vec::new();
        for cont in self.html.select(container) {
            let cont_id = cont.id();
            for node in cont.descendants() {
                if node.id() == cont_id {
                    continue;
                }
                let Some(text) = node.value().as_text() else {
                    continue;
                };
                if fragment_kept(node, cont_id, include, exclude) {
                    out.push(text.text.to_string());
                }
            }
        }
        out
    }
}

/// Decides whether a text node inside a body container survives the
/// include/exclude element filters, by walking its ancestor elements up to
/// (but not including) the container.
fn fragment_kept(
    node: NodeRef<'_, Node>,
    container: NodeId,
    include: Option<&[String]>,
    exclude: &[String],
) -> bool {
    let mut included = include.is_none();
    let mut cursor = node.parent();
    while let Some(parent) = cursor {
        if parent.id() == container {
            break;
        }
        if let Some(el) = parent.value().as_element() {
            let name = el.name();
            if exclude.iter().any(|e| e == name) {
                return false;
            }
            if let Some(names) = include {
                if names.iter().any(|n| n == name) {
                    included = true;
                }
            }
        }
        cursor = parent.parent();
    }
    included
}
