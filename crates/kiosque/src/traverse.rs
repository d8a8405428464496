// ABOUTME: Page classifier and traversal controller.
// ABOUTME: Maps (document, page type) to the next set of classified fetch requests.

//! The traversal state machine.
//!
//! `visit` dispatches on [`PageType`] and emits the child [`PageRef`]s for
//! the crawl engine to fetch next. Page types are assigned here, at link
//! discovery, and echoed back by the engine with each fetched document.
//!
//! Key behaviors:
//! - A selector that matches nothing produces an empty child list; missing
//!   or oddly structured pages are normal branch termination, not faults.
//! - Both sweeps are bounded by rule data: the page-number sweep by its
//!   configured page count, the year sweep by its fixed year bounds.
//! - The controller is pure: no retries, no fetching, no state between
//!   calls. Retry and deduplication belong to the engine.

use tracing::debug;
use url::Url;

use crate::document::Document;
use crate::page::{PageRef, PageType};
use crate::rules::{RootRule, TraversalRules};

/// The page type assigned to links discovered on a `referrer`-typed page.
///
/// `Root` fans out to either the tag-listing or the archive-year level
/// depending on the site's root strategy; archive levels descend one step;
/// listing levels yield articles. Articles are terminal.
pub fn child_page_type(rules: &TraversalRules, referrer: PageType) -> Option<PageType> {
    match referrer {
        PageType::Root => Some(match rules.root {
            RootRule::Paginated { .. } => PageType::TagListing,
            RootRule::Archive { .. } => PageType::ArchiveYear,
        }),
        PageType::ArchiveYear => Some(PageType::ArchiveMonth),
        PageType::ArchiveMonth => Some(PageType::ArchiveDay),
        PageType::ArchiveDay | PageType::TagListing => Some(PageType::Article),
        PageType::Article => None,
    }
}

/// Emits the next fetch requests for a page of the given type.
pub fn visit(doc: &Document, page_type: PageType, rules: &TraversalRules) -> Vec<PageRef> {
    let refs = match page_type {
        PageType::Root => visit_root(doc, rules),
        PageType::ArchiveYear => archive_children(doc, rules, PageType::ArchiveMonth),
        PageType::ArchiveMonth => archive_children(doc, rules, PageType::ArchiveDay),
        PageType::ArchiveDay | PageType::TagListing => listing_articles(doc, rules),
        PageType::Article => Vec::new(),
    };
    debug!(page_type = %page_type, url = %doc.url(), children = refs.len(), "visited page");
    refs
}

fn visit_root(doc: &Document, rules: &TraversalRules) -> Vec<PageRef> {
    match &rules.root {
        RootRule::Paginated {
            nav,
            link,
            skip_leading,
            skip_trailing,
            pages,
        } => {
            let links = doc.scoped_links(nav, link);
            let kept = trim_ends(&links, *skip_leading, *skip_trailing);
            let mut refs = Vec::with_capacity(kept.len() * *pages as usize);
            for category in kept {
                for page in 1..=*pages {
                    let mut paged = category.clone();
                    paged.set_query(Some(&format!("page={}", page)));
                    refs.push(PageRef::new(paged, PageType::TagListing));
                }
            }
            refs
        }
        RootRule::Archive {
            path_prefix,
            newest,
            oldest,
        } => (*oldest..=*newest)
            .rev()
            .filter_map(|year| doc.resolve(&format!("{}{}/", path_prefix, year)))
            .map(|url| PageRef::new(url, PageType::ArchiveYear))
            .collect(),
    }
}

fn archive_children(doc: &Document, rules: &TraversalRules, child: PageType) -> Vec<PageRef> {
    let Some(link_list) = &rules.archive_link else {
        return Vec::new();
    };
    doc.links(link_list)
        .into_iter()
        .map(|url| PageRef::new(url, child))
        .collect()
}

fn listing_articles(doc: &Document, rules: &TraversalRules) -> Vec<PageRef> {
    let listing = &rules.listing;
    doc.container_links(
        &listing.container,
        &listing.link,
        &listing.exclude_inner,
        listing.exclude_text.as_deref(),
    )
    .into_iter()
    .map(|url| PageRef::new(url, PageType::Article))
    .collect()
}

fn trim_ends(links: &[Url], skip_leading: usize, skip_trailing: usize) -> &[Url] {
    if links.len() <= skip_leading + skip_trailing {
        return &[];
    }
    &links[skip_leading..links.len() - skip_trailing]
}
