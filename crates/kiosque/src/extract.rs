// ABOUTME: Article extractor applying a site's field rules to one article document.
// ABOUTME: Each field is extracted independently; failures become absent fields, never errors.

//! Article field extraction.
//!
//! `extract` applies a compiled [`ArticleRules`] to one article document
//! and always produces a record. The five fields are extracted
//! independently: a selector miss or a date that fails to parse leaves
//! that field absent and moves on. Nothing here raises, retries, or does
//! I/O; one record per call.

use tracing::{debug, warn};

use crate::dates::{parse_published, DateVocabulary};
use crate::document::Document;
use crate::record::ArticleRecord;
use crate::rules::{ArticleRules, DateRule, TagsRule};
use crate::text;

/// Extracts one [`ArticleRecord`] from an article page.
pub fn extract(doc: &Document, rules: &ArticleRules, vocab: &DateVocabulary) -> ArticleRecord {
    let mut record = ArticleRecord::new(doc.url().as_str());

    record.title = doc.first_text_where(&rules.title.selector, rules.title.contains.as_deref());
    record.tags = extract_tags(doc, &rules.tags);
    record.description = doc.first_text_where(
        &rules.description.selector,
        rules.description.contains.as_deref(),
    );
    record.date = extract_date(doc, &rules.date, vocab);
    record.content = text::assemble(doc.body_fragments(
        &rules.content.container,
        rules.content.include.as_deref(),
        &rules.content.exclude,
    ));

    debug!(
        url = %record.url,
        title = record.title.is_some(),
        tags = record.tags.len(),
        date = record.date.is_some(),
        content = record.content.is_some(),
        "extracted article"
    );
    record
}

fn extract_tags(doc: &Document, rule: &TagsRule) -> Vec<String> {
    match rule {
        // Path segments of the article URL itself, minus the trailing slug.
        TagsRule::UrlPath => {
            let Some(segments) = doc.url().path_segments() else {
                return Vec::new();
            };
            let segments: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();
            match segments.split_last() {
                Some((_slug, tags)) => tags.iter().map(|s| s.to_string()).collect(),
                None => Vec::new(),
            }
        }
        // Path segments of the last matching tag link.
        TagsRule::LinkPath(selector) => {
            let hrefs = doc.attr_values(selector, "href");
            let Some(last) = hrefs.last() else {
                return Vec::new();
            };
            last.trim_matches('/')
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }
    }
}

fn extract_date(
    doc: &Document,
    rule: &DateRule,
    vocab: &DateVocabulary,
) -> Option<chrono::NaiveDate> {
    let fragment = doc.first_text_where(&rule.query.selector, rule.query.contains.as_deref())?;
    match parse_published(&fragment, rule.day_index, vocab) {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(url = %doc.url(), fragment = %fragment, error = %err, "date did not parse");
            None
        }
    }
}
