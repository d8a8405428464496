// ABOUTME: Text assembly for fragmented text nodes.
// ABOUTME: Concatenates fragments in order and applies NFKD normalization.

use unicode_normalization::UnicodeNormalization;

/// Joins text fragments into one NFKD-normalized string.
///
/// Fragments are concatenated in the order given with no separator; any
/// spacing must already be part of the fragments. Returns `None` when the
/// sequence is empty. Callers distinguish "field absent" from "field
/// present but empty", so an empty sequence must not become `Some("")`.
pub fn assemble<I>(fragments: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    let mut any = false;
    for fragment in fragments {
        any = true;
        joined.push_str(fragment.as_ref());
    }
    if !any {
        return None;
    }
    Some(joined.nfkd().collect())
}
