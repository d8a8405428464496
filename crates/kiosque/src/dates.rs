// ABOUTME: Locale-aware publication date normalization for French news sites.
// ABOUTME: DateVocabulary maps month-name tokens to month numbers; parsing is positional.

//! Locale date normalization.
//!
//! Sites print publication dates as free text, e.g.
//! `"Publié le 12 mars 2024 à 10:00"`. The layout is positional: after
//! splitting on whitespace, the day token sits at a fixed per-site index,
//! the month-name token immediately follows, then the year; anything after
//! that (time of day) is ignored. Month names are looked up in a per-site
//! [`DateVocabulary`] with exact, accent-sensitive matching.
//!
//! Key behaviors:
//! - A vocabulary must have exactly 12 entries mapping bijectively onto
//!   months 1..=12; anything else is a configuration error.
//! - Ordinal day tokens ("1er") normalize to the bare integer.
//! - Malformed fragments fail with [`Error::DateFormat`], impossible
//!   calendar dates with [`Error::DateRange`]; callers downgrade both to an
//!   absent field.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::Error;

/// Per-site lookup table from locale month-name token to month number.
///
/// Matching is case- and accent-sensitive: `"janv."` and `"Janv."` are
/// different tokens.
#[derive(Debug, Clone)]
pub struct DateVocabulary {
    months: HashMap<String, u32>,
}

impl DateVocabulary {
    /// Builds a vocabulary, validating that the entries cover each month
    /// 1..=12 exactly once.
    pub fn new(entries: impl IntoIterator<Item = (String, u32)>) -> Result<Self, Error> {
        let months: HashMap<String, u32> = entries.into_iter().collect();
        if months.len() != 12 {
            return Err(Error::config(format!(
                "month vocabulary has {} entries, expected 12",
                months.len()
            )));
        }
        let mut seen = [false; 13];
        for (token, &number) in &months {
            if !(1..=12).contains(&number) {
                return Err(Error::config(format!(
                    "month token {:?} maps to {}, outside 1..=12",
                    token, number
                )));
            }
            if seen[number as usize] {
                return Err(Error::config(format!("month {} mapped twice", number)));
            }
            seen[number as usize] = true;
        }
        Ok(Self { months })
    }

    /// Looks up a month token. Exact match only.
    pub fn month(&self, token: &str) -> Option<u32> {
        self.months.get(token).copied()
    }
}

/// Normalizes an ordinal day token ("1er", "1st") to its digit prefix.
fn strip_ordinal(token: &str) -> &str {
    token.trim_end_matches(|c: char| c.is_alphabetic())
}

/// Parses a free-text date fragment by fixed token position.
///
/// `day_index` is the whitespace-token index of the day; the month token is
/// at `day_index + 1` and the year at `day_index + 2`. For
/// `"Publié le 12 mars 2024 à 10:00"` the index is 2. Trailing tokens are
/// ignored.
pub fn parse_published(
    fragment: &str,
    day_index: usize,
    vocab: &DateVocabulary,
) -> Result<NaiveDate, Error> {
    let tokens: Vec<&str> = fragment.split_whitespace().collect();
    let (day_token, month_token, year_token) = match (
        tokens.get(day_index),
        tokens.get(day_index + 1),
        tokens.get(day_index + 2),
    ) {
        (Some(&d), Some(&m), Some(&y)) => (d, m, y),
        _ => return Err(Error::DateFormat(fragment.to_string())),
    };

    let day: u32 = strip_ordinal(day_token)
        .parse()
        .map_err(|_| Error::DateFormat(day_token.to_string()))?;
    let month = vocab
        .month(month_token)
        .ok_or_else(|| Error::DateFormat(month_token.to_string()))?;
    let year: i32 = year_token
        .parse()
        .map_err(|_| Error::DateFormat(year_token.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::DateRange { year, month, day })
}
