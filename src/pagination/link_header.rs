//! Link header continuation (RFC 8288)
//!
//! Format: `Link: <https://api.example.com/v1/cards?page=2>; rel="next", ...`

use crate::error::Result;
use regex::Regex;
use reqwest::header::{HeaderMap, LINK};
use std::sync::LazyLock;
use url::Url;

/// One link entry: `<url>; rel="relation"`, optionally followed by more params
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*<([^>]*)>\s*;\s*rel\s*=\s*"([^"]*)"\s*(?:;.*)?$"#).unwrap()
});

const NEXT_REL: &str = "next";

/// Parse a Link header value and extract the URL of the `next` relation
///
/// Entries that do not match the expected shape are skipped. If several
/// entries are labelled `next`, the last one wins.
pub fn parse_link_header(header: &str) -> Option<&str> {
    let mut next = None;

    for part in header.split(',') {
        let Some(captures) = LINK_REGEX.captures(part) else {
            continue;
        };
        let (Some(url), Some(rel)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        // rel may hold several space-separated relation types
        if rel.as_str().split_whitespace().any(|r| r == NEXT_REL) {
            next = Some(url.as_str());
        }
    }

    next
}

/// Find the continuation cursor in `headers`, resolved against `current`
///
/// Returns `Ok(None)` when there is no `next` relation, which ends a
/// full enumeration.
pub fn next_link(headers: &HeaderMap, current: &Url) -> Result<Option<Url>> {
    let mut next = None;

    for value in headers.get_all(LINK) {
        let Ok(value) = value.to_str() else {
            continue;
        };
        if let Some(url) = parse_link_header(value) {
            next = Some(url);
        }
    }

    match next {
        // Absolute cursors replace `current` entirely; `Url` normalizes them
        Some(url) => Ok(Some(current.join(url)?)),
        None => Ok(None),
    }
}
