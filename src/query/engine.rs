use crate::query::types::SUGGESTION_SCORE;
use crate::store::LinkStore;
use crate::store::types::Properties;

use url::form_urlencoded;

/// Extracts query tags from a raw form-urlencoded request body.
///
/// The first form field's NAME is the space-separated tag list; field values
/// and any further fields are ignored. Anything that does not decode to at
/// least one field yields an empty tag list, never an error.
pub fn parse_form_tags(body: &[u8]) -> Vec<String> {
    match form_urlencoded::parse(body).next() {
        Some((field, _value)) => field.split_whitespace().map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Returns all links matching the query tags, hydrated with their properties.
///
/// Zero tags is the defined "no search criteria" case and returns an empty
/// result without consulting the store. Result order follows the store's
/// returned order; links the store no longer has properties for are skipped.
pub fn search_links(store: &dyn LinkStore, tags: &[String]) -> Vec<(String, Properties)> {
    if tags.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<(String, Properties)> = Vec::new();
    for link in store.sorted_links(tags) {
        if let Some(properties) = store.get_link_properties(&link) {
            results.push((link, properties));
        }
    }
    results
}

/// Completes the trailing keyword against the tag vocabulary.
///
/// The last keyword is the partial prefix; the preceding keywords are already
/// confirmed tags and prefix every suggestion, joined by spaces. Candidates
/// already present among the keywords are skipped. Every suggestion carries
/// the same constant score.
///
/// With a single keyword the confirmed-tag prefix is empty and suggestions
/// come back with a leading space (`" python"`). Downstream consumers depend
/// on that exact formatting.
pub fn suggest_tags(store: &dyn LinkStore, keywords: &[String]) -> Vec<(String, u32)> {
    let last_keyword = match keywords.last() {
        Some(keyword) => keyword,
        None => return Vec::new(),
    };
    let confirmed = keywords[..keywords.len() - 1].join(" ");

    let mut suggestions: Vec<(String, u32)> = Vec::new();
    for candidate in store.complete_tags(last_keyword) {
        if keywords.contains(&candidate) {
            continue;
        }
        suggestions.push((format!("{} {}", confirmed, candidate), SUGGESTION_SCORE));
    }
    suggestions
}
