use super::engine::{parse_form_tags, search_links, suggest_tags};
use super::types::SuggestParams;
use crate::store::LinkStore;

use axum::body::Bytes;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Extension, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

pub async fn handle_index() -> Html<&'static str> {
    Html(include_str!("../index.html"))
}

/// `POST /search`: the first form field's name is the space-separated tag
/// list. Malformed or absent input yields `{}`, not an error.
///
/// The body is read raw rather than through the `Form` extractor so that a
/// missing or wrong content type also falls through to the empty result.
pub async fn handle_search(
    Extension(store): Extension<Arc<dyn LinkStore>>,
    body: Bytes,
) -> Json<Map<String, Value>> {
    let tags = parse_form_tags(&body);
    tracing::debug!("Search for tags {:?}", tags);

    let mut results = Map::new();
    for (link, properties) in search_links(store.as_ref(), &tags) {
        let properties: Map<String, Value> = properties
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        results.insert(link, Value::Object(properties));
    }
    Json(results)
}

/// `GET /suggest?tags=...`: completes the last token of `tags` against the
/// known tag vocabulary. A missing `tags` parameter is rejected by the
/// `Query` extractor; a present but empty one is rejected here. Both are
/// caller errors, unlike the empty-tags case of `/search`.
pub async fn handle_suggest(
    Extension(store): Extension<Arc<dyn LinkStore>>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Map<String, Value>>, (StatusCode, String)> {
    let keywords: Vec<String> = params
        .tags
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if keywords.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "tags must contain at least one token".to_string(),
        ));
    }
    tracing::debug!("Suggest for keywords {:?}", keywords);

    let mut suggestions = Map::new();
    for (suggestion, score) in suggest_tags(store.as_ref(), &keywords) {
        suggestions.insert(suggestion, Value::from(score));
    }
    Ok(Json(suggestions))
}
