use serde::Deserialize;

/// Constant weight assigned to every suggestion; there is no relevance ranking.
pub const SUGGESTION_SCORE: u32 = 10;

/// Query parameters of `GET /suggest`. `tags` is required; a request without
/// it is rejected before the handler runs.
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub tags: String,
}
