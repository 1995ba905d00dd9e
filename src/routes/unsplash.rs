//! Photo search route.

use axum::extract::{RawQuery, State};
use axum::http::header::CACHE_CONTROL;
use axum::response::{IntoResponse, Json, Response};

use super::query_param;
use crate::error::ApiError;
use crate::services::unsplash::{self, ImageSize, NormalizedPhoto, Orientation, SearchOptions};
use crate::state::AppState;

const SEARCH_CACHE_CONTROL: &str = "public, max-age=300";

fn number_param(query: Option<&str>, name: &str, default: u32) -> u32 {
    query_param(query, name)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// `GET /api/unsplash/search?query=`: search and normalize photos.
pub async fn search(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Result<Response, ApiError> {
    let raw = raw.as_deref();
    let query = query_param(raw, "query").unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::Validation("Missing required \"query\" parameter".into()));
    }

    let opts = SearchOptions {
        per_page: number_param(raw, "perPage", unsplash::DEFAULT_PER_PAGE),
        page: number_param(raw, "page", unsplash::DEFAULT_PAGE),
        orientation: Orientation::parse(query_param(raw, "orientation").as_deref()),
    };
    let size = ImageSize {
        width: number_param(raw, "w", unsplash::DEFAULT_WIDTH),
        height: number_param(raw, "h", unsplash::DEFAULT_HEIGHT),
        quality: number_param(raw, "q", unsplash::DEFAULT_QUALITY),
    };

    let photos = unsplash::search_photos(&state.http, &state.config.unsplash, &query, opts).await?;
    let results = photos
        .iter()
        .map(|p| unsplash::to_normalized(p, size))
        .collect::<Result<Vec<NormalizedPhoto>, _>>()?;

    Ok((
        [(CACHE_CONTROL, SEARCH_CACHE_CONTROL)],
        Json(serde_json::json!({ "results": results })),
    )
        .into_response())
}

#[cfg(test)]
#[path = "unsplash_test.rs"]
mod tests;
