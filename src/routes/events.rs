//! Event ingest routes.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::response::Json;
use serde::Deserialize;

use super::first_param;
use crate::error::ApiError;
use crate::services::ingest::{self, IngestResult};
use crate::state::AppState;

/// Accepted names for the target URL, in priority order.
const TARGET_ALIASES: [&str; 3] = ["url", "u", "link"];

#[derive(Debug, Default, Deserialize)]
pub struct IngestBody {
    pub url: Option<String>,
    pub u: Option<String>,
    pub link: Option<String>,
}

impl IngestBody {
    fn target(&self) -> Option<&str> {
        [&self.url, &self.u, &self.link]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }
}

/// `GET /api/events/ingest?url=`: scrape an event page into splash frontmatter.
pub async fn ingest_get(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<IngestResult>, ApiError> {
    let target = first_param(query.as_deref(), &TARGET_ALIASES);
    run(&state, target.as_deref()).await
}

/// `POST /api/events/ingest`: same as GET with `{url|u|link}` in a JSON body.
///
/// The body is parsed by hand so malformed JSON reports through `ApiError`
/// like every other failure on this route.
pub async fn ingest_post(State(state): State<AppState>, body: Bytes) -> Result<Json<IngestResult>, ApiError> {
    let body: IngestBody = serde_json::from_slice(&body).map_err(|e| ApiError::Unexpected(e.to_string()))?;
    run(&state, body.target()).await
}

async fn run(state: &AppState, target: Option<&str>) -> Result<Json<IngestResult>, ApiError> {
    let Some(target) = target else {
        return Err(ApiError::Validation("Missing url".into()));
    };
    let result = ingest::ingest(&state.http, &state.config.site, target).await?;
    Ok(Json(result))
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
