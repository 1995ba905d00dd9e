//! Server-side image proxy.
//!
//! Fetches remote images on behalf of the page so they load regardless of
//! the remote host's CORS or referrer policy. Any failure redirects to a
//! local fallback image so pages never render a blank slot.

use axum::body::Body;
use axum::extract::{RawQuery, State};
use axum::http::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, LOCATION, USER_AGENT};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::query_param;
use crate::state::AppState;

const IMAGE_ACCEPT: &str = "image/avif,image/webp,image/apng,image/*,*/*;q=0.8";
const IMAGE_CACHE_CONTROL: &str = "public, max-age=3600";
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// `GET /api/image?url=`: stream a remote image through this server.
pub async fn proxy(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let Some(target) = query_param(query.as_deref(), "url").filter(|v| !v.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing url param").into_response();
    };

    match fetch_image(&state, &target).await {
        Ok(response) => response,
        Err(reason) => {
            warn!(url = %target, %reason, "image proxy falling back");
            fallback(&state.config.image_fallback_path)
        }
    }
}

async fn fetch_image(state: &AppState, target: &str) -> Result<Response, String> {
    let upstream = state
        .http
        .get(target)
        .header(USER_AGENT, state.config.proxy_user_agent.as_str())
        .header(ACCEPT, IMAGE_ACCEPT)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = upstream.status();
    if !status.is_success() {
        return Err(format!("upstream status {}", status.as_u16()));
    }

    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    Ok((
        [(CONTENT_TYPE, content_type), (CACHE_CONTROL, HeaderValue::from_static(IMAGE_CACHE_CONTROL))],
        Body::from_stream(upstream.bytes_stream()),
    )
        .into_response())
}

fn fallback(path: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, path)]).into_response()
}

#[cfg(test)]
#[path = "images_test.rs"]
mod tests;
