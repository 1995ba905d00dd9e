//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site's pages are rendered and served elsewhere; this router only binds
//! the thin API routes they call: event ingest, image proxy and photo search.
//! Every route is stateless apart from the shared `AppState`.

pub mod events;
pub mod images;
pub mod unsplash;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the API router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/events/ingest", get(events::ingest_get).post(events::ingest_post))
        .route("/api/image", get(images::proxy))
        .route("/api/unsplash/search", get(unsplash::search))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// First value of `name` in a raw query string, decoded. May be empty.
pub(crate) fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

/// First non-empty value among `names`, checked in order.
pub(crate) fn first_param(query: Option<&str>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| query_param(query, name).filter(|v| !v.is_empty()))
}

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
