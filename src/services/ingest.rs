//! Event ingest service: fetch an event page and draft its splash frontmatter.
//!
//! DESIGN
//! ======
//! One GET per call, no retry and no explicit timeout. The fetched HTML is
//! reduced by `crate::scrape` and combined with the fixed `SiteProfile`
//! values into an `IngestResult`, which is also the HTTP response body.
//! Frontmatter values are interpolated verbatim; quotes are not escaped.

use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use crate::config::SiteProfile;
use crate::error::ApiError;
use crate::scrape;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Invalid url: {0}")]
    InvalidUrl(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("failed to read upstream body: {0}")]
    Body(String),
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::InvalidUrl(_) => Self::Validation(err.to_string()),
            IngestError::Status(status) => Self::UpstreamStatus(status),
            IngestError::Transport(reason) => Self::UpstreamTransport(reason),
            IngestError::Body(_) => Self::Unexpected(err.to_string()),
        }
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// Flat frontmatter fields, serialized in frontmatter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventFields {
    pub title: String,
    pub event_name: String,
    pub upcoming_dates: String,
    pub upcoming_location: String,
    pub url: String,
    pub splash_page_path: String,
    pub twf_zinger: String,
    pub invite_message: String,
    pub share_image: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub event_website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestResult {
    pub slug: String,
    pub splash_page_path: String,
    pub frontmatter: String,
    pub fields: EventFields,
}

/// Parse the requested target as an absolute URL.
///
/// # Errors
///
/// Returns `IngestError::InvalidUrl` for relative or malformed input.
pub fn parse_target(raw: &str) -> Result<Url, IngestError> {
    Url::parse(raw.trim()).map_err(|e| IngestError::InvalidUrl(e.to_string()))
}

/// Extract the event record from fetched HTML.
#[must_use]
pub fn build_record(html: &str, target: &Url, site: &SiteProfile) -> IngestResult {
    let event_name = scrape::page_title(html);
    let text = scrape::visible_text(html);
    let upcoming_dates = scrape::date_range(&text)
        .or_else(|| scrape::date_range(&event_name))
        .map(|r| r.to_string())
        .unwrap_or_default();
    let upcoming_location = scrape::location(&text).unwrap_or_default();
    let slug = scrape::title_slug(&event_name);
    let splash_page_path = format!("/events/{slug}");

    let fields = EventFields {
        title: format!("Meet {} at {event_name}", site.org_name),
        invite_message: format!("Meet us at {event_name}."),
        event_name,
        upcoming_dates,
        upcoming_location,
        url: site.site_url.clone(),
        splash_page_path: splash_page_path.clone(),
        twf_zinger: site.zinger.clone(),
        share_image: site.share_image.clone(),
        contact_email: site.contact_email.clone(),
        contact_phone: site.contact_phone.clone(),
        event_website: target.origin().ascii_serialization(),
    };

    IngestResult { slug, splash_page_path, frontmatter: render_frontmatter(&fields), fields }
}

/// Render the frontmatter block in its fixed line order.
#[must_use]
pub fn render_frontmatter(f: &EventFields) -> String {
    format!(
        "---\n\
         title: \"{}\"\n\
         event_name: \"{}\"\n\
         upcoming_dates: \"{}\"\n\
         upcoming_location: \"{}\"\n\
         url: {}\n\
         splash_page_path: {}\n\
         twf_zinger: \"{}\"\n\
         invite_message: \"{}\"\n\
         share_image: {}\n\
         contact_email: \"{}\"\n\
         contact_phone: \"{}\"\n\
         event_website: \"{}\"\n\
         ---\n",
        f.title,
        f.event_name,
        f.upcoming_dates,
        f.upcoming_location,
        f.url,
        f.splash_page_path,
        f.twf_zinger,
        f.invite_message,
        f.share_image,
        f.contact_email,
        f.contact_phone,
        f.event_website,
    )
}

/// Fetch `raw_target` once and build its event record.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the fetch fails, the upstream
/// answers with a non-success status, or its body cannot be read.
pub async fn ingest(http: &reqwest::Client, site: &SiteProfile, raw_target: &str) -> Result<IngestResult, IngestError> {
    let target = parse_target(raw_target)?;

    let response = http.get(target.clone()).send().await.map_err(|e| {
        warn!(url = %target, error = %e, "event page fetch failed");
        IngestError::Transport(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(url = %target, status = status.as_u16(), "event page returned non-success status");
        return Err(IngestError::Status(status.as_u16()));
    }

    let html = response.text().await.map_err(|e| IngestError::Body(e.to_string()))?;
    let result = build_record(&html, &target, site);

    info!(
        url = %target,
        slug = %result.slug,
        dates = %result.fields.upcoming_dates,
        location = %result.fields.upcoming_location,
        "event page ingested"
    );
    Ok(result)
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
