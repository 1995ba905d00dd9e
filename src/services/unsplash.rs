//! Unsplash photo search, normalized for page components.
//!
//! Server-only: the access key never leaves this process. Without a key the
//! service runs in demo mode and every search comes back empty.

use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::config::UnsplashConfig;
use crate::error::ApiError;

pub const DEFAULT_PER_PAGE: u32 = 12;
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_QUALITY: u32 = 80;

#[derive(Debug, thiserror::Error)]
pub enum UnsplashError {
    #[error("Unsplash search failed: {0}")]
    Request(String),
    #[error("Unsplash search failed: {0}")]
    Status(reqwest::StatusCode),
    #[error("Unsplash response parse failed: {0}")]
    Parse(String),
    #[error("invalid Unsplash photo url: {0}")]
    PhotoUrl(String),
}

impl From<UnsplashError> for ApiError {
    fn from(err: UnsplashError) -> Self {
        Self::Unexpected(err.to_string())
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Squarish => "squarish",
        }
    }

    /// Unknown or missing values fall back to landscape.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("portrait") => Self::Portrait,
            Some("squarish") => Self::Squarish,
            _ => Self::Landscape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub per_page: u32,
    pub page: u32,
    pub orientation: Orientation,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { per_page: DEFAULT_PER_PAGE, page: DEFAULT_PAGE, orientation: Orientation::Landscape }
    }
}

/// Rendered image size and JPEG quality applied to `urls.raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
    pub quality: u32,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, quality: DEFAULT_QUALITY }
    }
}

// =============================================================================
// API TYPES
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct UnsplashPhoto {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "alt_description")]
    pub alt: Option<String>,
    pub urls: PhotoUrls,
    #[serde(default)]
    pub user: Option<PhotoUser>,
    #[serde(default)]
    pub links: Option<PhotoLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUser {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoLinks {
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPhoto {
    pub id: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub credit: String,
    pub credit_url: String,
    pub src: String,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Search photos. Returns an empty list when no access key is configured.
///
/// # Errors
///
/// Returns an error if the request fails, Unsplash answers with a
/// non-success status, or the response cannot be parsed.
pub async fn search_photos(
    http: &reqwest::Client,
    config: &UnsplashConfig,
    query: &str,
    opts: SearchOptions,
) -> Result<Vec<UnsplashPhoto>, UnsplashError> {
    let Some(key) = config.access_key.as_deref() else {
        warn!("UNSPLASH_ACCESS_KEY not set, returning empty Unsplash results");
        return Ok(Vec::new());
    };

    let url = Url::parse_with_params(
        &format!("{}/search/photos", config.base_url),
        &[
            ("query", query.to_string()),
            ("per_page", opts.per_page.to_string()),
            ("page", opts.page.to_string()),
            ("orientation", opts.orientation.as_str().to_string()),
        ],
    )
    .map_err(|e| UnsplashError::Request(e.to_string()))?;

    let response = http
        .get(url)
        .header(AUTHORIZATION, format!("Client-ID {key}"))
        .send()
        .await
        .map_err(|e| UnsplashError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), query, "Unsplash search returned non-success status");
        return Err(UnsplashError::Status(status));
    }

    let body: SearchResponse = response.json().await.map_err(|e| UnsplashError::Parse(e.to_string()))?;
    Ok(body.results)
}

/// Reduce an API photo to what page components render, sizing `urls.raw`
/// through its query parameters.
///
/// # Errors
///
/// Returns an error if `urls.raw` is not an absolute URL.
pub fn to_normalized(photo: &UnsplashPhoto, size: ImageSize) -> Result<NormalizedPhoto, UnsplashError> {
    let mut src = Url::parse(&photo.urls.raw).map_err(|e| UnsplashError::PhotoUrl(e.to_string()))?;

    let params = [
        ("auto", "format".to_string()),
        ("fit", "crop".to_string()),
        ("w", size.width.to_string()),
        ("h", size.height.to_string()),
        ("q", size.quality.to_string()),
    ];
    let kept: Vec<(String, String)> = src
        .query_pairs()
        .filter(|(k, _)| !params.iter().any(|(p, _)| k == p))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    src.query_pairs_mut().clear().extend_pairs(kept).extend_pairs(params.iter());

    Ok(NormalizedPhoto {
        id: photo.id.clone(),
        alt: photo
            .alt
            .clone()
            .or_else(|| photo.description.clone())
            .unwrap_or_else(|| "Unsplash image".to_string()),
        width: size.width,
        height: size.height,
        credit: photo
            .user
            .as_ref()
            .and_then(|u| u.name.clone())
            .unwrap_or_else(|| "Unsplash photographer".to_string()),
        credit_url: photo
            .links
            .as_ref()
            .and_then(|l| l.html.clone())
            .unwrap_or_else(|| format!("https://unsplash.com/photos/{}", photo.id)),
        src: src.to_string(),
    })
}

#[cfg(test)]
#[path = "unsplash_test.rs"]
mod tests;
