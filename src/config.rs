//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_USER_AGENT: &str = "WaterFoundationSite/1.0 (+https://example.org)";
pub const DEFAULT_IMAGE_FALLBACK_PATH: &str = "/heroes/imageOf__Whale-pair-under-wave.jpeg";
pub const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// `User-Agent` sent by the image proxy; some CDNs reject requests without one.
    pub proxy_user_agent: String,
    /// Local image the proxy redirects to when the upstream fails.
    pub image_fallback_path: String,
    pub unsplash: UnsplashConfig,
    pub site: SiteProfile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsplashConfig {
    /// `None` puts photo search in demo mode (always empty results).
    pub access_key: Option<String>,
    pub base_url: String,
}

/// Fixed values stamped into every generated event splash page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    pub org_name: String,
    pub site_url: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub share_image: String,
    pub zinger: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            org_name: "The Water Foundation".into(),
            site_url: "https://the-water-foundation.com".into(),
            contact_email: "dive.deep@the-water-foundation.com".into(),
            contact_phone: "+49 177 4543720".into(),
            share_image: "/ogImageLandscape__The-Water-Foundation.jpg".into(),
            zinger: "The Water Foundation is a think tank and capital catalyst, assuring full-stack financial \
                     innovations are tackling the urgent challenge of our time."
                .into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PROXY_USER_AGENT`: user agent for the image proxy
    /// - `IMAGE_FALLBACK_PATH`: redirect target when a proxied image fails
    /// - `UNSPLASH_ACCESS_KEY`: photo search returns no results when absent
    /// - `UNSPLASH_BASE_URL`: default `https://api.unsplash.com`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = get("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            proxy_user_agent: get("PROXY_USER_AGENT").unwrap_or_else(|| DEFAULT_PROXY_USER_AGENT.to_string()),
            image_fallback_path: get("IMAGE_FALLBACK_PATH")
                .unwrap_or_else(|| DEFAULT_IMAGE_FALLBACK_PATH.to_string()),
            unsplash: UnsplashConfig {
                access_key: get("UNSPLASH_ACCESS_KEY"),
                base_url: get("UNSPLASH_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_UNSPLASH_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
            site: SiteProfile::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
