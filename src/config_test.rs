use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = config_from(&[]);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.proxy_user_agent, DEFAULT_PROXY_USER_AGENT);
    assert_eq!(cfg.image_fallback_path, DEFAULT_IMAGE_FALLBACK_PATH);
    assert_eq!(cfg.unsplash.access_key, None);
    assert_eq!(cfg.unsplash.base_url, DEFAULT_UNSPLASH_BASE_URL);
    assert_eq!(cfg.site, SiteProfile::default());
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("PROXY_USER_AGENT", "test-agent"),
        ("IMAGE_FALLBACK_PATH", "/fallback.jpg"),
        ("UNSPLASH_ACCESS_KEY", "key-123"),
        ("UNSPLASH_BASE_URL", "http://127.0.0.1:9999/"),
    ]);
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.proxy_user_agent, "test-agent");
    assert_eq!(cfg.image_fallback_path, "/fallback.jpg");
    assert_eq!(cfg.unsplash.access_key.as_deref(), Some("key-123"));
    assert_eq!(cfg.unsplash.base_url, "http://127.0.0.1:9999");
}

#[test]
fn invalid_port_falls_back_to_default() {
    assert_eq!(config_from(&[("PORT", "not-a-port")]).port, DEFAULT_PORT);
    assert_eq!(config_from(&[("PORT", "70000")]).port, DEFAULT_PORT);
}

#[test]
fn blank_access_key_counts_as_unset() {
    let cfg = config_from(&[("UNSPLASH_ACCESS_KEY", "   ")]);
    assert_eq!(cfg.unsplash.access_key, None);
}

#[test]
fn site_profile_defaults() {
    let site = SiteProfile::default();
    assert_eq!(site.org_name, "The Water Foundation");
    assert_eq!(site.contact_phone, "+49 177 4543720");
    assert!(site.zinger.starts_with("The Water Foundation is a think tank"));
    assert!(site.zinger.contains("financial innovations"));
}
