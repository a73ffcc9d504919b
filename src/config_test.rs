use super::*;

#[test]
fn missing_value_uses_default_origin() {
    let cfg = ClientConfig::from_raw(None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn blank_value_uses_default_origin() {
    let cfg = ClientConfig::from_raw(Some("   "));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn trailing_slashes_are_trimmed() {
    let cfg = ClientConfig::from_raw(Some("https://courses.example.com//"));
    assert_eq!(cfg.api_base_url, "https://courses.example.com");
}

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = ClientConfig::from_raw(Some("https://api.test/"));
    assert_eq!(cfg.endpoint("/api/courses/7"), "https://api.test/api/courses/7");
}

#[test]
fn default_matches_unset_build_env() {
    assert_eq!(ClientConfig::default().api_base_url, "http://localhost:5000");
}
