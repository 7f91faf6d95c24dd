use super::*;

#[test]
fn absolute_base_url_is_used_as_is() {
    let config = ClientConfig::builder()
        .base_url("https://tracker.example.com/api")
        .build()
        .unwrap();
    assert_eq!(config.base_url().as_str(), "https://tracker.example.com/api");
}

#[test]
fn relative_base_url_resolves_against_origin() {
    let config = ClientConfig::builder()
        .base_url("/api")
        .origin("http://localhost:3000")
        .build()
        .unwrap();
    assert_eq!(config.base_url().as_str(), "http://localhost:3000/api");
}

#[test]
fn relative_base_url_without_origin_is_rejected() {
    let result = ClientConfig::builder().base_url("/api").build();
    assert_eq!(
        result.unwrap_err(),
        ConfigError::RelativeBaseUrl("/api".to_owned())
    );
}

#[test]
fn missing_base_url_is_rejected() {
    let result = ClientConfig::builder().build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingBaseUrl);
}

#[test]
fn endpoint_joins_without_doubling_slashes() {
    let config = ClientConfig::builder()
        .base_url("https://tracker.example.com/api/")
        .build()
        .unwrap();
    let url = config.endpoint("/routines/").unwrap();
    assert_eq!(url.as_str(), "https://tracker.example.com/api/routines/");
}

#[test]
fn defaults_carry_json_content_type_and_cors_headers() {
    let config = ClientConfig::builder()
        .base_url("https://tracker.example.com")
        .build()
        .unwrap();
    let headers = config.default_headers();
    assert_eq!(headers[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, PUT, POST, DELETE, OPTIONS"
    );
    assert_eq!(config.credentials(), CredentialMode::SameOrigin);
}

#[test]
fn builder_header_overrides_default() {
    let config = ClientConfig::builder()
        .base_url("https://tracker.example.com")
        .header("content-type", "text/plain")
        .build()
        .unwrap();
    assert_eq!(config.default_headers()[header::CONTENT_TYPE], "text/plain");
}

#[test]
fn invalid_header_name_is_rejected() {
    let result = ClientConfig::builder()
        .base_url("https://tracker.example.com")
        .header("bad header", "x")
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
}
