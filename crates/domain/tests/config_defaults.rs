use mnemo_domain::config::{ClientConfig, DEFAULT_TIMEOUT_MS};

#[test]
fn new_uses_default_timeout() {
    let config = ClientConfig::new("https://memory.example.com", "key", "acme");
    assert_eq!(config.timeout_ms, 30_000);
    assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
}

#[test]
fn timeout_override_applies() {
    let config = ClientConfig::new("https://x", "key", "acme").with_timeout_ms(10);
    assert_eq!(config.timeout_ms, 10);
}

#[test]
fn toml_without_timeout_gets_default() {
    let toml_str = r#"
endpoint = "https://memory.example.com/"
api_key = "sk-test"
tenant = "acme"
"#;
    let config: ClientConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.endpoint, "https://memory.example.com/");
    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.tenant, "acme");
    assert_eq!(config.timeout_ms, 30_000);
}

#[test]
fn toml_explicit_timeout_parses() {
    let toml_str = r#"
endpoint = "https://memory.example.com"
api_key = "sk-test"
tenant = "acme"
timeout_ms = 2500
"#;
    let config: ClientConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.timeout_ms, 2500);
}

#[test]
fn toml_missing_tenant_is_rejected() {
    let toml_str = r#"
endpoint = "https://memory.example.com"
api_key = "sk-test"
"#;
    assert!(toml::from_str::<ClientConfig>(toml_str).is_err());
}

#[test]
fn base_url_strips_single_trailing_slash() {
    let with = ClientConfig::new("https://x/", "k", "t");
    let without = ClientConfig::new("https://x", "k", "t");
    assert_eq!(with.base_url(), "https://x");
    assert_eq!(without.base_url(), "https://x");
}

#[test]
fn default_points_at_local_service() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint, "http://localhost:8080");
    assert_eq!(config.tenant, "default");
    assert!(config.api_key.is_empty());
    assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
}
