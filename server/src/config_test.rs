use std::collections::HashMap;

use super::*;

fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_apply_when_only_key_is_set() {
    let config = load(&[("CATALOG_API_KEY", "secret")]).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.catalog.api_key, "secret");
    assert_eq!(config.catalog.region_code, "IN");
    assert_eq!(config.catalog.base_url, "https://www.googleapis.com/youtube/v3");
}

#[test]
fn missing_api_key_is_an_error() {
    assert_eq!(load(&[]), Err(ConfigError::Missing("CATALOG_API_KEY")));
    assert_eq!(load(&[("CATALOG_API_KEY", "   ")]), Err(ConfigError::Missing("CATALOG_API_KEY")));
}

#[test]
fn explicit_values_override_defaults() {
    let config = load(&[
        ("PORT", "8080"),
        ("CATALOG_API_KEY", "k"),
        ("CATALOG_REGION_CODE", "us"),
        ("CATALOG_BASE_URL", "http://localhost:9000/v3/"),
    ])
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.catalog.region_code, "US");
    assert_eq!(config.catalog.base_url, "http://localhost:9000/v3");
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        load(&[("PORT", "eighty"), ("CATALOG_API_KEY", "k")]),
        Err(ConfigError::Invalid { name: "PORT", value: "eighty".into() })
    );
}

#[test]
fn invalid_region_and_base_url_are_rejected() {
    assert!(matches!(
        load(&[("CATALOG_API_KEY", "k"), ("CATALOG_REGION_CODE", "IND")]),
        Err(ConfigError::Invalid { name: "CATALOG_REGION_CODE", .. })
    ));
    assert!(matches!(
        load(&[("CATALOG_API_KEY", "k"), ("CATALOG_BASE_URL", "ftp://x")]),
        Err(ConfigError::Invalid { name: "CATALOG_BASE_URL", .. })
    ));
}

#[test]
fn error_messages_name_the_variable() {
    assert_eq!(ConfigError::Missing("CATALOG_API_KEY").to_string(), "CATALOG_API_KEY is required");
}
