// tests/config_tests.rs - AdminConfig from environment-style variables

use std::collections::HashMap;
use std::time::Duration;

use inventory_admin::config::*;
use inventory_admin::web_app::api::HttpProductApi;

fn from_vars(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    AdminConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_unset_variables_keep_defaults() {
    assert_eq!(from_vars(&[]).unwrap(), AdminConfig::default());
}

#[test]
fn test_all_variables_are_read() {
    let config = from_vars(&[
        (API_URL_VAR, "https://inventory.example.com/"),
        (PER_PAGE_VAR, "25"),
        (TIMEOUT_VAR, "5"),
    ])
    .unwrap();

    assert_eq!(config.api_base_url, "https://inventory.example.com");
    assert_eq!(config.items_per_page, 25);
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let err = from_vars(&[(PER_PAGE_VAR, "0")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber {
            var: PER_PAGE_VAR,
            value: "0".to_string()
        }
    );
    assert!(err.to_string().contains("INVENTORY_PER_PAGE"));
}

#[test]
fn test_non_numeric_timeout_is_rejected() {
    assert!(matches!(
        from_vars(&[(TIMEOUT_VAR, "soon")]),
        Err(ConfigError::InvalidNumber { var: TIMEOUT_VAR, .. })
    ));
}

#[test]
fn test_blank_url_is_rejected() {
    assert_eq!(
        from_vars(&[(API_URL_VAR, "   ")]).unwrap_err(),
        ConfigError::Empty(API_URL_VAR)
    );
}

#[test]
fn test_client_built_from_config_uses_base_url() {
    let config = from_vars(&[(API_URL_VAR, "http://10.0.0.5:8080")]).unwrap();
    let api = HttpProductApi::from_config(&config).unwrap();
    assert_eq!(api.base_url(), "http://10.0.0.5:8080");
}
