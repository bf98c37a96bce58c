use std::collections::HashMap;

use fce_api::config::{LogFormat, ServiceConfig};

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ServiceConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServiceConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn reads_overrides() {
    let config = config_from(&[
        ("FCE_BIND_ADDR", "127.0.0.1:3000"),
        ("FCE_LOG_FORMAT", "pretty"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 3000);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn rejects_invalid_values() {
    let err = config_from(&[("FCE_BIND_ADDR", "not-an-addr")]).unwrap_err();
    assert!(err.to_string().contains("FCE_BIND_ADDR"));

    let err = config_from(&[("FCE_LOG_FORMAT", "xml")]).unwrap_err();
    assert!(err.to_string().contains("FCE_LOG_FORMAT"));
}
