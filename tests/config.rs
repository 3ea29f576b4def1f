//! Server configuration from environment-style lookups.

use std::collections::HashMap;
use swiss_tournament::ServerConfig;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[]));
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
}

#[test]
fn reads_host_and_port() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "9000")]));
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
}

#[test]
fn invalid_port_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")]));
    assert_eq!(config.port, 8080);
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "70000")]));
    assert_eq!(config.port, 8080);
}
