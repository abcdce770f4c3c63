use std::sync::Mutex;

use super::*;

/// Serializes tests that mutate process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("ITEMS_ENDPOINT");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.items_endpoint, "http://localhost:8080/items");
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8081");
        std::env::set_var("ITEMS_ENDPOINT", " http://media.lan:8080/items ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
    assert_eq!(cfg.items_endpoint, "http://media.lan:8080/items");

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_host_accepts_ipv6() {
    assert_eq!(parse_host(Some("::1")).unwrap().to_string(), "::1");
}

#[test]
fn parse_host_rejects_hostname() {
    assert!(matches!(parse_host(Some("localhost")), Err(ConfigError::Invalid { var: "HOST", .. })));
}

#[test]
fn parse_items_endpoint_rejects_blank() {
    assert_eq!(parse_items_endpoint(Some("  ")), Err(ConfigError::Blank { var: "ITEMS_ENDPOINT" }));
}

#[test]
fn parse_items_endpoint_defaults_when_unset() {
    assert_eq!(parse_items_endpoint(None).unwrap(), DEFAULT_ITEMS_ENDPOINT);
}
