use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV_LOCK` so no other test mutates the environment.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
fn defaults_when_unset() {
    assert_eq!(ServerConfig::from_values(None, None), Ok(ServerConfig::default()));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
}

#[test]
fn parses_port_and_address() {
    let cfg = ServerConfig::from_values(Some("8080"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.socket_addr(), "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn accepts_ipv6_bind_address() {
    let cfg = ServerConfig::from_values(None, Some("::1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn rejects_non_numeric_port() {
    assert_eq!(
        ServerConfig::from_values(Some("http"), None),
        Err(ConfigError::InvalidPort { value: "http".into() })
    );
}

#[test]
fn rejects_out_of_range_port() {
    assert!(matches!(ServerConfig::from_values(Some("70000"), None), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn rejects_hostname_bind_address() {
    assert_eq!(
        ServerConfig::from_values(None, Some("localhost")),
        Err(ConfigError::InvalidBindAddr { value: "localhost".into() })
    );
}

#[test]
fn from_env_reads_variables() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr(), "127.0.0.1:4100".parse().unwrap());

    unsafe { clear_server_env() };
}

#[test]
fn from_env_defaults_without_variables() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe { clear_server_env() };

    assert_eq!(ServerConfig::from_env(), Ok(ServerConfig::default()));
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "x".into() };
    assert_eq!(err.to_string(), "invalid PORT \"x\"");
}
