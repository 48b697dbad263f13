use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_veracity_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("VERACITY_PORT");
        env::remove_var("VERACITY_BIND_ADDR");
        env::remove_var("VERACITY_REGISTRY_PATH");
        env::remove_var("VERACITY_ARTICLES_PATH");
        env::remove_var("VERACITY_FETCH_TIMEOUT_SECS");
        env::remove_var("VERACITY_PAGE_CACHE_CAPACITY");
        env::remove_var("VERACITY_HISTORY_CAPACITY");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.registry_path.is_none());
    assert!(config.articles_path.is_none());
    assert_eq!(config.fetch_timeout_secs, 10);
    assert_eq!(config.page_cache_capacity, 1_000);
    assert_eq!(config.history_capacity, 500);
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_veracity_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_veracity_env();

    with_env_vars(&[("VERACITY_PORT", "3000")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.port, 3000);
    });
}

#[test]
#[serial]
fn test_from_env_invalid_port() {
    clear_veracity_env();

    with_env_vars(&[("VERACITY_PORT", "not-a-port")], || {
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::PortParseError { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_port_zero_rejected() {
    clear_veracity_env();

    with_env_vars(&[("VERACITY_PORT", "0")], || {
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_bind_addr() {
    clear_veracity_env();

    with_env_vars(&[("VERACITY_BIND_ADDR", "not-an-addr")], || {
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
    });
}

#[test]
#[serial]
fn test_from_env_paths_and_capacities() {
    clear_veracity_env();

    with_env_vars(
        &[
            ("VERACITY_REGISTRY_PATH", "/tmp/registry.json"),
            ("VERACITY_ARTICLES_PATH", "/tmp/articles.json"),
            ("VERACITY_FETCH_TIMEOUT_SECS", "5"),
            ("VERACITY_HISTORY_CAPACITY", "42"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.registry_path, Some(PathBuf::from("/tmp/registry.json")));
            assert_eq!(config.articles_path, Some(PathBuf::from("/tmp/articles.json")));
            assert_eq!(config.fetch_timeout_secs, 5);
            assert_eq!(config.history_capacity, 42);
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_path_treated_as_unset() {
    clear_veracity_env();

    with_env_vars(&[("VERACITY_REGISTRY_PATH", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.registry_path.is_none());
    });
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = Config {
        fetch_timeout_secs: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTimeout { .. })
    ));
}

#[test]
fn test_validate_missing_registry_path() {
    let config = Config {
        registry_path: Some(PathBuf::from("/definitely/not/here.json")),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_registry_path_must_be_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        registry_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotAFile { .. })
    ));
}

#[test]
fn test_validate_default_config_ok() {
    assert!(Config::default().validate().is_ok());
}
