use json_action_client::config::Config;
use json_action_client::version;
use std::path::PathBuf;

#[test]
fn new_config_uses_defaults() {
    let config = Config::new("http://127.0.0.1:8080/api");
    assert_eq!(config.endpoint, "http://127.0.0.1:8080/api");
    assert_eq!(config.timeout, 30);
    assert!(config.ca_cert.is_none());
    assert!(config.client_cert.is_none());
}

#[test]
fn builder_setters_apply() {
    let config = Config::new("https://127.0.0.1:8444/api")
        .with_ca_cert("/certs/ca.crt")
        .with_client_cert("/certs/client.pem")
        .with_timeout(5);

    assert_eq!(config.ca_cert, Some(PathBuf::from("/certs/ca.crt")));
    assert_eq!(config.client_cert, Some(PathBuf::from("/certs/client.pem")));
    assert_eq!(config.timeout, 5);
}

#[test]
fn version_is_reported() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}
