// Common utilities for unit tests

use json_action_client::prelude::*;

/// Creates a test config pointing at a mock server
pub fn create_test_config(server_url: &str) -> Config {
    setup_logger();
    Config::new(format!("{server_url}/api"))
}

/// Creates a client for a mock server
pub fn create_test_client(server_url: &str) -> ActionClient {
    ActionClient::new(create_test_config(server_url)).expect("client construction should succeed")
}
