mod common;

use std::fs;
use torrent_artifacts::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config = common::create_test_config();
    assert!(config.tracker.enabled, "Tracker should be enabled by default");
    assert_eq!(config.tracker.preferred_port, 6969);
    assert_eq!(config.tracker.server_root_url, "http://localhost:8111/");
    assert_eq!(config.agent.client_identifier, "Artifact Torrent Agent");
    assert!(Configuration::validate(&config).is_ok());
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"

[agent]
server_url = "http://buildserver:8111/"
rpc_timeout = 5

[tracker]
preferred_port = 7000
peers_returned = 20
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.agent.server_url(), Some("http://buildserver:8111/"));
    assert_eq!(config.agent.rpc_timeout, 5);
    assert_eq!(config.tracker.preferred_port, 7000);
    assert_eq!(config.tracker.peers_returned, 20);
    assert_eq!(config.tracker.announce_interval, 60);
}

#[test]
fn test_config_missing_file_without_create() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
    assert!(!config_path.exists(), "Config file should not be created");
}

#[test]
fn test_config_create_writes_defaults() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    assert!(Configuration::load_from_file(path, true).is_err(), "Creating a config should ask for a restart");
    assert!(config_path.exists(), "Config file should exist");

    let config = Configuration::load_from_file(path, false).unwrap();
    assert_eq!(config, Configuration::init());
}

#[test]
fn test_config_invalid_values_rejected() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = \"info\"\n\n[tracker]\nthreads = 0\n").unwrap();

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
}

#[test]
fn test_config_corrupt_file() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "this is = not [ toml").unwrap();

    assert!(Configuration::load_file(config_path.to_str().unwrap()).is_err());
}
