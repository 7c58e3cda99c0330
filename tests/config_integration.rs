use buddy_chat::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("BUDDY_SERVER__PORT");
        env::remove_var("BUDDY_DOWNSTREAM__CHAT_URL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("DOWNSTREAM_CHAT_URL");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["buddy-chat"]).expect("Failed to load config");
    assert_eq!(config.server.port, 3001); // Default, matching the original relay
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.downstream.chat_url, "http://localhost:5000/api/chat");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("BUDDY_SERVER__PORT", "9090");
        env::set_var(
            "BUDDY_DOWNSTREAM__CHAT_URL",
            "http://10.0.0.5:5000/api/chat",
        );
    }

    let config = AppConfig::load_from_args(["buddy-chat"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.downstream.chat_url, "http://10.0.0.5:5000/api/chat");

    clear_env_vars();
}

#[test]
#[serial]
fn test_port_env_var() {
    clear_env_vars();
    unsafe {
        env::set_var("PORT", "4444");
    }

    let config = AppConfig::load_from_args(["buddy-chat"]).expect("Failed to load config");
    assert_eq!(config.server.port, 4444);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flag_override() {
    clear_env_vars();

    let config = AppConfig::load_from_args([
        "buddy-chat",
        "--port",
        "8080",
        "--downstream-url",
        "http://127.0.0.1:7000/api/chat",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.downstream.chat_url, "http://127.0.0.1:7000/api/chat");
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 7070
downstream:
  chat_url: "http://filehost:5000/api/chat"
    "#;

    let file_path = "test_config.yaml";
    fs::write(file_path, config_content).expect("Failed to write temp config");

    let config = AppConfig::load_from_args(["buddy-chat", "--config", file_path])
        .expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.downstream.chat_url, "http://filehost:5000/api/chat");

    fs::remove_file(file_path).unwrap();
    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("BUDDY_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["buddy-chat", "--port", "8080"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 8080);

    clear_env_vars();
}
