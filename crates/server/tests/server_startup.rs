use std::io::Write;
use std::net::TcpListener;
use std::time::Duration;

use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::time::{sleep, timeout};

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Create a minimal valid config
fn minimal_config(port: u16) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"
port = {}

[engine]
draw_mode = "legacy"

[sync]
backend = "memory"
"#,
        port
    )
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Spawn the server and return a handle
async fn spawn_server(config_path: &std::path::Path) -> tokio::process::Child {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_courrier"))
        .env("COURRIER_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/api/v1/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

async fn run_to_exit(config_path: &std::path::Path) -> std::process::Output {
    timeout(
        Duration::from_secs(5),
        tokio::process::Command::new(env!("CARGO_BIN_EXE_courrier"))
            .env("COURRIER_CONFIG", config_path)
            .env("RUST_LOG", "error")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command")
}

#[tokio::test]
async fn test_health_endpoint() {
    let port = get_available_port();
    let temp_file = write_config(&minimal_config(port));

    let mut server = spawn_server(temp_file.path()).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_config_endpoint_returns_sanitized() {
    let port = get_available_port();
    let temp_file = write_config(&minimal_config(port));

    let mut server = spawn_server(temp_file.path()).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/config", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["server"]["port"], port);
    assert_eq!(json["engine"]["draw_mode"], "legacy");
    assert_eq!(json["sync"]["backend"], "memory");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_history_over_http() {
    let port = get_available_port();
    let temp_file = write_config(&minimal_config(port));

    let mut server = spawn_server(temp_file.path()).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/history/TK-2026-0001", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["address"], "28 Rue du Faubourg");
    assert_eq!(json["status"], "pending");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_missing_config_file_exits_with_error() {
    let result = run_to_exit(std::path::Path::new("/nonexistent/config.toml")).await;
    assert!(!result.status.success());
}

#[tokio::test]
async fn test_invalid_port_exits_with_error() {
    let temp_file = write_config(
        r#"
[server]
port = 0

[sync]
backend = "memory"
"#,
    );

    let result = run_to_exit(temp_file.path()).await;
    assert!(!result.status.success());
}

#[tokio::test]
async fn test_unknown_draw_mode_exits_with_error() {
    let temp_file = write_config(
        r#"
[engine]
draw_mode = "random"
"#,
    );

    let result = run_to_exit(temp_file.path()).await;
    assert!(!result.status.success());
}
