//! CLI integration tests for the kit-mcp binary.
//!
//! These tests verify:
//! - Help text and subcommands
//! - Startup failure when no API key is available
//! - The tool catalogue and one-off tool calls
//! - A short stdio session
//!
//! No test talks to the real Kit API; calls that need a network target
//! point at a closed local port.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for the kit-mcp binary, isolated from the user's environment.
fn kit_mcp(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kit-mcp").unwrap();
    cmd.env("KIT_MCP_CONFIG_DIR", config_dir.path())
        .env_remove("KIT_API_KEY")
        .env_remove("KIT_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("tools"))
        .stdout(predicate::str::contains("call"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_version_displays() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kit-mcp"));
}

#[test]
fn test_call_requires_tool_name() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .arg("call")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<TOOL>"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Credential Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_serve_without_api_key_fails() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .arg("serve")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("KIT_API_KEY"));
}

#[test]
fn test_default_command_is_serve() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key not found"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .args(["--config", "/nonexistent/kit-mcp.toml", "tools"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Tools and Call Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tools_without_api_key() {
    let dir = TempDir::new().unwrap();
    let output = kit_mcp(&dir).arg("tools").output().unwrap();
    assert!(output.status.success());

    let tools: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tools = tools.as_array().unwrap();
    assert_eq!(tools.len(), 29);
    assert_eq!(tools[0]["name"], "kit_get_account");
    assert!(tools[0]["inputSchema"].is_object());
}

#[test]
fn test_tools_names() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .args(["tools", "--names"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kit_create_webhook\n"));
}

#[test]
fn test_call_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .env("KIT_API_KEY", "test-key")
        .args(["call", "kit_list_tags", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON arguments"));
}

#[test]
fn test_call_unknown_tool_prints_error_envelope() {
    let dir = TempDir::new().unwrap();
    kit_mcp(&dir)
        .env("KIT_API_KEY", "test-key")
        .args(["--base-url", "http://127.0.0.1:9", "call", "kit_nope", "{}"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"isError\": true"))
        .stdout(predicate::str::contains("Error: unknown tool: kit_nope"));
}

#[test]
fn test_api_key_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[api]\napi_key = \"from-file\"\nbase_url = \"http://127.0.0.1:9\"\n",
    )
    .unwrap();

    // Validation fails before any request, so the closed port is never hit
    kit_mcp(&dir)
        .args(["call", "kit_create_subscriber", r#"{"email_address":"nope"}"#])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid arguments"))
        .stderr(predicate::str::contains("plaintext"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stdio Session Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_serve_answers_until_eof() {
    let dir = TempDir::new().unwrap();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-06-18","capabilities":{},"clientInfo":{"name":"cli-test","version":"0"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
    );

    let output = kit_mcp(&dir)
        .env("KIT_API_KEY", "test-key")
        .arg("serve")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let responses: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);

    let init = responses.iter().find(|r| r["id"] == 1).unwrap();
    assert_eq!(init["result"]["serverInfo"]["name"], "mcp-kit");

    let list = responses.iter().find(|r| r["id"] == 2).unwrap();
    assert_eq!(list["result"]["tools"].as_array().unwrap().len(), 29);
}
