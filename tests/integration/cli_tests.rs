//! Integration tests for the CLI binary.
//!
//! Verifies that the `abyss` binary exists, responds to basic flags, and
//! that `keygen` emits a usable keypair without touching the network.
//!
//! This test is registered as a [[test]] in the abyss-auth-cli crate so
//! that CARGO_BIN_EXE_abyss is available.

use std::process::Command;

/// Get a Command pointing to the `abyss` binary.
fn abyss_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_abyss"))
}

#[test]
fn cli_responds_to_help() {
    let output = abyss_binary()
        .arg("--help")
        .output()
        .expect("failed to execute abyss --help");

    assert!(
        output.status.success(),
        "abyss --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("abyss") || stdout.contains("Usage"),
        "abyss --help output should contain usage information, got: {stdout}"
    );
}

#[test]
fn cli_responds_to_version() {
    let output = abyss_binary()
        .arg("--version")
        .output()
        .expect("failed to execute abyss --version");

    assert!(output.status.success());
}

#[test]
fn cli_lists_all_subcommands_in_help() {
    let output = abyss_binary()
        .arg("--help")
        .output()
        .expect("failed to execute abyss --help");
    let stdout = String::from_utf8_lossy(&output.stdout);

    for subcommand in ["open", "valid", "destroy", "create", "keygen"] {
        assert!(
            stdout.contains(subcommand),
            "help should mention `{subcommand}`, got: {stdout}"
        );
    }
}

#[test]
fn cli_keygen_prints_keypair() {
    let output = abyss_binary()
        .arg("keygen")
        .output()
        .expect("failed to execute abyss keygen");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Labelled lines, each followed by a non-empty base64 payload
    let lines: Vec<&str> = stdout.lines().collect();
    let private = lines
        .iter()
        .position(|l| *l == "PrivateKeyBase64:")
        .map(|i| lines[i + 1])
        .expect("private key line");
    let public = lines
        .iter()
        .position(|l| *l == "PublicKeyBase64:")
        .map(|i| lines[i + 1])
        .expect("public key line");
    assert!(!private.is_empty());
    assert!(!public.is_empty());
    assert_ne!(private, public);
}

#[test]
fn cli_rejects_missing_arguments() {
    let output = abyss_binary()
        .arg("open")
        .output()
        .expect("failed to execute abyss open");

    assert!(!output.status.success());
}
