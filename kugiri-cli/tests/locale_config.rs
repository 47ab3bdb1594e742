//! Integration tests for external locale configuration

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kugiri() -> Command {
    Command::cargo_bin("kugiri").unwrap()
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("pt.toml");
    let output = output_path.to_str().unwrap();

    kugiri()
        .args(["generate-config", "--locale-code", "pt-br", "--output", output])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("code = \"pt-BR\""));
    assert!(content.contains("[metadata]"));
    assert!(content.contains("[sentence]"));

    kugiri()
        .args(["validate", "--locale-config", output])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Locale code: pt-BR"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid.toml");
    fs::write(&config_path, "[metadata]\ncode = \"en_US\"\nname = \"Broken\"\n").unwrap();

    kugiri()
        .args(["validate", "--locale-config", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_segment_with_external_abbreviations() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pt.toml");
    fs::write(
        &config_path,
        r#"
[metadata]
code = "pt-BR"
name = "Português (Brasil)"

[sentence]
abbreviations = ["Sr", "Sra"]
"#,
    )
    .unwrap();

    kugiri()
        .args(["segment", "-i", "-", "--locale-config"])
        .arg(&config_path)
        .write_stdin("O Sr. Silva chegou. Bom dia.")
        .assert()
        .success()
        .stdout("O Sr. Silva chegou.\nBom dia.\n");
}

#[test]
fn test_segment_with_external_dictionary() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ja-custom.toml");
    fs::write(
        &config_path,
        r#"
[metadata]
code = "ja-JP"
name = "日本語 (custom)"

[word]
dictionary = ["形態素", "解析"]
"#,
    )
    .unwrap();

    kugiri()
        .args(["segment", "-i", "-", "-g", "word", "--locale-config"])
        .arg(&config_path)
        .write_stdin("形態素解析")
        .assert()
        .success()
        .stdout("形態素\n解析\n");
}

#[test]
fn test_missing_locale_config() {
    kugiri()
        .args(["segment", "-i", "-", "--locale-config", "/nonexistent/locale.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load locale config"));
}
