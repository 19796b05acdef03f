//! CLI interface tests
//!
//! Runs the bookmarkletize binary against fixture source directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

mod common;
use common::assertions::assert_well_formed_bookmarklet;
use common::fixtures;

/// Helper to get the bookmarkletize binary command
fn get_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bookmarkletize"));
    cmd.env("NO_EMOJI", "1");
    cmd
}

/// The single line of stdout that holds the bookmarklet
fn bookmarklet_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find(|l| l.starts_with("javascript:"))
        .expect("stdout should contain a bookmarklet line")
        .to_string()
}

#[test]
fn test_cli_help_flag_displays_usage_information() {
    get_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookmarklets"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    get_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookmarkletize"));
}

#[test]
fn test_build_gemini_prints_copy_banner_and_bookmarklet() {
    let dir = fixtures::create_source_dir().expect("Failed to create fixture");

    let output = get_bin()
        .args(["build", "gemini", "--dir"])
        .arg(dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- COPY THIS GEMINI BOOKMARKLET BELOW ---"));

    let bm = bookmarklet_line(&output.stdout);
    assert_well_formed_bookmarklet(&bm);
    assert!(bm.contains("scrapeGemini"));
    assert!(bm.contains("downloadGeminiFile"));
    // Standalone variant keeps its own entry call
    assert!(bm.ends_with("downloadGemini(); })();"));
    assert!(!bm.contains("one per message"));
    assert!(!bm.contains("Collects every turn"));
}

#[test]
fn test_build_aim_preserves_urls() {
    let dir = fixtures::create_source_dir().expect("Failed to create fixture");

    let output = get_bin()
        .args(["build", "aim", "--dir"])
        .arg(dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let bm = bookmarklet_line(&output.stdout);
    assert_well_formed_bookmarklet(&bm);
    assert!(bm.contains("scrapeAim"));
    assert!(bm.contains("\"https://www.google.com/search?udm=50\""));
}

#[test]
fn test_build_chat_composes_all_three_sources() {
    let dir = fixtures::create_source_dir().expect("Failed to create fixture");

    let output = get_bin()
        .args(["build", "chat", "--dir"])
        .arg(dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let bm = bookmarklet_line(&output.stdout);
    assert_well_formed_bookmarklet(&bm);

    // Scrapers come first, driver last
    let gemini_at = bm.find("function scrapeGemini").unwrap();
    let aim_at = bm.find("function scrapeAim").unwrap();
    let driver_at = bm.find("location.href").unwrap();
    assert!(gemini_at < aim_at && aim_at < driver_at);

    // Only the driver's calls survive
    assert_eq!(bm.matches("downloadGemini();").count(), 1);
    assert_eq!(bm.matches("downloadAim();").count(), 1);
    assert!(!bm.contains("Google AI Mode"));
}

#[test]
fn test_build_json_output_is_parseable() {
    let dir = fixtures::create_source_dir().expect("Failed to create fixture");

    let output = get_bin()
        .args(["build", "chat", "--json", "--dir"])
        .arg(dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output should be valid JSON");

    assert_eq!(json["variant"], "chat");
    assert_eq!(
        json["sources"],
        serde_json::json!(["gemini.js", "aim.js", "chat.js"])
    );
    let bm = json["bookmarklet"].as_str().unwrap();
    assert_well_formed_bookmarklet(bm);
    assert_eq!(json["bookmarklet_bytes"].as_u64().unwrap(), bm.len() as u64);
    assert!(json["source_bytes"].as_u64().unwrap() > json["bookmarklet_bytes"].as_u64().unwrap());
}

#[test]
fn test_build_all_json_lists_every_variant() {
    let dir = fixtures::create_source_dir().expect("Failed to create fixture");

    let output = get_bin()
        .args(["build", "--all", "--json", "--dir"])
        .arg(dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["variant"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["gemini", "aim", "chat"]);
}

#[test]
fn test_missing_source_reports_error_without_bookmarklet() {
    let dir = fixtures::create_source_dir().expect("Failed to create fixture");
    fs::remove_file(dir.path().join("aim.js")).unwrap();

    get_bin()
        .args(["build", "chat", "--dir"])
        .arg(dir.path())
        .assert()
        .code(66)
        .stdout(predicate::str::contains("javascript:").not())
        .stderr(predicate::str::contains("aim.js"));
}

#[test]
fn test_unknown_variant_is_usage_error() {
    let dir = fixtures::create_source_dir().expect("Failed to create fixture");

    get_bin()
        .args(["build", "claude", "--dir"])
        .arg(dir.path())
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Available variants: gemini, aim, chat"));
}

#[test]
fn test_blank_source_fails_unless_allowed() {
    let dir = fixtures::create_source_dir_with("gemini.js", "\n   \n").unwrap();

    get_bin()
        .args(["build", "gemini", "--dir"])
        .arg(dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("No code provided"));

    get_bin()
        .args(["build", "gemini", "--allow-empty", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript:(function(){  })();"));
}

#[test]
fn test_custom_variant_from_config_file() {
    let dir = fixtures::create_source_dir_with("page.js", "// title\nalert(document.title);\nrun();\n")
        .unwrap();
    fs::write(dir.path().join("driver.js"), "console.log('done');").unwrap();
    fs::write(
        dir.path().join(".bookmarkletize.toml"),
        r#"
[[variant]]
name = "page"

[[variant.source]]
file = "page.js"
entry-call = "run();"

[[variant.source]]
file = "driver.js"
"#,
    )
    .unwrap();

    let output = get_bin()
        .args(["build", "page", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        bookmarklet_line(&output.stdout),
        "javascript:(function(){ alert(document.title); console.log('done'); })();"
    );
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let dir = fixtures::create_source_dir().unwrap();
    fs::write(
        dir.path().join(".bookmarkletize.toml"),
        "[[variant]]\nname = \"broken\"\n",
    )
    .unwrap();

    get_bin()
        .args(["list", "--dir"])
        .arg(dir.path())
        .assert()
        .code(78)
        .stderr(predicate::str::contains("no sources"));
}

#[test]
fn test_list_shows_builtin_variants() {
    let dir = fixtures::create_source_dir().unwrap();

    get_bin()
        .args(["list", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini"))
        .stdout(predicate::str::contains("aim"))
        .stdout(predicate::str::contains("downloadGemini();"));
}

#[test]
fn test_init_then_build_uses_written_config() {
    let dir = fixtures::create_source_dir().unwrap();

    get_bin()
        .args(["init", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join(".bookmarkletize.toml").exists());

    get_bin()
        .args(["build", "chat", "--dir"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn test_completions_bash() {
    get_bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bookmarkletize"));
}

#[test]
fn test_shipped_sources_build_for_every_variant() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("bookmarklets");

    let output = get_bin()
        .args(["build", "--all", "--json", "--dir"])
        .arg(&dir)
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for report in json.as_array().unwrap() {
        let bm = report["bookmarklet"].as_str().unwrap();
        assert_well_formed_bookmarklet(bm);
    }
    let chat = json[2]["bookmarklet"].as_str().unwrap();
    assert!(chat.contains("scrapeGemini"));
    assert!(chat.contains("scrapeAim"));
    assert_eq!(chat.matches("downloadGemini();").count(), 1);
    assert_eq!(chat.matches("downloadAim();").count(), 1);
}
