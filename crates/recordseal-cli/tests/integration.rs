//! Integration tests for CLI commands.

use std::fs;
use std::process::Command;

use recordseal_record::{parse, transform_form};
use tempfile::TempDir;

const ACCOUNT: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

const SAMPLE_RECORD: &str = r#"{
    "name": "Alice Example",
    "bio": "Distributed systems engineer",
    "email": "alice@example.com",
    "location": {"country": "Portugal", "state": "Lisbon"},
    "github": "alice",
    "expertise": ["rust"],
    "customFields": [{"key": "ens", "value": "alice.eth"}]
}"#;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "recordseal", "--"])
        .args(args)
        .output()
        .expect("failed to run CLI");

    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn write_sample(dir: &TempDir) -> String {
    let path = dir.path().join("record.json");
    fs::write(&path, SAMPLE_RECORD).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn fingerprint_outputs_fixed_format_hex() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let (ok, stdout, stderr) = run_cli(&["fingerprint", &path]);
    assert!(ok, "fingerprint failed: {}", stderr);

    let fingerprint = stdout.trim();
    assert!(fingerprint.starts_with("0x"));
    assert_eq!(fingerprint.len(), 66);
}

#[test]
fn fingerprint_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let (_, first, _) = run_cli(&["fingerprint", &path]);
    let (_, second, _) = run_cli(&["fingerprint", &path]);
    assert_eq!(first, second);
}

#[test]
fn fingerprint_matches_the_library_computation() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let (ok, stdout, _) = run_cli(&["fingerprint", &path]);
    assert!(ok);

    let parsed = parse(SAMPLE_RECORD).unwrap();
    let expected = transform_form(&parsed.form).unwrap().fingerprint();
    assert_eq!(stdout.trim(), expected.as_str());
}

#[test]
fn raw_fingerprint_hashes_file_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("document.bin");
    fs::write(&path, b"sealed content").unwrap();

    let (ok, stdout, stderr) = run_cli(&["fingerprint", "--raw", &path.to_string_lossy()]);
    assert!(ok, "raw fingerprint failed: {}", stderr);

    let expected = recordseal_canonical::fingerprint_bytes(b"sealed content");
    assert_eq!(stdout.trim(), expected.as_str());
}

#[test]
fn canonicalize_shows_the_fingerprint_pre_image() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let (ok, stdout, stderr) = run_cli(&["canonicalize", &path]);
    assert!(ok, "canonicalize failed: {}", stderr);

    let canonical = stdout.trim();
    assert!(canonical.starts_with('{'));
    assert!(canonical.contains(r#""git":alice"#));
    assert!(canonical.contains(r#""location":Portugal"#));
}

#[test]
fn validate_accepts_a_well_formed_record() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let (ok, stdout, _) = run_cli(&["validate", &path]);
    assert!(ok);
    assert_eq!(stdout.trim(), "valid");
}

#[test]
fn validate_distinguishes_structural_and_schema_errors() {
    let dir = TempDir::new().unwrap();

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{not json").unwrap();
    let (ok, _, stderr) = run_cli(&["validate", &broken.to_string_lossy()]);
    assert!(!ok);
    assert!(stderr.contains("structural error"));

    let short_name = dir.path().join("short.json");
    fs::write(&short_name, r#"{"name":"ab"}"#).unwrap();
    let (ok, _, stderr) = run_cli(&["validate", &short_name.to_string_lossy()]);
    assert!(!ok);
    assert!(stderr.contains("schema error"));
}

#[test]
fn export_round_trips_and_omits_empty_fields() {
    let dir = TempDir::new().unwrap();
    let minimal = dir.path().join("minimal.json");
    fs::write(
        &minimal,
        r#"{"name":"Alice Example","bio":"","telegram":""}"#,
    )
    .unwrap();

    let (ok, stdout, stderr) = run_cli(&["export", &minimal.to_string_lossy()]);
    assert!(ok, "export failed: {}", stderr);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["name"].as_str(), Some("Alice Example"));
}

#[test]
fn verify_finds_a_registered_fingerprint() {
    let dir = TempDir::new().unwrap();
    let record_path = write_sample(&dir);

    let (ok, stdout, _) = run_cli(&["fingerprint", &record_path]);
    assert!(ok);
    let fingerprint = stdout.trim().to_string();

    let snapshot = serde_json::json!([
        {"account": ACCOUNT, "project_id": 886, "index": 0, "fingerprint": "0x".to_string() + &"a".repeat(64)},
        {"account": ACCOUNT, "project_id": 886, "index": 4, "fingerprint": fingerprint}
    ]);
    let ledger_path = dir.path().join("ledger.json");
    fs::write(&ledger_path, snapshot.to_string()).unwrap();

    let (ok, stdout, stderr) = run_cli(&[
        "verify",
        &fingerprint,
        "--account",
        ACCOUNT,
        "--project",
        "886",
        "--ledger",
        &ledger_path.to_string_lossy(),
    ]);
    assert!(ok, "verify failed: {}", stderr);
    assert!(stdout.contains("FOUND"));
    assert!(stdout.contains("index:       4"));
}

#[test]
fn verify_exits_nonzero_when_no_entry_matches() {
    let dir = TempDir::new().unwrap();
    let ledger_path = dir.path().join("ledger.json");
    fs::write(&ledger_path, "[]").unwrap();

    let fingerprint = format!("0x{}", "b".repeat(64));
    let (ok, stdout, _) = run_cli(&[
        "verify",
        &fingerprint,
        "--account",
        ACCOUNT,
        "--project",
        "886",
        "--ledger",
        &ledger_path.to_string_lossy(),
    ]);
    assert!(!ok);
    assert!(stdout.contains("NOT FOUND"));
}

#[test]
fn verify_reports_results_as_json() {
    let dir = TempDir::new().unwrap();
    let fingerprint = format!("0x{}", "c".repeat(64));

    let snapshot = serde_json::json!([
        {"account": ACCOUNT, "project_id": 20250923, "index": 1, "fingerprint": fingerprint}
    ]);
    let ledger_path = dir.path().join("ledger.json");
    fs::write(&ledger_path, snapshot.to_string()).unwrap();

    let (ok, stdout, stderr) = run_cli(&[
        "verify",
        &fingerprint,
        "--account",
        ACCOUNT,
        "--project",
        "20250923",
        "--ledger",
        &ledger_path.to_string_lossy(),
        "--json",
    ]);
    assert!(ok, "verify failed: {}", stderr);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["found"].as_bool(), Some(true));
    assert_eq!(value["index"].as_u64(), Some(1));
}
