use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FA2_INVOICE: &str = r#"{
    "schema": "FA2",
    "Platnosc": {
        "Zaplacono": "1",
        "DataZaplaty": "2025-10-10",
        "FormaPlatnosci": "6",
        "RachunekBankowy": {"NrRB": "PL61109010140000071219812874", "SWIFT": "WBKPPLPP"}
    },
    "WarunkiTransakcji": {
        "Transport": {"RodzajTransportu": "3", "WysylkaZ": {"AdresL1": "Magazyn 1", "KodKraju": "PL"}}
    }
}"#;

fn kpdf() -> Command {
    Command::cargo_bin("kpdf").unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn write_config(dir: &Path, language: &str) -> String {
    write(
        dir,
        "config.json",
        &format!(r#"{{"document": {{"language": "{language}"}}}}"#),
    )
}

#[test]
fn test_render_text_outline() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "invoice.json", FA2_INVOICE);
    let config = write_config(dir.path(), "en");

    kpdf()
        .args(["-c", &config, "render", &input, "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment date: 2025-10-10"))
        .stdout(predicate::str::contains("Form of payment: Bank transfer"))
        .stdout(predicate::str::contains("Transport type: Road transport"))
        .stdout(predicate::str::contains("Shipped from"));
}

#[test]
fn test_render_language_override() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "invoice.json", FA2_INVOICE);
    let config = write_config(dir.path(), "en");

    kpdf()
        .args(["-c", &config, "render", &input, "-f", "text", "--language", "pl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forma płatności: Przelew"));
}

#[test]
fn test_render_json_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "invoice.json", FA2_INVOICE);
    let config = write_config(dir.path(), "pl");
    let output = dir.path().join("out.json");

    kpdf()
        .args(["-c", &config, "render", &input, "-o"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["schema"], "FA2");
    assert_eq!(json["content"][0]["type"], "line");
}

#[test]
fn test_render_rejects_unknown_schema() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "invoice.json", r#"{"schema": "FA9"}"#);
    let config = write_config(dir.path(), "pl");

    kpdf()
        .args(["-c", &config, "render", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid invoice record"));
}

#[test]
fn test_batch_with_summary() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.json", FA2_INVOICE);
    write(dir.path(), "b.json", r#"{"schema": "FA3", "Platnosc": {"IPKSeF": "X1"}}"#);
    write(dir.path(), "broken.json", "{");
    let config_dir = TempDir::new().unwrap();
    let config = write_config(config_dir.path(), "pl");
    let out = dir.path().join("out");
    let pattern = format!("{}/*.json", dir.path().display());

    kpdf()
        .args(["-c", &config, "batch", &pattern, "--summary", "--continue-on-error", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("failed"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());
    assert!(!out.join("broken.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,schema,sections,processing_time_ms,error"));
    assert!(summary.contains("broken.json,error"));
    assert!(summary.contains("b.json,success,FA (3)"));
}

#[test]
fn test_batch_stops_on_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "broken.json", "{");
    let pattern = format!("{}/*.json", dir.path().display());

    kpdf().args(["batch", &pattern]).assert().failure();
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.json");
    let config = config.to_string_lossy().into_owned();

    kpdf()
        .args(["-c", &config, "config", "set", "document.description_wrap_width", "12"])
        .assert()
        .success();

    kpdf()
        .args(["-c", &config, "config", "get", "document.description_wrap_width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12"));

    kpdf()
        .args(["-c", &config, "config", "set", "document.language", "de"])
        .assert()
        .failure();

    kpdf()
        .args(["-c", &config, "config", "get", "document.missing"])
        .assert()
        .failure();
}
