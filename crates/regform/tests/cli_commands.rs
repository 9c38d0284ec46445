#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use chrono::{Datelike, Local};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "regform-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn complete_draft() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "phoneNumber": "5551234567",
        "dob": "1990-12-10",
        "gender": "female",
        "password": "analytical",
        "confirmPassword": "analytical",
        "address": "12 St James's Square, London",
        "country": "uk",
        "file": null,
        "terms": true
    })
}

fn write_draft(tag: &str, draft: &serde_json::Value) -> (PathBuf, PathBuf) {
    let dir = unique_temp_dir(tag);
    let path = dir.join("draft.json");
    std::fs::write(&path, draft.to_string()).expect("draft should be writable");
    (dir, path)
}

fn regform(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_regform"));
    cmd.arg("--log-level").arg("error").args(args);
    cmd
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = regform(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("regform should start");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("stdin should accept input");
    child.wait_with_output().expect("regform should finish")
}

fn stdout_json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each stdout line should be JSON"))
        .collect()
}

#[test]
fn validate_accepts_complete_draft() {
    let (dir, path) = write_draft("valid", &complete_draft());

    let output = regform(&["--format", "json", "validate"])
        .arg(&path)
        .output()
        .expect("validate should run");

    assert!(output.status.success());
    let report = &stdout_json_lines(&output)[0];
    assert_eq!(report["report"], "validation");
    assert_eq!(report["valid"], true);
    assert_eq!(report["errors"], serde_json::json!({}));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_reports_field_errors_with_exit_60() {
    let mut draft = complete_draft();
    draft["phoneNumber"] = "12345".into();
    draft["confirmPassword"] = "different".into();
    draft["terms"] = false.into();
    let (dir, path) = write_draft("invalid", &draft);

    let output = regform(&["--format", "json", "validate"])
        .arg(&path)
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(60));
    let report = &stdout_json_lines(&output)[0];
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"]["phoneNumber"]["kind"], "format_error");
    assert_eq!(report["errors"]["confirmPassword"]["kind"], "mismatch_error");
    assert_eq!(
        report["errors"]["terms"]["message"],
        "You must accept the terms and conditions"
    );
    assert!(report["errors"].get("email").is_none());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_applies_age_gate_against_today() {
    let today = Local::now().date_naive();
    let mut draft = complete_draft();
    draft["dob"] = format!("{}-{:02}-{:02}", today.year() - 17, today.month(), 1).into();
    let (dir, path) = write_draft("minor", &draft);

    let output = regform(&["--format", "raw", "validate"])
        .arg(&path)
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(60));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dob\tYou must be at least 18 years old"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn validate_reads_stdin() {
    let output = run_with_stdin(
        &["--format", "json", "validate", "-"],
        &complete_draft().to_string(),
    );
    assert!(output.status.success());
}

#[test]
fn malformed_document_is_data_invalid() {
    let output = run_with_stdin(&["validate", "-"], r#"{"terms":"yes"}"#);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("draft document rejected"));
}

#[test]
fn strict_flag_rejects_unknown_keys() {
    let mut draft = complete_draft();
    draft["nickname"] = "countess".into();
    let (dir, path) = write_draft("strict", &draft);

    let lenient = regform(&["--format", "json", "validate"])
        .arg(&path)
        .output()
        .expect("validate should run");
    assert!(lenient.status.success());

    let strict = regform(&["--format", "json", "validate", "--strict"])
        .arg(&path)
        .output()
        .expect("validate should run");
    assert_eq!(strict.status.code(), Some(60));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_reported() {
    let output = regform(&["validate", "/definitely/not/here/draft.json"])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed loading /definitely/not/here/draft.json"));
    assert_eq!(stderr.matches("draft.json").count(), 1);
    assert_eq!(stderr.matches("fail").count(), 1);
}

#[cfg(unix)]
#[test]
fn directory_path_is_an_io_failure() {
    let dir = unique_temp_dir("dir-path");

    let output = regform(&["validate"])
        .arg(&dir)
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(125));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed loading"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn submit_logs_masked_record() {
    let (dir, path) = write_draft("submit", &complete_draft());

    let output = Command::new(env!("CARGO_BIN_EXE_regform"))
        .args(["--log-format", "json", "--format", "json", "submit"])
        .arg(&path)
        .output()
        .expect("submit should run");

    assert!(output.status.success());
    let report = &stdout_json_lines(&output)[0];
    assert_eq!(report["report"], "submission");
    assert_eq!(report["submitted"], true);
    assert_eq!(report["values"]["fullName"], "Ada Lovelace");
    assert_eq!(report["values"]["password"], "********");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("form submitted"));
    assert!(!stderr.contains("analytical"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn pretty_submission_shows_country_label() {
    let (dir, path) = write_draft("submit-pretty", &complete_draft());

    let output = regform(&["--format", "pretty", "submit"])
        .arg(&path)
        .output()
        .expect("submit should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Full name: Ada Lovelace"));
    assert!(stdout.contains("Country:   UK"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn submit_rejects_invalid_draft() {
    let mut draft = complete_draft();
    draft["email"] = "not-an-email".into();
    let (dir, path) = write_draft("submit-invalid", &draft);

    let output = Command::new(env!("CARGO_BIN_EXE_regform"))
        .args(["--format", "json", "submit"])
        .arg(&path)
        .output()
        .expect("submit should run");

    assert_eq!(output.status.code(), Some(60));
    let report = &stdout_json_lines(&output)[0];
    assert_eq!(report["report"], "validation");
    assert_eq!(report["errors"]["email"]["message"], "Invalid email format");
    assert!(!String::from_utf8_lossy(&output.stderr).contains("form submitted"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn fill_revalidates_each_change_and_submits() {
    let script = "\
# typing the email
email=ada
email=ada@example.com
fullName=Ada Lovelace
phoneNumber=5551234567
dob=1990-12-10
gender=female
password=analytical
confirmPassword=analytica
confirmPassword=analytical
address=London
country=uk
terms=true
submit
show
";
    let output = run_with_stdin(&["--format", "json", "fill"], script);
    assert!(output.status.success());

    let lines = stdout_json_lines(&output);
    assert_eq!(lines[0]["field"], "email");
    assert_eq!(lines[0]["valid"], false);
    assert_eq!(lines[0]["error"]["kind"], "format_error");
    assert_eq!(lines[1]["valid"], true);
    assert_eq!(lines[7]["field"], "confirmPassword");
    assert_eq!(lines[7]["error"]["kind"], "mismatch_error");
    assert_eq!(lines[8]["valid"], true);

    let submitted = &lines[12];
    assert_eq!(submitted["report"], "submission");
    assert_eq!(submitted["values"]["email"], "ada@example.com");

    // the draft is discarded after submission
    let after = &lines[13];
    assert_eq!(after["report"], "validation");
    assert_eq!(after["errors"]["fullName"]["kind"], "missing_field");
}

#[test]
fn fill_reports_bad_lines_and_keeps_going() {
    let output = run_with_stdin(
        &["--format", "json", "fill"],
        "nickname=ada\nterms=maybe\nterms=true\n",
    );
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown field: nickname"));
    assert!(stderr.contains("invalid value for terms"));

    let lines = stdout_json_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["field"], "terms");
    assert_eq!(lines[0]["valid"], true);
}

#[test]
fn fill_can_start_from_document() {
    let mut draft = complete_draft();
    draft["country"] = "".into();
    let (dir, path) = write_draft("fill-from", &draft);

    let output = run_with_stdin(
        &["--format", "json", "fill", "--from", path.to_str().expect("utf-8 path")],
        "country=canada\nsubmit\n",
    );
    assert!(output.status.success());

    let lines = stdout_json_lines(&output);
    assert_eq!(lines[0]["errors"]["country"]["kind"], "missing_field");
    assert_eq!(lines[1]["valid"], true);
    assert_eq!(lines[2]["values"]["country"], "canada");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rules_lists_every_rule() {
    let output = regform(&["--format", "json", "rules"])
        .output()
        .expect("rules should run");

    assert!(output.status.success());
    let report = &stdout_json_lines(&output)[0];
    let rules = report["rules"].as_array().expect("rules should be an array");
    assert_eq!(rules.len(), 16);
    assert!(rules
        .iter()
        .any(|r| r["field"] == "confirmPassword" && r["kind"] == "mismatch_error"));
}

#[test]
fn version_prints_package_version() {
    let output = regform(&["version"]).output().expect("version should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("regform {}", env!("CARGO_PKG_VERSION")));
}
