//! End-to-end checks of the `score_record` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_score_record"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Should spawn score_record");

    child
        .stdin
        .take()
        .expect("Should have stdin")
        .write_all(stdin.as_bytes())
        .expect("Should write stdin");

    child.wait_with_output().expect("Should finish")
}

const BASELINE: &str = r#"{
    "age": 50, "sex": "male", "chestPainType": "typical", "restingBP": 120,
    "cholesterol": 200, "fastingBloodSugarHigh": false, "restingECG": "normal",
    "maxHeartRate": 150, "exerciseAngina": false, "stDepression": 0.0,
    "stSlope": "upsloping", "majorVessels": 0, "thalassemia": "normal"
}"#;

#[test]
fn scores_record_from_stdin() {
    let output = run(&["--compact"], BASELINE);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should print JSON");
    assert_eq!(json["riskLevel"], "high");
    assert_eq!(json["modelUsed"], "Random Forest v2.1");
    assert_eq!(
        json["featureContributions"]
            .as_array()
            .expect("Array")
            .len(),
        8
    );
}

#[test]
fn validation_failure_exits_3() {
    let record = BASELINE.replace("\"age\": 50", "\"age\": 150");
    let output = run(&["--validate"], &record);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Age 150"));

    // Without --validate the same record is scored
    let output = run(&[], &record);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn extreme_age_is_scored_without_validation() {
    let record = BASELINE.replace("\"age\": 50", "\"age\": -2147483648");
    let output = run(&["--compact"], &record);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should print JSON");
    assert_eq!(json["riskLevel"], "low");
}

#[test]
fn malformed_json_exits_5() {
    let output = run(&[], "{ not json");
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn bad_arguments_exit_2() {
    assert_eq!(run(&["--bogus"], "").status.code(), Some(2));
    assert_eq!(run(&["--input"], "").status.code(), Some(2));
}

#[test]
fn missing_input_file_exits_4() {
    let output = run(&["--input", "/nonexistent/cardiopredict/record.json"], "");
    assert_eq!(output.status.code(), Some(4));
}
