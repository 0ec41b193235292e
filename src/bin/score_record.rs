//! Score a single patient record from the command line.
//!
//! Reads a `PatientRecord` as JSON and prints the `PredictionResult` as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin score_record -- [--input <path>] [--validate] [--compact]
//! ```
//!
//! Without `--input` the record is read from stdin.
//!
//! # Exit codes
//!
//! - 0: success
//! - 2: usage error
//! - 3: record failed validation (`--validate` only)
//! - 4: I/O error
//! - 5: malformed JSON

use std::io::Read;
use std::path::PathBuf;

use cardiopredict::adapters::HeuristicModel;
use cardiopredict::ports::RiskModel;
use cardiopredict::PatientRecord;

const USAGE: &str = "Usage: score_record [--input <path>] [--validate] [--compact]";

fn main() {
    let mut args = std::env::args().skip(1);
    let mut input_path: Option<PathBuf> = None;
    let mut validate = false;
    let mut compact = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let p = args.next().unwrap_or_default();
                if p.is_empty() {
                    eprintln!("{USAGE}");
                    std::process::exit(2);
                }
                input_path = Some(PathBuf::from(p));
            }
            "--validate" => validate = true,
            "--compact" => compact = true,
            "-h" | "--help" => {
                println!(
                    "{USAGE}\n\nReads a patient record as JSON from <path> (or stdin) and prints the heart disease risk prediction as JSON. With --validate, out-of-range records are rejected."
                );
                return;
            }
            _ => {
                eprintln!("Unknown arg: {arg}\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let raw = match &input_path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {:?}: {e}", path);
            std::process::exit(4);
        }),
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read stdin: {e}");
                std::process::exit(4);
            }
            buf
        }
    };

    let record: PatientRecord = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Invalid patient record JSON: {e}");
        std::process::exit(5);
    });

    if validate {
        if let Err(errors) = record.validate() {
            for error in &errors {
                eprintln!("{error}");
            }
            std::process::exit(3);
        }
    }

    let result = HeuristicModel::new().predict(&record);

    let output = if compact {
        serde_json::to_string(&result)
    } else {
        serde_json::to_string_pretty(&result)
    };

    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize prediction: {e}");
            std::process::exit(4);
        }
    }
}
