//! Binary invocation helpers.

use std::path::Path;
use std::process::Command;

use serde_json::{json, Value};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_WARNING: i32 = 1;

pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}\nstderr: {}", e, self.stdout, self.stderr)
        })
    }
}

/// Run `rapor --db <db> <args>` with a fixed seed.
pub fn run_cli(db: &Path, args: &[&str]) -> CliResult {
    let output = Command::new(env!("CARGO_BIN_EXE_rapor"))
        .arg("--db")
        .arg(db)
        .args(args)
        .env("RAPOR_RANDOM_SEED", "42")
        .env_remove("RAPOR_DB_PATH")
        .output()
        .expect("spawn rapor binary");

    CliResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Write an import document: one subject, one score per student (ids 1..).
pub fn write_import(dir: &Path, scores: &[f64]) -> std::path::PathBuf {
    let grades: Vec<Value> = scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            json!({
                "student_id": i + 1,
                "subject_id": 1,
                "score": score,
                "semester": "Ganjil",
                "academic_year": "2024/2025"
            })
        })
        .collect();
    let doc = json!({
        "subjects": [{ "id": 1, "name": "Matematika" }],
        "grades": grades
    });
    let path = dir.join("grades.json");
    std::fs::write(&path, doc.to_string()).expect("write import document");
    path
}

pub const PERIOD: [&str; 4] = ["--semester", "Ganjil", "--year", "2024/2025"];
