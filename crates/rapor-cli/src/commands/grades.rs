//! `grades` commands: import a JSON grade document, list subjects.
//!
//! # Import Document
//!
//! ```json
//! {
//!   "subjects": [{ "id": 1, "name": "Matematika" }],
//!   "grades": [
//!     { "student_id": 7, "subject_id": 1, "score": 88.5,
//!       "semester": "Ganjil", "academic_year": "2024/2025" }
//!   ]
//! }
//! ```
//!
//! New subjects are appended to the frozen subject order. Nothing is
//! written when any grade fails validation.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::{debug, info};

use rapor_storage::GradeImport;

use super::{print_json, CliContext};
use crate::error::report_storage_error;
use crate::GlobalOptions;

/// Grades subcommands
#[derive(Subcommand, Debug)]
pub enum GradesCommands {
    /// Import subjects and grades from a JSON document
    Import(ImportArgs),
    /// Print subjects in feature-vector order
    Subjects,
}

/// Arguments for `grades import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the JSON document
    #[arg(long)]
    pub file: PathBuf,
}

/// Handle grades command dispatch
pub async fn handle_grades_command(options: &GlobalOptions, cmd: GradesCommands) -> i32 {
    match cmd {
        GradesCommands::Import(args) => import_command(options, args),
        GradesCommands::Subjects => subjects_command(options),
    }
}

fn import_command(options: &GlobalOptions, args: ImportArgs) -> i32 {
    const COMMAND: &str = "grades import";
    debug!("import_command: args={:?}", args);

    let doc = match GradeImport::from_file(&args.file) {
        Ok(doc) => doc,
        Err(e) => return report_storage_error(COMMAND, &e),
    };
    let ctx = match CliContext::open(COMMAND, options) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match ctx.store.import(&doc) {
        Ok(summary) => {
            info!(
                "grades import: {} subjects added, {} grades stored",
                summary.subjects_added, summary.grades_stored
            );
            print_json(COMMAND, &summary)
        }
        Err(e) => report_storage_error(COMMAND, &e),
    }
}

fn subjects_command(options: &GlobalOptions) -> i32 {
    const COMMAND: &str = "grades subjects";
    let ctx = match CliContext::open(COMMAND, options) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match ctx.store.subjects() {
        Ok(subjects) => print_json(COMMAND, &subjects),
        Err(e) => report_storage_error(COMMAND, &e),
    }
}
