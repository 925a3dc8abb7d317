//! Compile pipeline: table code in, PDF bytes and/or errors out
//!
//! One synchronous request per invocation, no shared state. The wrapped
//! document is staged into a uniquely named scoped directory
//! ([`tempfile::TempDir`]), the engine runs inside it, and the directory
//! is removed on every exit path once the PDF bytes have been read into
//! memory. Concurrent requests never collide because each gets its own
//! directory.

pub mod engine;
pub mod log;

pub use engine::EngineConfig;
pub use log::{extract_log_errors, NO_ERRORS_FOUND};

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::core::{normalize_table, wrap_document, NormalizeOptions};
use crate::utils::error::TableResult;

/// Outcome of one compile request.
///
/// On definitive failure `pdf` is `None` and `errors` carries whatever the
/// engine log revealed; when the engine errors but still emits a PDF, both
/// are populated and `success` is true.
#[derive(Debug, Clone, Serialize)]
pub struct CompileOutcome {
    /// Whether a usable PDF was produced
    pub success: bool,
    /// PDF bytes, captured before the staging directory is removed
    #[serde(skip)]
    pub pdf: Option<Vec<u8>>,
    /// Human-readable status message
    pub message: String,
    /// Error blocks extracted from the engine log (warnings when
    /// `success` is true)
    pub errors: Vec<String>,
}

impl CompileOutcome {
    fn success(pdf: Vec<u8>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            pdf: Some(pdf),
            message: message.into(),
            errors: Vec::new(),
        }
    }

    fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            pdf: None,
            message: message.into(),
            errors,
        }
    }
}

/// Normalize a table block, wrap it into a standalone document and
/// compile it to PDF.
///
/// Every failure mode is reported through the returned outcome; no error
/// escapes as `Err` from this entry point. A structural failure (no table
/// environment, malformed column definition) fails before the engine is
/// ever invoked.
pub fn compile_table_to_pdf(
    code: &str,
    options: &NormalizeOptions,
    engine: &EngineConfig,
) -> CompileOutcome {
    let table = match normalize_table(code, options) {
        Ok(table) => table,
        Err(e) => return CompileOutcome::failure(e.to_string(), Vec::new()),
    };
    compile_document(&wrap_document(&table), engine)
}

/// Compile an already-wrapped LaTeX document to PDF.
pub fn compile_document(document: &str, engine: &EngineConfig) -> CompileOutcome {
    match stage_and_run(document, engine) {
        Ok(outcome) => outcome,
        Err(e) => CompileOutcome::failure(e.to_string(), Vec::new()),
    }
}

/// Stage, invoke and resolve one engine run.
///
/// The `TempDir` guard owns every artifact (`.tex`, `.log`, `.pdf`,
/// `.aux`, `.out` share its base name) and removes them when this
/// function returns, on the error paths included.
fn stage_and_run(document: &str, engine: &EngineConfig) -> TableResult<CompileOutcome> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("tabtex-");
    let workdir = match &engine.temp_root {
        Some(root) => builder.tempdir_in(root)?,
        None => builder.tempdir()?,
    };

    let tex_path = workdir.path().join("table.tex");
    fs::write(&tex_path, document)?;
    let pdf_path = tex_path.with_extension("pdf");
    let log_path = tex_path.with_extension("log");

    let exited_ok = engine::run_engine(engine, &tex_path, workdir.path())?;

    let outcome = if exited_ok {
        match read_pdf(&pdf_path) {
            Some(pdf) => CompileOutcome::success(pdf, "compilation succeeded, PDF generated"),
            None => CompileOutcome::failure(
                "engine reported success but no PDF was produced",
                Vec::new(),
            ),
        }
    } else {
        let errors = read_log_errors(&log_path);
        match read_pdf(&pdf_path) {
            Some(pdf) => {
                let mut outcome = CompileOutcome::success(
                    pdf,
                    "compilation reported errors but a PDF was produced; see error list",
                );
                outcome.errors = errors;
                outcome
            }
            None => CompileOutcome::failure(
                "compilation failed and no PDF was produced; see error list",
                errors,
            ),
        }
    };

    Ok(outcome)
}

fn read_pdf(pdf_path: &Path) -> Option<Vec<u8>> {
    fs::read(pdf_path).ok()
}

/// Read the engine log and extract its error blocks. A missing or
/// undecodable log becomes a single descriptive entry rather than a
/// propagated fault.
fn read_log_errors(log_path: &Path) -> Vec<String> {
    match fs::read(log_path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => extract_log_errors(&text),
            Err(e) => vec![format!("failed to decode engine log: {}", e)],
        },
        Err(e) => vec![format!("failed to read engine log: {}", e)],
    }
}
