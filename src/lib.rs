//! # tabtex
//!
//! LaTeX table normalization and PDF preview compilation.
//!
//! Predicted table transcriptions frequently declare fewer columns than
//! their rows use, mix in vertical rules, or need a different table
//! environment to render at all. This crate rewrites such a
//! `tabular`-family block into a compilable form and can hand it to an
//! external typesetting engine for a preview PDF.
//!
//! ## Features
//!
//! - **Classification**: `tabular` / `tabularx` / `longtable` selection
//!   from row and column counts
//! - **Column-definition rewriting**: balanced-brace aware `@{...}`
//!   handling, rule stripping, fill-token padding
//! - **Standalone wrapping**: minimal A3 preamble with the table packages
//! - **Compilation**: scoped staging, bounded engine wait, structured
//!   error extraction from the engine log, guaranteed artifact cleanup
//!
//! ## Usage Examples
//!
//! ### Normalizing a table
//!
//! ```rust
//! use tabtex::{normalize_table, NormalizeOptions};
//!
//! let code = r"\begin{tabular}{ll} a&b&c\\ d&e&f\\ \end{tabular}";
//! let fixed = normalize_table(code, &NormalizeOptions::default()).unwrap();
//! assert!(fixed.contains(r"\begin{tabular}{lll}"));
//! ```
//!
//! ### Compiling to PDF
//!
//! ```rust,no_run
//! use tabtex::{compile_table_to_pdf, EngineConfig, NormalizeOptions};
//!
//! let code = r"\begin{tabular}{lll} a&b&c\\ \end{tabular}";
//! let outcome = compile_table_to_pdf(
//!     code,
//!     &NormalizeOptions::default(),
//!     &EngineConfig::default(),
//! );
//! if outcome.success {
//!     std::fs::write("preview.pdf", outcome.pdf.unwrap()).unwrap();
//! }
//! ```

/// Core table transformation modules
pub mod core;

/// Compile pipeline and engine invocation
pub mod compile;

/// Utility modules
pub mod utils;

// Re-export core transformations
pub use core::{
    classify, locate_table, normalize_table, required_columns, rewrite_environment,
    wrap_document, ColumnSpec, ColumnToken, NormalizeOptions, TableKind, TableLocation,
};

// Re-export the compile pipeline
pub use compile::{
    compile_document, compile_table_to_pdf, extract_log_errors, CompileOutcome, EngineConfig,
    NO_ERRORS_FOUND,
};

// Re-export utilities
pub use utils::error::{TableError, TableResult};

/// Classify a table block with default thresholds
pub fn classify_table(code: &str) -> TableKind {
    classify(code, &NormalizeOptions::default())
}
