//! Core table transformation modules
//!
//! The pure half of the crate: classification, column-definition
//! parsing/synthesis, environment rewriting and document wrapping. All
//! functions here are deterministic string transformations with no IO.

pub mod classify;
pub mod colspec;
pub mod document;
pub mod rewrite;

pub use classify::{classify, required_columns, TableKind};
pub use colspec::{ColumnSpec, ColumnToken};
pub use document::wrap_document;
pub use rewrite::{locate_table, rewrite_environment, TableLocation};

use crate::utils::error::{TableError, TableResult};

/// Options for table normalization
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Row count above which a table becomes a `longtable`
    pub long_table_threshold: usize,
    /// Column count above which a table becomes a `tabularx`
    pub wide_table_threshold: usize,
    /// Column type used to pad a short definition (wide tables always
    /// pad with `X`)
    pub fill_token: char,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            long_table_threshold: 30,
            wide_table_threshold: 6,
            fill_token: 'l',
        }
    }
}

/// Normalize a raw table block: classify it, rebuild its column
/// definition for the required column count, and rewrite the environment
/// markers for the decided variant.
///
/// # Errors
/// - [`TableError::NoTableFound`] when no recognized environment is present
/// - [`TableError::UnbalancedAtExpr`] for a malformed column definition
pub fn normalize_table(code: &str, options: &NormalizeOptions) -> TableResult<String> {
    let location = match locate_table(code) {
        Some(location) => location,
        None => {
            // A begin marker whose spec group never closes usually means
            // an unterminated @{ swallowed the closing brace; tokenizing
            // the tail reports that case distinctly.
            if let Some(tail) = rewrite::unterminated_spec(code) {
                ColumnSpec::parse(tail)?;
            }
            return Err(TableError::NoTableFound);
        }
    };
    let kind = classify(code, options);
    let required = required_columns(code);
    let parsed = ColumnSpec::parse(location.column_spec(code))?;
    let spec = parsed.synthesize(required, kind, options.fill_token);
    Ok(rewrite_environment(code, &spec, kind))
}
