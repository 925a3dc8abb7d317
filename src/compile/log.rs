//! Engine log error extraction
//!
//! A TeX engine reports each error as a block starting with `! ` followed
//! by a context line (`l.<n> ...`). The extractor returns those blocks in
//! file order; when a failed run leaves no `! ` blocks at all, a sentinel
//! entry distinguishes "failed with no visible reason" from "no log".

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `! <message>` plus the line that follows it (usually the `l.<n>`
    // context line). Multi-line mode with dot-matches-newline so the
    // block can span the line break.
    static ref ERROR_BLOCK: Regex = Regex::new(r"(?ms)^! .*?^.*?$").unwrap();
}

/// Entry returned when a log contains no error blocks
pub const NO_ERRORS_FOUND: &str = "no errors found in log";

/// Extract every error block from engine log text, trimmed, in order.
pub fn extract_log_errors(log: &str) -> Vec<String> {
    let errors: Vec<String> = ERROR_BLOCK
        .find_iter(log)
        .map(|m| m.as_str().trim().to_string())
        .collect();

    if errors.is_empty() {
        vec![NO_ERRORS_FOUND.to_string()]
    } else {
        errors
    }
}
