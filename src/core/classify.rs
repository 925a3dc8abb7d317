//! Table structure classification
//!
//! Decides which table environment variant a raw `tabular`-like block should
//! be rendered with, based on its row and column counts:
//!
//! - more than 30 rows → `longtable` (needs pagination)
//! - more than 6 columns → `tabularx` (needs stretch-to-width columns)
//! - everything else → plain `tabular`

use super::NormalizeOptions;

/// Table environment variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Plain `tabular`, native column types
    Standard,
    /// `tabularx` stretched to `\textwidth`
    WideTable,
    /// `longtable`, paginated across pages
    LongTable,
}

impl TableKind {
    /// LaTeX environment name for this variant
    pub fn environment_name(&self) -> &'static str {
        match self {
            TableKind::Standard => "tabular",
            TableKind::WideTable => "tabularx",
            TableKind::LongTable => "longtable",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Standard => write!(f, "standard"),
            TableKind::WideTable => write!(f, "wide_table"),
            TableKind::LongTable => write!(f, "longtable"),
        }
    }
}

/// Number of columns the table needs: the maximum `&` count across rows,
/// plus one for the trailing cell.
///
/// Degenerate input (no rows, no separators) yields 1.
pub fn required_columns(code: &str) -> usize {
    code.split("\\\\")
        .map(|row| row.matches('&').count())
        .max()
        .unwrap_or(0)
        + 1
}

/// Classify a raw table block using the given thresholds.
///
/// Rows are delimited by `\\`; the decision order is rows first, then
/// columns. Both thresholds are strict (a table with exactly 30 rows is
/// not long, exactly 6 columns is not wide).
pub fn classify(code: &str, options: &NormalizeOptions) -> TableKind {
    let row_count = code.split("\\\\").count();
    let max_cols = required_columns(code);

    if row_count > options.long_table_threshold {
        TableKind::LongTable
    } else if max_cols > options.wide_table_threshold {
        TableKind::WideTable
    } else {
        TableKind::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize, cols: usize) -> String {
        let row = vec!["x"; cols].join(" & ");
        let mut out = String::new();
        for _ in 0..n {
            out.push_str(&row);
            out.push_str(" \\\\\n");
        }
        out
    }

    #[test]
    fn test_standard_table() {
        let code = rows(10, 3);
        assert_eq!(classify(&code, &NormalizeOptions::default()), TableKind::Standard);
        assert_eq!(required_columns(&code), 3);
    }

    #[test]
    fn test_wide_table() {
        let code = rows(10, 8);
        assert_eq!(classify(&code, &NormalizeOptions::default()), TableKind::WideTable);
        assert_eq!(required_columns(&code), 8);
    }

    #[test]
    fn test_long_table() {
        let code = rows(31, 2);
        assert_eq!(classify(&code, &NormalizeOptions::default()), TableKind::LongTable);
    }

    #[test]
    fn test_long_wins_over_wide() {
        let code = rows(31, 9);
        assert_eq!(classify(&code, &NormalizeOptions::default()), TableKind::LongTable);
    }

    #[test]
    fn test_row_boundary_not_long() {
        // 29 terminated rows produce 30 split segments; still not long
        let code = rows(29, 2);
        assert_eq!(code.split("\\\\").count(), 30);
        assert_eq!(classify(&code, &NormalizeOptions::default()), TableKind::Standard);
    }

    #[test]
    fn test_column_boundary_not_wide() {
        let code = rows(5, 6);
        assert_eq!(required_columns(&code), 6);
        assert_eq!(classify(&code, &NormalizeOptions::default()), TableKind::Standard);
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(required_columns(""), 1);
        assert_eq!(classify("", &NormalizeOptions::default()), TableKind::Standard);
        assert_eq!(required_columns("just text"), 1);
    }

    #[test]
    fn test_environment_names() {
        assert_eq!(TableKind::Standard.environment_name(), "tabular");
        assert_eq!(TableKind::WideTable.environment_name(), "tabularx");
        assert_eq!(TableKind::LongTable.environment_name(), "longtable");
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = NormalizeOptions {
            long_table_threshold: 5,
            ..Default::default()
        };
        let code = rows(6, 2);
        assert_eq!(classify(&code, &opts), TableKind::LongTable);
    }
}
