//! Column-definition parsing and synthesis
//!
//! A column definition is the brace-delimited argument of a table
//! environment's opening marker, e.g. the `l|c@{\,}r` in
//! `\begin{tabular}{l|c@{\,}r}`. This module tokenizes such a string into
//! literal column types, vertical-rule separators and opaque `@{...}`
//! expressions, and rebuilds a clean definition for a chosen table variant.
//!
//! `@{...}` payloads may contain nested braces (`@{\hspace{2pt}}`), so the
//! scan tracks brace depth instead of searching for the next `}`.

use super::classify::TableKind;
use crate::utils::error::{TableError, TableResult};

/// One token of a column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnToken {
    /// Single column-type character (`l`, `c`, `r`, `X`, ...)
    Literal(char),
    /// Vertical rule separator (`|`)
    Rule,
    /// An `@{...}` inter-column expression, stored with its delimiters
    AtExpr(String),
}

/// Parsed column definition: an ordered token sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    tokens: Vec<ColumnToken>,
}

impl ColumnSpec {
    /// Tokenize a raw column-definition string.
    ///
    /// Single left-to-right scan. An `@{` starts brace-depth tracking
    /// (initial depth 1, stop when it returns to 0); everything else is
    /// tokenized per character, with `|` as a rule separator. Whitespace
    /// is skipped. An unterminated `@{` is rejected.
    pub fn parse(input: &str) -> TableResult<Self> {
        let chars: Vec<char> = input.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] == '@' && i + 1 < chars.len() && chars[i + 1] == '{' {
                let start = i;
                i += 2;
                let mut depth = 1usize;
                while i < chars.len() && depth > 0 {
                    match chars[i] {
                        '{' => depth += 1,
                        '}' => depth -= 1,
                        _ => {}
                    }
                    i += 1;
                }
                if depth > 0 {
                    return Err(TableError::unbalanced(input));
                }
                tokens.push(ColumnToken::AtExpr(chars[start..i].iter().collect()));
            } else {
                let c = chars[i];
                if c == '|' {
                    tokens.push(ColumnToken::Rule);
                } else if !c.is_whitespace() {
                    tokens.push(ColumnToken::Literal(c));
                }
                i += 1;
            }
        }

        Ok(ColumnSpec { tokens })
    }

    /// The token sequence, in source order
    pub fn tokens(&self) -> &[ColumnToken] {
        &self.tokens
    }

    /// Number of columns this definition declares.
    ///
    /// Only literal tokens count; rules and `@{...}` expressions sit
    /// between columns rather than defining them.
    pub fn column_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, ColumnToken::Literal(_)))
            .count()
    }

    /// Rebuild a column-definition string for the given table variant.
    ///
    /// Literal tokens and `@{...}` expressions are emitted in their
    /// original relative order; rule separators are dropped. A wide table
    /// replaces every literal with the stretchable `X` type regardless of
    /// `fill`. If fewer literals than `required` remain, fill tokens are
    /// appended at the end (never interleaved with `@{...}` content).
    pub fn synthesize(&self, required: usize, kind: TableKind, fill: char) -> String {
        let fill = if kind == TableKind::WideTable { 'X' } else { fill };
        let mut out = String::new();
        let mut literal_count = 0;

        for token in &self.tokens {
            match token {
                ColumnToken::Literal(c) => {
                    out.push(if kind == TableKind::WideTable { 'X' } else { *c });
                    literal_count += 1;
                }
                ColumnToken::Rule => {}
                ColumnToken::AtExpr(text) => out.push_str(text),
            }
        }

        while literal_count < required {
            out.push(fill);
            literal_count += 1;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_literals() {
        let spec = ColumnSpec::parse("lcr").unwrap();
        assert_eq!(
            spec.tokens(),
            &[
                ColumnToken::Literal('l'),
                ColumnToken::Literal('c'),
                ColumnToken::Literal('r'),
            ]
        );
        assert_eq!(spec.column_count(), 3);
    }

    #[test]
    fn test_parse_rules() {
        let spec = ColumnSpec::parse("|l|c|").unwrap();
        assert_eq!(spec.column_count(), 2);
        assert_eq!(
            spec.tokens(),
            &[
                ColumnToken::Rule,
                ColumnToken::Literal('l'),
                ColumnToken::Rule,
                ColumnToken::Literal('c'),
                ColumnToken::Rule,
            ]
        );
    }

    #[test]
    fn test_parse_at_expression() {
        let spec = ColumnSpec::parse("l@{\\,}r").unwrap();
        assert_eq!(
            spec.tokens(),
            &[
                ColumnToken::Literal('l'),
                ColumnToken::AtExpr("@{\\,}".to_string()),
                ColumnToken::Literal('r'),
            ]
        );
        assert_eq!(spec.column_count(), 2);
    }

    #[test]
    fn test_parse_nested_braces_in_at() {
        let spec = ColumnSpec::parse("c@{\\hspace{2pt}}c").unwrap();
        assert_eq!(
            spec.tokens(),
            &[
                ColumnToken::Literal('c'),
                ColumnToken::AtExpr("@{\\hspace{2pt}}".to_string()),
                ColumnToken::Literal('c'),
            ]
        );
    }

    #[test]
    fn test_parse_empty_at() {
        let spec = ColumnSpec::parse("@{}ll@{}").unwrap();
        assert_eq!(spec.column_count(), 2);
        assert_eq!(
            spec.tokens()[0],
            ColumnToken::AtExpr("@{}".to_string())
        );
        assert_eq!(
            spec.tokens()[3],
            ColumnToken::AtExpr("@{}".to_string())
        );
    }

    #[test]
    fn test_parse_unbalanced_at_rejected() {
        let err = ColumnSpec::parse("l@{\\hspace{2pt}r").unwrap_err();
        assert!(matches!(err, TableError::UnbalancedAtExpr { .. }));
    }

    #[test]
    fn test_parse_lone_at_is_literal() {
        // An '@' not followed by '{' is just a (bogus) literal token
        let spec = ColumnSpec::parse("l@r").unwrap();
        assert_eq!(spec.column_count(), 3);
    }

    #[test]
    fn test_parse_empty_input() {
        let spec = ColumnSpec::parse("").unwrap();
        assert_eq!(spec.column_count(), 0);
        assert!(spec.tokens().is_empty());
    }

    #[test]
    fn test_synthesize_preserves_when_count_satisfied() {
        let spec = ColumnSpec::parse("lcr").unwrap();
        assert_eq!(spec.synthesize(3, TableKind::Standard, 'l'), "lcr");
    }

    #[test]
    fn test_synthesize_pads_deficit() {
        let spec = ColumnSpec::parse("lc").unwrap();
        assert_eq!(spec.synthesize(4, TableKind::Standard, 'l'), "lcll");
        assert_eq!(spec.synthesize(4, TableKind::LongTable, 'l'), "lcll");
    }

    #[test]
    fn test_synthesize_drops_rules() {
        let spec = ColumnSpec::parse("|l|c|r|").unwrap();
        assert_eq!(spec.synthesize(3, TableKind::Standard, 'l'), "lcr");
    }

    #[test]
    fn test_synthesize_wide_table_all_x() {
        let spec = ColumnSpec::parse("lcr").unwrap();
        assert_eq!(spec.synthesize(7, TableKind::WideTable, 'l'), "XXXXXXX");
    }

    #[test]
    fn test_synthesize_preserves_at_expressions_in_order() {
        let spec = ColumnSpec::parse("l@{\\,}c@{\\;}r").unwrap();
        assert_eq!(
            spec.synthesize(3, TableKind::Standard, 'l'),
            "l@{\\,}c@{\\;}r"
        );
    }

    #[test]
    fn test_synthesize_at_expressions_survive_wide_rewrite() {
        let spec = ColumnSpec::parse("l@{\\hspace{1em}}r").unwrap();
        assert_eq!(
            spec.synthesize(2, TableKind::WideTable, 'l'),
            "X@{\\hspace{1em}}X"
        );
    }

    #[test]
    fn test_synthesize_padding_after_trailing_at() {
        let spec = ColumnSpec::parse("l@{}").unwrap();
        assert_eq!(spec.synthesize(3, TableKind::Standard, 'l'), "l@{}ll");
    }

    #[test]
    fn test_synthesize_empty_spec_padded() {
        let spec = ColumnSpec::parse("").unwrap();
        assert_eq!(spec.synthesize(1, TableKind::Standard, 'l'), "l");
        assert_eq!(spec.synthesize(2, TableKind::WideTable, 'l'), "XX");
    }

    #[test]
    fn test_synthesize_custom_fill() {
        let spec = ColumnSpec::parse("l").unwrap();
        assert_eq!(spec.synthesize(3, TableKind::Standard, 'c'), "lcc");
        // Wide tables ignore the configured fill
        assert_eq!(spec.synthesize(3, TableKind::WideTable, 'c'), "XXX");
    }
}
