//! Table environment location and rewriting
//!
//! Locates the begin marker, column-definition span and end marker of a
//! `tabular`-family environment inside raw LaTeX, then rewrites them for a
//! chosen [`TableKind`]. Column-spec spans are found by balanced-brace
//! scanning rather than regex, so specs containing nested braces
//! (`p{2cm}`, `@{\hspace{1em}}`) are handled correctly.

use super::classify::TableKind;

// Checked in this order so `\begin{tabularx}` is never matched by the
// shorter `tabular` needle; the closing brace in each needle keeps
// `\begin{tabular}` from matching inside `\begin{tabularx}`.
const RECOGNIZED_ENVIRONMENTS: [&str; 3] = ["tabularx", "longtable", "tabular"];

/// Byte-span location of a recognized table environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLocation {
    /// Original environment name (`tabular`, `tabularx` or `longtable`)
    pub environment: &'static str,
    /// Byte offset of the `\begin` marker
    pub begin_start: usize,
    /// Byte offset just after the column spec's opening `{`
    pub spec_start: usize,
    /// Byte offset of the column spec's closing `}`
    pub spec_end: usize,
    /// Byte offset just after the closing `}` (end of the rewritten span)
    pub span_end: usize,
}

impl TableLocation {
    /// The raw column-definition text between the spec braces
    pub fn column_spec<'a>(&self, code: &'a str) -> &'a str {
        &code[self.spec_start..self.spec_end]
    }
}

/// Find the matching `}` for a group whose `{` sits at `open` (byte index).
///
/// Returns the byte span of the inner content. Depth starts at 1 just
/// after the opening brace and the scan stops when it returns to 0.
fn balanced_group(code: &str, open: usize) -> Option<(usize, usize)> {
    debug_assert_eq!(code.as_bytes().get(open), Some(&b'{'));
    let inner_start = open + 1;
    let mut depth = 1usize;
    for (i, c) in code[inner_start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((inner_start, inner_start + i));
                }
            }
            _ => {}
        }
    }
    None
}

/// Byte index of the next `{`, skipping whitespace only
fn next_group_open(code: &str, from: usize) -> Option<usize> {
    for (i, c) in code[from..].char_indices() {
        if c == '{' {
            return Some(from + i);
        }
        if !c.is_whitespace() {
            return None;
        }
    }
    None
}

/// Earliest recognized `\begin{...}` marker in `code`
fn find_begin_marker(code: &str) -> Option<(usize, &'static str)> {
    let mut best: Option<(usize, &'static str)> = None;
    for env in RECOGNIZED_ENVIRONMENTS {
        let needle = format!("\\begin{{{}}}", env);
        if let Some(pos) = code.find(&needle) {
            if best.map_or(true, |(p, _)| pos < p) {
                best = Some((pos, env));
            }
        }
    }
    best
}

/// Locate the first recognized table environment in `code`.
///
/// Returns `None` when no `\begin{tabular}`/`\begin{tabularx}`/
/// `\begin{longtable}` marker with a well-formed column-spec group is
/// present; callers decide whether that is an error.
pub fn locate_table(code: &str) -> Option<TableLocation> {
    let (begin_start, environment) = find_begin_marker(code)?;
    let mut cursor = begin_start + "\\begin{}".len() + environment.len();

    // tabularx carries a width argument before the column spec
    if environment == "tabularx" {
        let open = next_group_open(code, cursor)?;
        let (_, inner_end) = balanced_group(code, open)?;
        cursor = inner_end + 1;
    }

    let open = next_group_open(code, cursor)?;
    let (spec_start, spec_end) = balanced_group(code, open)?;

    Some(TableLocation {
        environment,
        begin_start,
        spec_start,
        spec_end,
        span_end: spec_end + 1,
    })
}

/// Raw text after a table's column-spec opening brace when that group
/// never closes.
///
/// An unterminated `@{` swallows the group's closing brace, so the
/// balanced scan in [`locate_table`] finds nothing; this lets callers
/// tell a malformed column definition apart from the absence of any
/// table marker.
pub(crate) fn unterminated_spec(code: &str) -> Option<&str> {
    let (begin_start, environment) = find_begin_marker(code)?;
    let mut cursor = begin_start + "\\begin{}".len() + environment.len();

    if environment == "tabularx" {
        let open = next_group_open(code, cursor)?;
        match balanced_group(code, open) {
            Some((_, inner_end)) => cursor = inner_end + 1,
            None => return Some(&code[open + 1..]),
        }
    }

    let open = next_group_open(code, cursor)?;
    match balanced_group(code, open) {
        Some(_) => None,
        None => Some(&code[open + 1..]),
    }
}

/// Rewrite the first table environment to the given kind and column spec.
///
/// The begin marker (including the width argument for `tabularx`) and the
/// first matching end marker after the column spec are substituted;
/// everything else is preserved verbatim. When no table is found the
/// input is returned unchanged.
pub fn rewrite_environment(code: &str, column_spec: &str, kind: TableKind) -> String {
    let loc = match locate_table(code) {
        Some(loc) => loc,
        None => return code.to_string(),
    };

    let begin = match kind {
        TableKind::Standard => format!("\\begin{{tabular}}{{{}}}", column_spec),
        TableKind::WideTable => {
            format!("\\begin{{tabularx}}{{\\textwidth}}{{{}}}", column_spec)
        }
        TableKind::LongTable => format!("\\begin{{longtable}}{{{}}}", column_spec),
    };

    let mut out = String::with_capacity(code.len() + begin.len());
    out.push_str(&code[..loc.begin_start]);
    out.push_str(&begin);

    let tail = &code[loc.span_end..];
    let old_end = format!("\\end{{{}}}", loc.environment);
    match tail.find(&old_end) {
        Some(pos) => {
            out.push_str(&tail[..pos]);
            out.push_str(&format!("\\end{{{}}}", kind.environment_name()));
            out.push_str(&tail[pos + old_end.len()..]);
        }
        None => out.push_str(tail),
    }

    out
}
