//! Standalone document wrapping
//!
//! Embeds a rewritten table environment into a minimal compilable
//! document: A3 paper with 1-inch margins (predicted tables can be very
//! wide), the table-related packages, and no page numbering. The output
//! is deterministic for a given table string.

/// Wrap a table environment in a minimal standalone document.
pub fn wrap_document(table_environment: &str) -> String {
    format!(
        "\\documentclass[10pt]{{article}}\n\
         \\usepackage[a3paper, margin=1in]{{geometry}}\n\
         \\usepackage[table,dvipsnames]{{xcolor}}\n\
         \\usepackage{{booktabs}}\n\
         \\usepackage{{tabularx, makecell, multirow}}\n\
         \\usepackage{{graphicx}}\n\
         \\usepackage{{array}}\n\
         \\usepackage{{longtable}}\n\
         \\usepackage{{amsmath}}\n\
         \\usepackage{{amssymb}}\n\
         \\usepackage{{amsbsy}}\n\
         \\pagenumbering{{gobble}}\n\
         \\begin{{document}}\n\
         {}\n\
         \\end{{document}}\n",
        table_environment
    )
}
