//! LaTeX report rendering helpers.
//!
//! Reports are fragments, not standalone documents: the enclosing book
//! preamble supplies macros like `\canon` and `\seqc`.

/// Escape underscores for LaTeX text mode.
pub fn latex_escape(s: &str) -> String {
    s.replace('_', "\\_")
}

/// Render one trace row: escaped cells joined with ` & `, terminated
/// with a LaTeX line break.
pub fn trace_row(cells: &[String]) -> String {
    let joined = cells
        .iter()
        .map(|c| latex_escape(c))
        .collect::<Vec<String>>()
        .join(" & ");
    format!("{}\\\\", joined)
}

/// Render a left-aligned tabular: header row, hline, one line per row.
pub fn render_trace_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\\begin{{tabular}}{{{}}}\n", "l".repeat(columns.len())));
    out.push_str(&format!("{}\\\\\n", columns.join(" & ")));
    out.push_str("\\hline\n");
    for row in rows {
        out.push_str(&trace_row(row));
        out.push('\n');
    }
    out.push_str("\\end{tabular}\n");
    out
}
