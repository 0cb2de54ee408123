//! ASCII boxes around multi-line text.

use console::{measure_text_width, pad_str, Alignment};

/// Draws a `+`/`-`/`|` box around `text`, sized to its widest line.
///
/// Widths are measured in terminal columns with ANSI codes ignored, so
/// colored text is boxed the same as plain text.
///
/// ```rust
/// use prettyprint_plus::boxed::wrap_in_box;
///
/// assert_eq!(
///     wrap_in_box("hi\nthere"),
///     "+-------+\n| hi    |\n| there |\n+-------+"
/// );
/// ```
pub fn wrap_in_box(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        lines.push("");
    }
    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);

    let edge = format!("+{}+", "-".repeat(width + 2));
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(edge.clone());
    for line in lines {
        out.push(format!(
            "| {} |",
            pad_str(line, width, Alignment::Left, None)
        ));
    }
    out.push(edge);
    out.join("\n")
}
