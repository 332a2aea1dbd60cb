//! Formatting utilities for terminal output

/// Dash rule as wide as `title`
#[must_use]
pub fn underline(title: &str) -> String {
    "-".repeat(title.chars().count())
}

/// Greedily pack words into lines of at most `width` characters
///
/// Words are separated by two spaces. A word longer than `width` still gets a
/// line of its own.
///
/// # Examples
/// ```
/// use word_squares::output::formatters::wrap_words;
///
/// let lines = wrap_words(&["road", "boar", "dawn"], 12);
/// assert_eq!(lines, ["road  boar", "dawn"]);
/// ```
#[must_use]
pub fn wrap_words(words: &[&str], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in words {
        if !line.is_empty() && line.len() + 2 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Render a table with rounded box-drawing borders
///
/// Cells may span several lines (separated by `\n`); rows are divided by a
/// horizontal rule.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate().take(columns) {
            for line in cell.lines() {
                widths[col] = widths[col].max(line.chars().count());
            }
        }
    }

    let rule = |left: char, mid: char, right: char| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(&mid.to_string()))
    };
    let line = |cells: &[&str]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, &w)| format!(" {:<w$} ", cells.get(col).copied().unwrap_or("")))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule('╭', '┬', '╮');
    out.push_str(&line(headers));

    for row in rows {
        out.push_str(&rule('├', '┼', '┤'));
        let split: Vec<Vec<&str>> = row.iter().map(|cell| cell.lines().collect()).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for i in 0..height {
            let cells: Vec<&str> = split
                .iter()
                .map(|lines| lines.get(i).copied().unwrap_or(""))
                .collect();
            out.push_str(&line(&cells));
        }
    }

    out.push_str(&rule('╰', '┴', '╯'));
    out
}
