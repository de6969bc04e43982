//! Label text helpers.

/// Wrap `text` to lines of at most `width` characters.
///
/// Greedy whitespace wrapping: runs of whitespace (including existing line
/// breaks) become single separators, and words longer than `width` are
/// split across lines. Empty or all-whitespace input gives an empty string.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
            continue;
        }
        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if word_len <= width {
            line.push_str(word);
            line_len = word_len;
            continue;
        }

        let chars: Vec<char> = word.chars().collect();
        let mut chunks = chars.chunks(width).peekable();
        while let Some(chunk) = chunks.next() {
            let piece: String = chunk.iter().collect();
            if chunks.peek().is_some() {
                lines.push(piece);
            } else {
                line_len = chunk.len();
                line = piece;
            }
        }
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines.join("\n")
}

/// Format a number the way labels show it: shortest round-trip digits,
/// with `.0` kept on integral values.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
