//! Fixed-width text fitting for table cells.
//!
//! Widths count characters, not glyph advances; the report uses a fixed
//! column budget rather than font metrics.

/// Break `text` into lines of at most `width` characters.
///
/// Words are kept whole where they fit; a word longer than `width` is split
/// across lines. Runs of whitespace collapse to a single space. Always
/// returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let word_len = chars.len();
        if current_len == 0 {
            current.extend(chars);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.extend(chars);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, chars.into_iter().collect()));
            current_len = word_len;
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Cut `text` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }

    let mut cut: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    cut.push_str(ELLIPSIS);
    cut
}
