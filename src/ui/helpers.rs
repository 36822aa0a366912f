//! Shared rendering utilities.
//!
//! Text width is measured in `char`s. Emoji occupy two terminal cells, which
//! the callers account for where they print them; everything else the plugin
//! shows is single-width.

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of `char`s in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` chars, ending in `…` when shortened.
///
/// # Examples
///
/// ```
/// use palancas::ui::helpers::truncate;
///
/// assert_eq!(truncate("Respiración", 6), "Respi…");
/// assert_eq!(truncate("Fisiología", 20), "Fisiología");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Left padding that centers `width` chars in `cols`.
#[must_use]
pub const fn center_offset(width: usize, cols: usize) -> usize {
    cols.saturating_sub(width) / 2
}

/// Greedy word wrap to lines of at most `width` chars.
///
/// Words longer than `width` are hard-split. An empty input yields no lines.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }

        let needed = if line.is_empty() { 0 } else { 1 } + text_width(&word);
        if text_width(&line) + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// A bar of `width` cells, the first `filled` of them solid.
#[must_use]
pub fn bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Cells of a `width`-wide bar that represent `done` out of `total`.
#[must_use]
pub fn proportion(done: usize, total: usize, width: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (done.min(total) * width) / total
}

/// Mood change with a `+` only when positive: `+2`, `0`, `-1`.
#[must_use]
pub fn signed_delta(delta: i32) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}
