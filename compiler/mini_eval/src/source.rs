//! Splitting program text into instruction lines.

/// Split `text` into instruction lines.
///
/// Lines end at `\n` (a preceding `\r` is dropped). Trailing empty lines are
/// removed, so a final newline never produces an extra instruction; empty
/// lines in the middle are kept and will fail classification.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
