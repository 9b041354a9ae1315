//! Content normalization.
//!
//! Multi-line content keeps its interior structure: the minimum leading
//! whitespace over non-blank sub-lines is stripped from every sub-line,
//! trailing whitespace is trimmed per sub-line, and only boundary blank
//! lines are dropped. Single-line content is trimmed whole. Embedded
//! `[[`/`]]` markers pass through untouched.

/// Normalize raw element content.
pub fn normalize(raw: &str) -> String {
    if !raw.contains('\n') {
        return raw.trim().to_string();
    }

    let lines: Vec<&str> = raw.split('\n').collect();
    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_width(line))
        .min()
        .unwrap_or(0);

    let mut normalized: Vec<&str> = lines
        .iter()
        .map(|line| strip_columns(line, min_indent).trim_end())
        .collect();

    while normalized.first().is_some_and(|line| line.is_empty()) {
        normalized.remove(0);
    }
    while normalized.last().is_some_and(|line| line.is_empty()) {
        normalized.pop();
    }

    normalized.join("\n")
}

/// Width of a line's leading whitespace run.
fn leading_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drop up to `count` leading whitespace columns. Blank lines may hold
/// fewer than `count`; they lose what they have.
fn strip_columns(line: &str, count: usize) -> &str {
    let mut stripped = line;
    for _ in 0..count {
        match stripped.strip_prefix(|c: char| c.is_whitespace()) {
            Some(rest) => stripped = rest,
            None => break,
        }
    }
    stripped
}
