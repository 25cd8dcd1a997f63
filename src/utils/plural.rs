//! Count phrases for log lines.

/// Plural form of an English noun, for the handful of nouns the logs use.
fn pluralize(noun: &str) -> String {
    match noun.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) => format!("{stem}ies"),
        _ => format!("{noun}s"),
    }
}

/// Format count with noun: `1 image`, `3 images`, `2 entries`.
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {}", pluralize(noun))
    }
}
