//! Sentence-level cleanup shared by the role formatter and the composer.

const TERMINAL_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// Trim surrounding whitespace, then drop the whole run of trailing `.`, `?`
/// and `!` characters. Whitespace uncovered by the strip is left alone.
pub fn trim_terminal_punctuation(text: &str) -> &str {
    text.trim().trim_end_matches(TERMINAL_PUNCTUATION)
}

/// Turn a raw field value into a sentence ending in exactly one period,
/// substituting `fallback` when nothing is left after trimming.
pub fn normalize_sentence(text: &str, fallback: &str) -> String {
    let trimmed = trim_terminal_punctuation(text);
    let body = if trimmed.is_empty() { fallback } else { trimmed };
    format!("{}.", body)
}
